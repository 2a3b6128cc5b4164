//! Formula parser
//!
//! A recursive descent parser for substituted cost formulas with proper
//! operator precedence. The accepted grammar is exactly "arithmetic over
//! numeric literals": decimal literals, `+ - * /`, unary sign, and
//! parentheses. Any other character is rejected at scan time, before
//! anything is evaluated; there is no identifier, function, or string
//! syntax to smuggle code through.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};

/// Parse a substituted formula string into an AST
///
/// # Example
/// ```rust
/// use ladle_formula::parse_expression;
///
/// let ast = parse_expression("1+2*3").unwrap();
/// let ast = parse_expression("(4.5-1)/2").unwrap();
/// assert!(parse_expression("SUM(1,2)").is_err());
/// ```
pub fn parse_expression(input: &str) -> FormulaResult<Expr> {
    let tokens = tokenize(input)?;
    let mut parser = ExprParser::new(tokens);
    let expr = parser.parse_expression()?;

    // Make sure we consumed all input
    if !matches!(parser.current_token(), Token::Eof) {
        return Err(FormulaError::Parse(format!(
            "Unexpected token after expression: {:?}",
            parser.current_token()
        )));
    }

    Ok(expr)
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Delimiters
    LeftParen,
    RightParen,

    // End of input
    Eof,
}

/// Scan the whole input into tokens, rejecting anything outside the
/// arithmetic character set up front.
fn tokenize(input: &str) -> FormulaResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LeftParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RightParen);
            }
            '0'..='9' | '.' => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let text = &input[start..end];
                let num: f64 = text.parse().map_err(|_| {
                    FormulaError::Parse(format!("Invalid numeric literal: '{}'", text))
                })?;
                tokens.push(Token::Number(num));
            }
            _ => {
                return Err(FormulaError::Parse(format!(
                    "Unexpected character '{}' at position {}",
                    c, start
                )));
            }
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}

/// Formula parser
struct ExprParser {
    tokens: Vec<Token>,
    pos: usize,
}

impl ExprParser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&Token::Eof)
    }

    fn consume(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> FormulaResult<()> {
        if self.current_token() == expected {
            self.consume();
            Ok(())
        } else {
            Err(FormulaError::Parse(format!(
                "Expected {:?}, got {:?}",
                expected,
                self.current_token()
            )))
        }
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Unary: -, +
    // 4. Primary: literals, parentheses

    fn parse_expression(&mut self) -> FormulaResult<Expr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume();
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume();
            let right = self.parse_unary()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> FormulaResult<Expr> {
        // Prefix unary minus
        if matches!(self.current_token(), Token::Minus) {
            self.consume();
            let operand = self.parse_unary()?;
            return Ok(Expr::UnaryOp {
                op: UnaryOperator::Negate,
                operand: Box::new(operand),
            });
        }

        // Prefix plus (no-op)
        if matches!(self.current_token(), Token::Plus) {
            self.consume();
            return self.parse_unary();
        }

        self.parse_primary()
    }

    fn parse_primary(&mut self) -> FormulaResult<Expr> {
        match self.current_token().clone() {
            Token::Number(n) => {
                self.consume();
                Ok(Expr::Number(n))
            }

            Token::LeftParen => {
                self.consume();
                let expr = self.parse_expression()?;
                self.expect(&Token::RightParen)?;
                Ok(expr)
            }

            _ => Err(FormulaError::Parse(format!(
                "Unexpected token: {:?}",
                self.current_token()
            ))),
        }
    }
}
