//! Formula evaluator
//!
//! Folds a parsed [`Expr`] down to a number, and exposes
//! [`evaluate_formula`], the substitute-then-evaluate front door used by
//! the cost engine.

use tracing::{debug, warn};

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::parser::parse_expression;
use crate::substitute::{substitute, VariableMap};
use ladle_core::{Value, UNDEFINED_TOKEN};

/// Evaluate a parsed expression
pub fn evaluate(expr: &Expr) -> FormulaResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),

        Expr::UnaryOp { op, operand } => {
            let value = evaluate(operand)?;
            match op {
                UnaryOperator::Negate => Ok(-value),
            }
        }

        Expr::BinaryOp { op, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            match op {
                BinaryOperator::Add => Ok(left + right),
                BinaryOperator::Subtract => Ok(left - right),
                BinaryOperator::Multiply => Ok(left * right),
                BinaryOperator::Divide => {
                    if right == 0.0 {
                        Err(FormulaError::Evaluation("division by zero".into()))
                    } else {
                        Ok(left / right)
                    }
                }
            }
        }
    }
}

/// Substitute `variables` into `formula` and evaluate the result.
///
/// Failures are contained rather than propagated: a binding carrying the
/// undefined marker, a leftover undefined token after substitution, a
/// malformed expression, or an arithmetic error all produce
/// [`Value::Undefined`] with a warning diagnostic. The caller always gets
/// a value for the dish.
pub fn evaluate_formula(formula: &str, variables: &VariableMap) -> Value {
    let substituted = substitute(formula, variables);
    debug!("formula '{}' -> '{}'", formula, substituted);

    if substituted.contains(UNDEFINED_TOKEN) {
        warn!(
            "formula '{}' references missing values: {}",
            formula, substituted
        );
        return Value::Undefined;
    }

    match parse_expression(&substituted).and_then(|expr| evaluate(&expr)) {
        Ok(n) => Value::Number(n),
        Err(e) => {
            warn!("error evaluating formula '{}': {}", formula, e);
            Value::Undefined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(entries: &[(&str, Value)]) -> VariableMap {
        entries
            .iter()
            .map(|&(name, value)| (name.to_string(), value))
            .collect()
    }

    fn eval_str(input: &str) -> FormulaResult<f64> {
        evaluate(&parse_expression(input)?)
    }

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(eval_str("1+2*3").unwrap(), 7.0);
        assert_eq!(eval_str("(1+2)*3").unwrap(), 9.0);
        assert_eq!(eval_str("10-4/2").unwrap(), 8.0);
        assert_eq!(eval_str("-3+5").unwrap(), 2.0);
        assert_eq!(eval_str("7/2").unwrap(), 3.5);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert!(matches!(
            eval_str("1/0"),
            Err(FormulaError::Evaluation(_))
        ));
        assert!(matches!(
            eval_str("1/(2-2)"),
            Err(FormulaError::Evaluation(_))
        ));
    }

    #[test]
    fn test_formula_with_variables() {
        let v = vars(&[("A", Value::Number(2.0)), ("B", Value::Number(3.0))]);
        assert_eq!(evaluate_formula("A+B", &v), Value::Number(5.0));
        assert_eq!(evaluate_formula("A*B+1", &v), Value::Number(7.0));
    }

    #[test]
    fn test_formula_with_undefined_variable() {
        let v = vars(&[("A", Value::Undefined), ("B", Value::Number(3.0))]);
        assert_eq!(evaluate_formula("A+B", &v), Value::Undefined);
    }

    #[test]
    fn test_formula_with_unbound_variable() {
        // "B" survives substitution and is rejected by the parser.
        let v = vars(&[("A", Value::Number(2.0))]);
        assert_eq!(evaluate_formula("A+B", &v), Value::Undefined);
    }

    #[test]
    fn test_formula_with_empty_variable_map() {
        // Pure arithmetic evaluates; anything with variables does not.
        let v = VariableMap::new();
        assert_eq!(evaluate_formula("2+3*4", &v), Value::Number(14.0));
        assert_eq!(evaluate_formula("A+B", &v), Value::Undefined);
    }

    #[test]
    fn test_undefined_variable_absent_from_formula_is_harmless() {
        // The marker only poisons the result if it lands in the text.
        let v = vars(&[("Z", Value::Undefined), ("A", Value::Number(2.0))]);
        assert_eq!(evaluate_formula("A*3", &v), Value::Number(6.0));
    }

    #[test]
    fn test_substitution_hazard_is_order_dependent() {
        // "A" substitutes first and rewrites the inside of "AA":
        // "AA+A" -> "11+1" -> 12
        let v = vars(&[("A", Value::Number(1.0)), ("AA", Value::Number(2.0))]);
        assert_eq!(evaluate_formula("AA+A", &v), Value::Number(12.0));

        // "AA" substitutes first: "AA+A" -> "2+A" -> "2+1" -> 3
        let v = vars(&[("AA", Value::Number(2.0)), ("A", Value::Number(1.0))]);
        assert_eq!(evaluate_formula("AA+A", &v), Value::Number(3.0));
    }

    #[test]
    fn test_formula_division_by_zero_is_undefined() {
        let v = vars(&[("A", Value::Number(0.0))]);
        assert_eq!(evaluate_formula("1/A", &v), Value::Undefined);
    }

    #[test]
    fn test_malformed_formula_is_undefined() {
        let v = vars(&[("A", Value::Number(1.0))]);
        assert_eq!(evaluate_formula("A++", &v), Value::Undefined);
        assert_eq!(evaluate_formula("(A", &v), Value::Undefined);
    }
}
