//! # ladle-formula
//!
//! Cost-formula substitution and evaluation for ladle.
//!
//! This crate provides:
//! - Variable substitution (formula text + variable map → arithmetic text)
//! - Expression parsing (text → AST) over an arithmetic-only grammar
//! - Expression evaluation (AST → number)
//! - The [`evaluate_formula`] front door returning a tagged [`Value`]
//!
//! ## Example
//!
//! ```rust
//! use ladle_core::Value;
//! use ladle_formula::{evaluate_formula, VariableMap};
//!
//! let mut vars = VariableMap::new();
//! vars.insert("A".to_string(), Value::Number(2.0));
//! vars.insert("B".to_string(), Value::Number(3.0));
//!
//! assert_eq!(evaluate_formula("A+B", &vars), Value::Number(5.0));
//! ```
//!
//! [`Value`]: ladle_core::Value

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod substitute;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_formula};
pub use parser::parse_expression;
pub use substitute::{substitute, VariableMap};
