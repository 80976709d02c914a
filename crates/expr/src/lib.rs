//! Expression engine for single-variable real functions.
//!
//! Formulas in the variable `x` are parsed once into an immutable
//! [`Expression`] tree and then evaluated as many times as needed. Evaluation
//! is a pure function of the tree and `x`.
//!
//! # Pipeline
//!
//! - tokenization splits the text into numbers, identifiers, and operators
//! - the shunting-yard pass reorders tokens into reverse Polish notation,
//!   resolving precedence, unary signs, and function arity
//! - the RPN sequence is folded into an [`Expr`] tree
//!
//! [`Engine`] holds at most one expression at a time and implements
//! [`regula_core::Model`], so it plugs straight into the solvers.
//!
//! ```
//! use regula_expr::Engine;
//!
//! let mut engine = Engine::new();
//! engine.set_expression("x^3 - x - 2").unwrap();
//! assert_eq!(engine.evaluate(2.0).unwrap(), 4.0);
//! ```

mod ast;
mod engine;
mod error;
mod expression;
mod function;
mod rpn;
mod token;

pub use ast::{BinaryOp, Expr, UnaryOp};
pub use engine::Engine;
pub use error::{EvalError, ParseError};
pub use expression::Expression;
pub use function::{Arity, Function};
