use regula_core::Model;
use tracing::debug;

use crate::{EvalError, Expression, ParseError};

/// Holds the current expression and evaluates it on request.
///
/// The engine owns at most one expression. A failed
/// [`set_expression`](Engine::set_expression) leaves the previous expression
/// in place, so the engine is never left half-updated.
///
/// The engine is not meant to be shared between concurrent solves; give each
/// one its own instance.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    expression: Option<Expression>,
}

impl Engine {
    /// Creates an engine with no expression set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text` and, on success, makes it the current expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `text` is not a valid formula in `x`. The
    /// previously stored expression, if any, is kept.
    pub fn set_expression(&mut self, text: &str) -> Result<(), ParseError> {
        let parsed = Expression::parse(text)?;
        debug!(expression = %parsed, tree = %parsed.root(), "expression set");
        self.expression = Some(parsed);
        Ok(())
    }

    /// Returns the current expression, if one is set.
    #[must_use]
    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    /// Returns true if an expression is set.
    #[must_use]
    pub fn has_expression(&self) -> bool {
        self.expression.is_some()
    }

    /// Removes the current expression.
    pub fn clear(&mut self) {
        self.expression = None;
    }

    /// Evaluates the current expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::NoExpression`] if nothing is set, or the
    /// expression's own evaluation error.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        self.expression
            .as_ref()
            .ok_or(EvalError::NoExpression)?
            .eval(x)
    }
}

impl Model for Engine {
    type Input = f64;
    type Output = f64;
    type Error = EvalError;

    fn call(&self, x: &f64) -> Result<f64, EvalError> {
        self.evaluate(*x)
    }
}
