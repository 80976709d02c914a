use std::error::Error as StdError;

use thiserror::Error;

use crate::EvalError;

use super::ConfigError;

/// Errors that can occur during false-position solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// `f(b) - f(a)` was exactly zero, so the secant through the bracket
    /// endpoints never crosses zero.
    #[error("zero denominator: f({a}) and f({b}) are both {residual}")]
    ZeroDenominator { a: f64, b: f64, residual: f64 },

    #[error("no convergence after {iters} iterations: last estimate {x} with residual {residual}")]
    MaxIters { iters: usize, x: f64, residual: f64 },

    #[error("model call failed at x = {x}")]
    Model {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::Model { x, source } => Self::Model { x, source },
            EvalError::NonFinite { x, value } => Self::NonFiniteResidual { x, residual: value },
        }
    }
}
