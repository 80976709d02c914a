use thiserror::Error;

use super::ConfigError;

/// Errors that prevent a diagnostic scan from running.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("interval bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("scanning [{a}, {b}] needs more than {max_samples} samples")]
    TooManySamples { a: f64, b: f64, max_samples: usize },
}
