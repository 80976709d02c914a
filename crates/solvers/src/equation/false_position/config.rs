use thiserror::Error;

use crate::ALPHA;

/// Default iteration cap.
///
/// Regula falsi converges linearly when one endpoint stays fixed, so the cap
/// is generous; it exists to turn a pathological interval into an error
/// instead of an endless loop.
pub const DEFAULT_MAX_ITERS: usize = 100_000;

/// Configuration for the false-position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Convergence is declared once `|f(c)| <= residual_tol`.
    pub residual_tol: f64,

    /// Maximum number of iterations, or `None` to iterate until convergence
    /// with no limit.
    pub max_iters: Option<usize>,
}

/// Errors that can occur when validating a false-position config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            residual_tol: ALPHA,
            max_iters: Some(DEFAULT_MAX_ITERS),
        }
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if the
    /// iteration cap is zero.
    pub fn new(residual_tol: f64, max_iters: Option<usize>) -> Result<Self, ConfigError> {
        let config = Self {
            residual_tol,
            max_iters,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a config with no iteration cap.
    #[must_use]
    pub fn unbounded(self) -> Self {
        Self {
            max_iters: None,
            ..self
        }
    }

    /// Checks that the tolerance is finite and non-negative and the cap, if
    /// any, is positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if self.max_iters == Some(0) {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iters, Some(DEFAULT_MAX_ITERS));
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(-1.0, None), Err(ConfigError::ResidualTol));
        assert_eq!(Config::new(f64::NAN, None), Err(ConfigError::ResidualTol));
    }

    #[test]
    fn rejects_zero_cap() {
        assert_eq!(Config::new(1e-9, Some(0)), Err(ConfigError::MaxIters));
    }

    #[test]
    fn unbounded_drops_the_cap() {
        let config = Config::default().unbounded();
        assert_eq!(config.max_iters, None);
        assert!(config.validate().is_ok());
    }
}
