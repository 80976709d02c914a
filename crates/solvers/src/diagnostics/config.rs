use thiserror::Error;

use crate::{ALPHA, EPSILON, STEP_SIZE};

/// Default limit on the number of samples in a single scan.
pub const DEFAULT_MAX_SAMPLES: usize = 10_000_000;

/// Configuration for the diagnostic scans.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Distance between consecutive samples.
    pub step_size: f64,

    /// Distance from a sample to the neighbours it is compared against in
    /// the continuity test.
    pub offset: f64,

    /// Largest allowed difference between a sample and either neighbour.
    pub tolerance: f64,

    /// Scans needing more samples than this are rejected.
    pub max_samples: usize,
}

/// Errors that can occur when validating a diagnostics config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_size must be finite and positive")]
    StepSize,

    #[error("offset must be finite and non-negative")]
    Offset,

    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_size: STEP_SIZE,
            offset: ALPHA,
            tolerance: EPSILON,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl Config {
    /// Checks every field.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }
        if !self.offset.is_finite() || self.offset < 0.0 {
            return Err(ConfigError::Offset);
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_fields() {
        let base = Config::default();

        let zero_step = Config {
            step_size: 0.0,
            ..base
        };
        assert_eq!(zero_step.validate(), Err(ConfigError::StepSize));

        let nan_offset = Config {
            offset: f64::NAN,
            ..base
        };
        assert_eq!(nan_offset.validate(), Err(ConfigError::Offset));

        let negative_tolerance = Config {
            tolerance: -1e-3,
            ..base
        };
        assert_eq!(negative_tolerance.validate(), Err(ConfigError::Tolerance));
    }
}
