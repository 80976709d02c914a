//! Dense `(x, f(x))` sampling around an interval, for display.
//!
//! For an interval `[a, b]` of width `w`, the sample covers
//! `[a - margin * w, b + margin * w]` with `num_points` evenly spaced values,
//! both ends included. A single failed evaluation aborts the whole call.

use std::error::Error as StdError;

use regula_core::Model;
use thiserror::Error;
use tracing::debug;

use crate::evaluate;

/// Configuration for the plot sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Extra range on each side, as a multiple of the interval width.
    pub margin: f64,

    pub num_points: usize,
}

/// Errors that can occur when validating a plot config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("margin must be finite and non-negative")]
    Margin,
}

/// Errors that can occur while sampling.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("plot range bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("model call failed at x = {x}")]
    Model {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl From<crate::EvalError> for Error {
    fn from(err: crate::EvalError) -> Self {
        match err {
            crate::EvalError::Model { x, source } => Self::Model { x, source },
            crate::EvalError::NonFinite { x, value } => Self::NonFiniteValue { x, value },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            margin: 1.5,
            num_points: 1000,
        }
    }
}

impl Config {
    /// Checks that the margin is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Margin`] otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::Margin);
        }
        Ok(())
    }

    /// Returns the range `[a - margin * w, b + margin * w]` sampled for `[a, b]`.
    #[must_use]
    pub fn range(&self, a: f64, b: f64) -> (f64, f64) {
        let width = b - a;
        (a - self.margin * width, b + self.margin * width)
    }
}

/// Samples `model` over the expanded range of `[a, b]`.
///
/// Returns the x-values and the matching function values.
///
/// # Errors
///
/// Returns an error if the config is invalid, the range is not finite, or
/// any evaluation fails.
pub fn get_plot_points<M>(
    model: &M,
    a: f64,
    b: f64,
    config: &Config,
) -> Result<(Vec<f64>, Vec<f64>), Error>
where
    M: Model<Input = f64, Output = f64>,
{
    config.validate()?;

    let (start, stop) = config.range(a, b);
    for value in [start, stop] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBound { value });
        }
    }

    let xs = linspace(start, stop, config.num_points);
    let ys = xs
        .iter()
        .map(|&x| evaluate(model, x))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(start, stop, points = xs.len(), "sampled plot points");
    Ok((xs, ys))
}

/// Returns `n` evenly spaced values from `start` to `stop`, both included.
///
/// One value gives `[start]`; zero gives an empty vector.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (stop - start) / (n - 1) as f64;

            let mut values: Vec<f64> = (0..n - 1)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let offset = i as f64 * step;
                    start + offset
                })
                .collect();
            values.push(stop);
            values
        }
    }
}
