//! Checks that decide whether the false-position method applies to an
//! interval.
//!
//! # Sampling
//!
//! The continuity scan and the root count walk the half-open interval
//! `[a, b)` on a fixed grid: `x_i = a + i * step_size` for
//! `i in 0..ceil((b - a) / step_size)`. The upper bound is never sampled and
//! an interval with `a >= b` has no samples at all.
//!
//! # Failure handling
//!
//! Evaluation failures are an expected outcome when scanning a wide
//! interval, so none of the checks propagate them:
//!
//! - [`is_continuous`] reports `false` at the first failing sample.
//! - [`unequal_signs`] reports `false` when either endpoint fails.
//! - [`number_of_roots`] skips failing samples.
//!
//! The [`Error`] type is reserved for scans that cannot run at all: an
//! invalid config, a non-finite bound, or a grid larger than
//! [`Config::max_samples`].

mod config;
mod error;
mod grid;
mod report;


pub use config::{Config, ConfigError, DEFAULT_MAX_SAMPLES};
pub use error::Error;
pub use report::{Reason, WorkabilityReport};

use regula_core::Model;
use tracing::{debug, trace};

use crate::evaluate;

use grid::Grid;

/// Returns the first sample in `[a, b)` where the function fails the
/// continuity test, or `None` if every sample passes.
///
/// A sample `p` passes when `f(p - offset)`, `f(p)` and `f(p + offset)` all
/// evaluate to finite values and `f(p)` is within `tolerance` of both
/// neighbours.
///
/// # Errors
///
/// Returns an error if the scan cannot run; see the [module docs](self).
pub fn find_discontinuity<M>(
    model: &M,
    a: f64,
    b: f64,
    config: &Config,
) -> Result<Option<f64>, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let grid = Grid::new(a, b, config)?;

    let found = grid.points().find(|&p| !continuous_at(model, p, config));
    trace!(a, b, samples = grid.len(), discontinuity = ?found, "continuity scan");

    Ok(found)
}

/// Returns true if the function passes the continuity test at every sample
/// of `[a, b)`.
///
/// # Errors
///
/// Returns an error if the scan cannot run; see the [module docs](self).
pub fn is_continuous<M>(model: &M, a: f64, b: f64, config: &Config) -> Result<bool, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    find_discontinuity(model, a, b, config).map(|found| found.is_none())
}

/// Returns true if `f(a) * f(b) < 0`.
///
/// A zero at either endpoint, or a failed evaluation, gives `false`.
pub fn unequal_signs<M>(model: &M, a: f64, b: f64) -> bool
where
    M: Model<Input = f64, Output = f64>,
{
    matches!(
        (evaluate(model, a), evaluate(model, b)),
        (Ok(fa), Ok(fb)) if fa * fb < 0.0
    )
}

/// Counts how often the sign of `f` flips between consecutive samples of
/// `[a, b)`.
///
/// Only negativity is tracked, so zero counts as positive. The reference sign
/// is taken from `f(a)`, or from the first sample that evaluates if `f(a)`
/// fails. This is a heuristic: roots between samples, or where `f` touches
/// zero without crossing, are missed.
///
/// # Errors
///
/// Returns an error if the scan cannot run; see the [module docs](self).
pub fn number_of_roots<M>(model: &M, a: f64, b: f64, config: &Config) -> Result<usize, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let grid = Grid::new(a, b, config)?;

    let mut signs = grid
        .points()
        .filter_map(|x| evaluate(model, x).ok().map(|y| y < 0.0));

    let Some(mut negative) = signs.next() else {
        return Ok(0);
    };

    let mut roots = 0;
    for is_negative in signs {
        if is_negative != negative {
            roots += 1;
            negative = is_negative;
        }
    }

    trace!(a, b, samples = grid.len(), roots, "root count scan");
    Ok(roots)
}

/// Runs all three checks and combines them into a [`WorkabilityReport`].
///
/// # Errors
///
/// Returns an error if a scan cannot run; see the [module docs](self).
/// An interval that is merely not workable is reported, not an error.
pub fn is_workable<M>(
    model: &M,
    a: f64,
    b: f64,
    config: &Config,
) -> Result<WorkabilityReport, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    let discontinuity = find_discontinuity(model, a, b, config)?;
    let unequal_signs = unequal_signs(model, a, b);
    let num_roots = number_of_roots(model, a, b, config)?;

    let report = WorkabilityReport::new(discontinuity, unequal_signs, num_roots);
    debug!(
        a,
        b,
        continuous = report.continuous,
        unequal_signs = report.unequal_signs,
        num_roots = report.num_roots,
        workable = report.workable,
        "workability checked"
    );

    Ok(report)
}

fn continuous_at<M>(model: &M, p: f64, config: &Config) -> bool
where
    M: Model<Input = f64, Output = f64>,
{
    let (Ok(left), Ok(actual), Ok(right)) = (
        evaluate(model, p - config.offset),
        evaluate(model, p),
        evaluate(model, p + config.offset),
    ) else {
        return false;
    };

    (actual - left).abs() <= config.tolerance && (actual - right).abs() <= config.tolerance
}
