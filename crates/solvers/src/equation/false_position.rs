//! False-position (regula falsi) method for scalar root finding.
//!
//! # Algorithm
//!
//! Starting from a bracket `[a, b]`, each iteration draws the secant through
//! `(a, f(a))` and `(b, f(b))` and takes its zero as the next estimate:
//!
//! ```text
//! c = b - f(b) * (b - a) / (f(b) - f(a))
//! ```
//!
//! The solver stops once `|f(c)| <= residual_tol`. Otherwise `c` replaces
//! `b` when `f(a)` and `f(c)` have opposite signs, and replaces `a` in every
//! other case.
//!
//! # Limitations
//!
//! - The bracket is not checked for a sign change. A caller should run
//!   [`diagnostics::is_workable`](crate::diagnostics::is_workable) first.
//! - Convergence is linear when one endpoint never moves, which happens for
//!   any function that is convex or concave on the bracket.
//! - Without an iteration cap ([`Config::unbounded`]) an ill-conditioned
//!   interval can iterate forever.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, in order, after `f(c)` has
//! been evaluated and before the convergence test. Observers are
//! notification-only: [`Action`] has no variants.

mod config;
mod error;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, DEFAULT_MAX_ITERS};
pub use error::Error;
pub use event::{Action, Endpoint, Event};
pub use solution::Solution;

use regula_core::{Model, Observer};
use tracing::{debug, trace, warn};

use crate::evaluate;

/// Finds a root of `model` inside `bracket` using the false-position method.
///
/// The observer receives an [`Event`] for every iteration.
/// See the [module docs](self) for details on the iteration.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if `f(b) - f(a)`
/// becomes exactly zero, if any evaluation fails or is non-finite, or if the
/// configured iteration cap is reached before convergence.
pub fn solve<M, Obs>(
    model: &M,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: Observer<Event, Action>,
{
    config.validate()?;
    let [mut a, mut b] = validate_bracket(bracket)?;

    // Evaluation is pure, so endpoint values are carried between iterations.
    let mut fa = evaluate(model, a)?;
    let mut fb = evaluate(model, b)?;

    let mut iter = 0;
    loop {
        iter += 1;

        let denom = fb - fa;
        if denom == 0.0 {
            return Err(Error::ZeroDenominator { a, b, residual: fa });
        }

        let c = b - fb * (b - a) / denom;
        let fc = evaluate(model, c)?;
        trace!(iter, a, b, x = c, residual = fc, "false position iteration");

        let event = Event {
            iter,
            bracket: [a, b],
            values: [fa, fb],
            x: c,
            residual: fc,
        };
        if let Some(action) = observer.observe(&event) {
            match action {}
        }

        if fc.abs() <= config.residual_tol {
            debug!(iters = iter, root = c, residual = fc, "false position converged");
            return Ok(Solution {
                x: c,
                residual: fc,
                iters: iter,
            });
        }

        if let Some(max_iters) = config.max_iters
            && iter >= max_iters
        {
            warn!(iters = iter, x = c, residual = fc, "iteration cap reached");
            return Err(Error::MaxIters {
                iters: iter,
                x: c,
                residual: fc,
            });
        }

        match event.replaced() {
            Endpoint::Upper => {
                b = c;
                fb = fc;
            }
            Endpoint::Lower => {
                a = c;
                fa = fc;
            }
        }
    }
}

/// Runs the false-position method without observation.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M>(
    model: &M,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    solve(model, bracket, config, ())
}

/// Checks that both bracket values are finite. Their order is kept as given.
fn validate_bracket(bracket: [f64; 2]) -> Result<[f64; 2], Error> {
    for value in bracket {
        if !value.is_finite() {
            return Err(Error::NonFiniteBracket { value });
        }
    }
    Ok(bracket)
}
