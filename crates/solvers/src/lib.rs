//! Numerical routines for locating a root of a scalar function with the
//! false-position (regula falsi) method.
//!
//! Everything here works with any [`Model`] mapping `f64` to `f64`, such as a
//! parsed expression from `regula-expr` or a closure wrapped in
//! [`FnModel`](regula_core::FnModel).
//!
//! # Modules
//!
//! - [`diagnostics`]: checks that the method applies to an interval, using
//!   continuity sampling, endpoint sign change, and a root-count estimate
//! - [`equation`]: the false-position solver itself
//! - [`plot`]: dense `(x, f(x))` sampling around an interval for display
//!
//! A typical caller runs [`diagnostics::is_workable`] first and only solves
//! when the report is workable. The check lowers, but does not remove, the
//! chance of a pathological interval.
//!
//! [`Model`]: regula_core::Model

mod evaluate;

pub mod diagnostics;
pub mod equation;
pub mod plot;

pub use evaluate::{EvalError, evaluate};

/// Continuity tolerance: the largest jump allowed between a sample and its
/// close neighbours.
pub const EPSILON: f64 = 1e-4;

/// Convergence tolerance on the residual, also used as the neighbour offset
/// in the continuity scan.
pub const ALPHA: f64 = 1e-9;

/// Resolution of the diagnostic scans.
pub const STEP_SIZE: f64 = 1e-4;
