//! Solvers for scalar equations `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`false_position`]: regula falsi on a bracketing interval

pub mod false_position;
