//! Core traits for the Regula crates.
//!
//! This crate defines the two seams that the expression engine, solvers, and
//! observers meet at:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output, such as
//!   a parsed expression evaluated at `x`
//! - [`Observer`]: receives solver events and optionally returns control actions

mod model;
mod observer;

pub use model::{FnModel, Model};
pub use observer::Observer;
