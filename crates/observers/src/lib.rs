//! Reusable observers for the regula solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits that let an observer read any solver
//!   event carrying an iteration index, an estimate, and a residual
//!
//! # Observers
//!
//! - [`Recorder`] keeps an [`IterationRecord`] for every iteration.
//! - [`TraceObserver`] logs every iteration through `tracing`, optionally
//!   with the full bracketing step from [`bracket_details`].
//!
//! Both can be passed by value or as `&mut`, so the caller keeps access to
//! the observer after the solve.

mod record;
mod trace;
pub mod traits;

pub use record::{IterationRecord, Recorder};
pub use trace::{TraceObserver, bracket_details};
