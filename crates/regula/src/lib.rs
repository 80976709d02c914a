//! Find a root of a typed-in function with the false-position method.
//!
//! A [`Session`] holds one parsed expression and the [`Settings`] used to
//! analyse it. The usual flow is to set an expression, check that the
//! interval is workable, and only then solve:
//!
//! ```
//! use regula::Session;
//!
//! let mut session = Session::new();
//! session.set_expression("x^3 - x - 2")?;
//!
//! let report = session.is_workable(1.0, 2.0)?;
//! assert!(report.workable);
//!
//! let solution = session.solve(1.0, 2.0, ())?;
//! assert!((solution.x - 1.521_379_7).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The building blocks are re-exported for callers that need more control:
//! [`expr`] for parsing, [`solvers`] for the numerical routines on any
//! [`Model`], and [`observers`] for iteration recording and logging.

mod session;
mod settings;

pub use regula_core::{FnModel, Model, Observer};
pub use regula_expr as expr;
pub use regula_observers as observers;
pub use regula_solvers as solvers;

pub use session::Session;
pub use settings::{PRECISION, Settings, SettingsError};
