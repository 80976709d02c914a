//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event types, so the observers
//! in this crate work with any solver whose events implement them.
//!
//! # Example
//!
//! ```rust
//! use regula_core::{FnModel, Observer};
//! use regula_observers::traits::HasResidual;
//! use regula_solvers::equation::false_position::{self, Endpoint};
//!
//! struct WorstResidual(f64);
//!
//! impl<E: HasResidual, A> Observer<E, A> for &mut WorstResidual {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.0 = self.0.max(event.residual().abs());
//!         None
//!     }
//! }
//!
//! let model = FnModel(|x: f64| x * x - 2.0);
//! let config = false_position::Config::default();
//! let mut worst = WorstResidual(0.0);
//!
//! false_position::solve(&model, [1.0, 2.0], &config, &mut worst).unwrap();
//! assert!(worst.0 > 0.0);
//! ```

use regula_solvers::equation::false_position::{self, Endpoint};

/// An event that carries a 1-based iteration index.
pub trait HasIteration {
    fn iteration(&self) -> usize;
}

/// An event that carries the current root estimate.
pub trait HasEstimate {
    fn estimate(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event produced by a bracketing step.
///
/// The provided methods describe the secant through the bracket ends.
pub trait HasBracket {
    /// Returns the bracket `[a, b]` the estimate came from.
    fn bracket(&self) -> [f64; 2];

    /// Returns `[f(a), f(b)]`.
    fn bracket_values(&self) -> [f64; 2];

    /// Returns the bracket end the estimate replaces.
    fn replaced(&self) -> Endpoint;

    /// Returns `b - a`.
    fn delta_x(&self) -> f64 {
        let [a, b] = self.bracket();
        b - a
    }

    /// Returns `f(b) - f(a)`.
    fn delta_y(&self) -> f64 {
        let [fa, fb] = self.bracket_values();
        fb - fa
    }

    /// Returns the slope of the secant.
    fn slope(&self) -> f64 {
        self.delta_y() / self.delta_x()
    }
}

// --- false_position::Event ---

impl HasIteration for false_position::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for false_position::Event {
    fn estimate(&self) -> f64 {
        self.x
    }
}

impl HasResidual for false_position::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasBracket for false_position::Event {
    fn bracket(&self) -> [f64; 2] {
        self.bracket
    }

    fn bracket_values(&self) -> [f64; 2] {
        self.values
    }

    fn replaced(&self) -> Endpoint {
        false_position::Event::replaced(self)
    }
}
