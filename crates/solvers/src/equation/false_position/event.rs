/// Iteration event emitted by the false-position solver.
///
/// One event is emitted per iteration, after the new estimate has been
/// evaluated and before the convergence test. Together with
/// [`replaced`](Event::replaced) it carries everything needed to explain the
/// step: the secant endpoints, their values, and where the secant crosses zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, starting at 1.
    pub iter: usize,
    /// Bracket `[a, b]` the estimate was interpolated from.
    pub bracket: [f64; 2],
    /// Values `[f(a), f(b)]` at the bracket ends.
    pub values: [f64; 2],
    /// The new estimate `c`.
    pub x: f64,
    /// The residual `f(c)`.
    pub residual: f64,
}

/// One end of the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The `a` end.
    Lower,
    /// The `b` end.
    Upper,
}

impl Event {
    /// Returns the bracket end the estimate replaces if the solver continues.
    ///
    /// When `f(a)` and `f(c)` have opposite signs the root lies in `[a, c]`
    /// and `c` replaces `b`; otherwise `c` replaces `a`.
    #[must_use]
    pub fn replaced(&self) -> Endpoint {
        if self.values[0] * self.residual < 0.0 {
            Endpoint::Upper
        } else {
            Endpoint::Lower
        }
    }
}

/// Control actions supported by the false-position solver.
///
/// The solver accepts none: observers are notified for their side effects
/// only, and the iteration never depends on what they return. The enum is
/// empty, so an observer can only return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {}
