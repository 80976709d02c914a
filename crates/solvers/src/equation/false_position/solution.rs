/// The result of a converged false-position solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The root estimate.
    pub x: f64,
    /// Residual `f(x)` at the root estimate.
    pub residual: f64,
    /// Number of iterations performed.
    pub iters: usize,
}
