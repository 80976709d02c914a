/// A callable model that maps an input to an output.
///
/// The numerical routines in `regula-solvers` work with any
/// `Model<Input = f64, Output = f64>`, so a parsed expression, a closure
/// wrapped in [`FnModel`], or a hand-written type can all be analysed and
/// solved the same way.
///
/// Implementations must be pure: calling the model twice with the same input
/// must produce the same result.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

impl<M: Model> Model for &M {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        (*self).call(input)
    }
}

/// Adapts an infallible scalar closure into a [`Model`].
///
/// ```
/// use regula_core::{FnModel, Model};
///
/// let square = FnModel(|x: f64| x * x);
/// assert_eq!(square.call(&3.0), Ok(9.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnModel<F>(pub F);

impl<F> Model for FnModel<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = std::convert::Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.0)(*input))
    }
}
