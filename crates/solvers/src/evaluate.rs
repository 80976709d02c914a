use std::error::Error as StdError;

use regula_core::Model;
use thiserror::Error;

/// Errors from evaluating a scalar model at a point.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The model call failed.
    #[error("model call failed at x = {x}")]
    Model {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The model returned NaN or an infinity.
    #[error("model returned non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },
}

/// Evaluates a scalar model at `x`, boxing its error and rejecting
/// non-finite outputs.
///
/// This is the single evaluation boundary for the solvers: callers either
/// propagate the error or, like the continuity scan, treat it as a failed
/// sample.
///
/// # Errors
///
/// Returns an error if the model call fails or its output is not finite.
pub fn evaluate<M>(model: &M, x: f64) -> Result<f64, EvalError>
where
    M: Model<Input = f64, Output = f64>,
{
    let value = model.call(&x).map_err(|e| EvalError::Model {
        x,
        source: Box::new(e),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFinite { x, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use regula_core::FnModel;

    #[test]
    fn passes_finite_values_through() {
        let model = FnModel(|x: f64| 2.0 * x);
        assert_relative_eq!(evaluate(&model, 1.5).unwrap(), 3.0);
    }

    #[test]
    fn rejects_non_finite_outputs() {
        let model = FnModel(|x: f64| 1.0 / x);
        assert!(matches!(
            evaluate(&model, 0.0),
            Err(EvalError::NonFinite { x, .. }) if x == 0.0
        ));
    }

    #[test]
    fn boxes_model_errors() {
        let mut engine = regula_expr::Engine::new();
        engine.set_expression("sqrt(x)").expect("valid");

        let err = evaluate(&engine, -4.0).unwrap_err();
        assert!(matches!(err, EvalError::Model { x, .. } if x == -4.0));
        assert!(err.source().is_some());
    }
}
