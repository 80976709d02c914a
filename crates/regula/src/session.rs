use regula_core::Observer;
use regula_expr::{Engine, EvalError, Expression, ParseError};
use regula_solvers::{
    diagnostics::{self, WorkabilityReport},
    equation::false_position::{self, Action, Event, Solution},
    plot,
};
use tracing::debug;

use crate::Settings;

/// One expression together with the settings used to analyse it.
///
/// The session owns its [`Engine`]; the diagnostics, the solver and the plot
/// sampler only borrow it. Use one session per thread.
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: Engine,
    settings: Settings,
}

impl Session {
    /// Creates a session with no expression and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            engine: Engine::new(),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Returns the current expression, if one is set.
    #[must_use]
    pub fn expression(&self) -> Option<&Expression> {
        self.engine.expression()
    }

    /// Parses `text` and makes it the current expression.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `text` is not a valid expression, in which
    /// case the previous expression stays in place.
    pub fn set_expression(&mut self, text: &str) -> Result<(), ParseError> {
        self.engine.set_expression(text)
    }

    /// Evaluates the current expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if no expression is set or the evaluation
    /// fails.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        self.engine.evaluate(x)
    }

    /// Checks whether the false-position method applies to `[a, b]`.
    ///
    /// Without an expression the report is [unchecked](WorkabilityReport::unchecked):
    /// not workable, with every field false or zero.
    ///
    /// # Errors
    ///
    /// Returns an error only if a scan cannot run at all, for example with a
    /// non-finite bound.
    pub fn is_workable(&self, a: f64, b: f64) -> Result<WorkabilityReport, diagnostics::Error> {
        if !self.engine.has_expression() {
            debug!(a, b, "no expression set, reporting not workable");
            return Ok(WorkabilityReport::unchecked());
        }
        diagnostics::is_workable(&self.engine, a, b, &self.settings.diagnostics)
    }

    /// Runs the false-position method on `[a, b]`, notifying `observer` once
    /// per iteration.
    ///
    /// Pass `()` to solve without observation.
    ///
    /// # Errors
    ///
    /// Returns an error if an evaluation fails, the secant becomes flat, or
    /// the configured iteration cap is reached.
    pub fn solve<Obs>(
        &self,
        a: f64,
        b: f64,
        observer: Obs,
    ) -> Result<Solution, false_position::Error>
    where
        Obs: Observer<Event, Action>,
    {
        false_position::solve(&self.engine, [a, b], &self.settings.solver, observer)
    }

    /// Samples the current expression around `[a, b]` for plotting.
    ///
    /// `num_points` overrides the configured point count when given.
    ///
    /// # Errors
    ///
    /// Returns an error if any sample fails to evaluate.
    pub fn get_plot_points(
        &self,
        a: f64,
        b: f64,
        num_points: Option<usize>,
    ) -> Result<(Vec<f64>, Vec<f64>), plot::Error> {
        let mut config = self.settings.plot;
        if let Some(n) = num_points {
            config.num_points = n;
        }
        plot::get_plot_points(&self.engine, a, b, &config)
    }
}
