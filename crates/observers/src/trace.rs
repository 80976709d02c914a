use regula_core::Observer;
use regula_solvers::equation::false_position::Endpoint;
use tracing::info;

use crate::traits::{HasBracket, HasEstimate, HasIteration, HasResidual};

/// Logs every iteration at `info` level.
///
/// Values are formatted with `precision` decimal places. In detailed mode
/// each entry also shows the bracket, the secant and the endpoint the estimate
/// replaces (see [`bracket_details`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    precision: usize,
    detailed: bool,
}

impl TraceObserver {
    /// Number of decimal places used when none is given.
    pub const DEFAULT_PRECISION: usize = 10;

    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            detailed: false,
        }
    }

    /// Switches to detailed entries.
    #[must_use]
    pub fn detailed(self) -> Self {
        Self {
            detailed: true,
            ..self
        }
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Renders an event the way it is logged.
    #[must_use]
    pub fn format<E>(&self, event: &E) -> String
    where
        E: HasIteration + HasEstimate + HasResidual + HasBracket,
    {
        let p = self.precision;
        let summary = format!(
            "iteration {}: c = {:.p$}, f(c) = {:.p$}",
            event.iteration(),
            event.estimate(),
            event.residual(),
        );

        if self.detailed {
            format!("{summary}\n{}", bracket_details(event, p))
        } else {
            summary
        }
    }
}

/// Explains one bracketing step, one value per line.
///
/// Lists `f(a)`, `f(b)`, `a`, `b`, `c`, the secant's rise, run and slope, and
/// which end of the bracket `c` replaces.
pub fn bracket_details<E>(event: &E, precision: usize) -> String
where
    E: HasEstimate + HasBracket,
{
    let p = precision;
    let [a, b] = event.bracket();
    let [fa, fb] = event.bracket_values();

    let mut lines: Vec<String> = [
        ("f(a) = ", fa),
        ("f(b) = ", fb),
        ("a = ", a),
        ("b = ", b),
        ("c = ", event.estimate()),
        ("delta y: ", event.delta_y()),
        ("delta x: ", event.delta_x()),
        ("slope: ", event.slope()),
    ]
    .into_iter()
    .map(|(label, value)| format!("{label}{value:.p$}"))
    .collect();

    lines.push(
        match event.replaced() {
            Endpoint::Upper => "f(b) and f(c) have the same sign, so c replaces b",
            Endpoint::Lower => "f(a) and f(c) have the same sign, so c replaces a",
        }
        .to_owned(),
    );
    lines.join("\n")
}

impl Default for TraceObserver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION)
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIteration + HasEstimate + HasResidual + HasBracket,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        info!("{}", self.format(event));
        None
    }
}

impl<E, A> Observer<E, A> for &mut TraceObserver
where
    E: HasIteration + HasEstimate + HasResidual + HasBracket,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        <TraceObserver as Observer<E, A>>::observe(self, event)
    }
}
