use regula_core::Observer;

use crate::traits::{HasEstimate, HasIteration, HasResidual};

/// One solver iteration, detached from the event that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    pub iteration: usize,
    pub estimate: f64,
    pub residual: f64,
}

impl IterationRecord {
    /// Copies the iteration, estimate and residual out of `event`.
    pub fn from_event<E>(event: &E) -> Self
    where
        E: HasIteration + HasEstimate + HasResidual,
    {
        Self {
            iteration: event.iteration(),
            estimate: event.estimate(),
            residual: event.residual(),
        }
    }
}

/// Collects an [`IterationRecord`] for every observed event.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    records: Vec<IterationRecord>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the records in the order they were observed.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<IterationRecord> {
        self.records
    }

    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }
}

impl<E, A> Observer<E, A> for Recorder
where
    E: HasIteration + HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(IterationRecord::from_event(event));
        None
    }
}

impl<E, A> Observer<E, A> for &mut Recorder
where
    E: HasIteration + HasEstimate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        <Recorder as Observer<E, A>>::observe(self, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use regula_core::FnModel;
    use regula_solvers::equation::false_position::{Config, solve};

    #[test]
    fn records_every_iteration_in_order() {
        let model = FnModel(|x: f64| x.powi(3) - x - 2.0);
        let mut recorder = Recorder::new();

        let solution = solve(&model, [1.0, 2.0], &Config::default(), &mut recorder).unwrap();

        let records = recorder.records();
        assert_eq!(records.len(), solution.iters);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.iteration, i + 1);
        }

        let last = recorder.last().unwrap();
        assert_relative_eq!(last.estimate, solution.x);
        assert_relative_eq!(last.residual, solution.residual);
    }

    #[test]
    fn keeps_records_from_a_failed_solve() {
        let model = FnModel(|x: f64| x.powi(3) - x - 2.0);
        let config = Config {
            max_iters: Some(2),
            ..Config::default()
        };
        let mut recorder = Recorder::new();

        assert!(solve(&model, [1.0, 2.0], &config, &mut recorder).is_err());
        assert_eq!(recorder.into_records().len(), 2);
    }
}
