/// Per-iteration hook for a solver.
///
/// A solver hands each iteration's event `E` to its observer before moving
/// on. Returning `None` leaves the run alone; `Some(action)` asks the solver
/// to do something it defines in its own action type `A`. The false-position
/// solver defines no actions, so its observers are read-only: they can print
/// or record events but never change the result.
///
/// Any `FnMut(&E) -> Option<A>` is an observer, and `()` is the observer that
/// ignores everything.
pub trait Observer<E, A> {
    /// Handles one event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum NoAction {}

    fn drive<O: Observer<f64, NoAction>>(mut observer: O, estimates: &[f64]) {
        for estimate in estimates {
            match observer.observe(estimate) {
                None => {}
                Some(action) => match action {},
            }
        }
    }

    #[test]
    fn closure_collects_estimates_in_order() {
        let mut estimates = Vec::new();
        drive(
            |x: &f64| -> Option<NoAction> {
                estimates.push(*x);
                None
            },
            &[1.333, 1.463, 1.504],
        );

        assert_eq!(estimates, vec![1.333, 1.463, 1.504]);
    }

    #[test]
    fn unit_ignores_events() {
        drive((), &[0.5, 0.25]);

        let action: Option<u8> = ().observe(&"event");
        assert!(action.is_none());
    }
}
