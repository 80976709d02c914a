use std::convert::Infallible;

use approx::assert_relative_eq;
use regula_core::{FnModel, Model};
use regula_expr::Engine;

use super::{Action, Config, Endpoint, Error, Event, solve, solve_unobserved};

/// f(x) = x³ - x - 2, the textbook example with a root near 1.5213797.
struct Cubic;

impl Model for Cubic {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x.powi(3) - x - 2.0)
    }
}

const CUBIC_ROOT: f64 = 1.521_379_706_804_567_5;

#[test]
fn finds_cubic_root() {
    let solution =
        solve_unobserved(&Cubic, [1.0, 2.0], &Config::default()).expect("should converge");

    assert!(solution.residual.abs() <= 1e-9);
    assert_relative_eq!(solution.x, CUBIC_ROOT, epsilon = 1e-8);
    assert!(solution.iters > 1);
}

#[test]
fn finds_root_of_parsed_expression() {
    let mut engine = Engine::new();
    engine.set_expression("x*sin(x) - 1").expect("valid");

    let solution =
        solve_unobserved(&engine, [0.0, 2.0], &Config::default()).expect("should converge");

    assert!(solution.residual.abs() <= 1e-9);
    assert_relative_eq!(solution.x * solution.x.sin(), 1.0, epsilon = 1e-8);
}

#[test]
fn linear_function_converges_in_one_iteration() {
    let model = FnModel(|x: f64| 2.0 * x - 1.0);

    let solution =
        solve_unobserved(&model, [0.0, 1.0], &Config::default()).expect("should converge");

    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 0.5);
}

#[test]
fn reversed_bracket_still_converges() {
    let solution =
        solve_unobserved(&Cubic, [2.0, 1.0], &Config::default()).expect("should converge");

    assert_relative_eq!(solution.x, CUBIC_ROOT, epsilon = 1e-8);
}

#[test]
fn root_at_endpoint_is_found_immediately() {
    let model = FnModel(|x: f64| x);

    let solution =
        solve_unobserved(&model, [0.0, 1.0], &Config::default()).expect("should converge");

    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.x, 0.0);
}

#[test]
fn observer_sees_each_iteration_in_order() {
    let mut events: Vec<Event> = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        events.push(*event);
        None
    };

    let solution =
        solve(&Cubic, [1.0, 2.0], &Config::default(), observer).expect("should converge");

    assert_eq!(events.len(), solution.iters);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.iter, i + 1);
    }

    let last = events.last().expect("at least one iteration");
    assert_eq!(last.x, solution.x);
    assert_eq!(last.residual, solution.residual);
}

#[test]
fn events_carry_the_shrinking_bracket() {
    let mut widths = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        widths.push(event.bracket[1] - event.bracket[0]);
        None
    };

    solve(&Cubic, [1.0, 2.0], &Config::default(), observer).expect("should converge");

    assert_relative_eq!(widths[0], 1.0);
    assert!(widths.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn first_event_describes_the_secant_step() {
    let mut first = None;
    let observer = |event: &Event| -> Option<Action> {
        first.get_or_insert(*event);
        None
    };

    solve(&Cubic, [1.0, 2.0], &Config::default(), observer).expect("should converge");

    let event = first.expect("at least one iteration");
    assert_eq!(event.bracket, [1.0, 2.0]);
    assert_eq!(event.values, [-2.0, 4.0]);
    assert_relative_eq!(event.x, 4.0 / 3.0);
    assert_relative_eq!(event.residual, -26.0 / 27.0, epsilon = 1e-12);
    assert_eq!(event.replaced(), Endpoint::Lower);
}

#[test]
fn values_track_the_moving_endpoint() {
    let mut events = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        events.push(*event);
        None
    };

    solve(&Cubic, [1.0, 2.0], &Config::default(), observer).expect("should converge");

    for pair in events.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        match prev.replaced() {
            Endpoint::Lower => {
                assert_eq!(next.bracket[0], prev.x);
                assert_eq!(next.values[0], prev.residual);
            }
            Endpoint::Upper => {
                assert_eq!(next.bracket[1], prev.x);
                assert_eq!(next.values[1], prev.residual);
            }
        }
    }
}

#[test]
fn errors_on_zero_denominator() {
    let model = FnModel(|_: f64| 3.0);

    let result = solve_unobserved(&model, [0.0, 1.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::ZeroDenominator { residual, .. }) if residual == 3.0
    ));
}

#[test]
fn errors_on_evaluation_failure() {
    let mut engine = Engine::new();
    engine.set_expression("sqrt(x) - 0.5").expect("valid");

    let result = solve_unobserved(&engine, [-1.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::Model { x, .. }) if x == -1.0));
}

#[test]
fn errors_without_expression() {
    let engine = Engine::new();

    let result = solve_unobserved(&engine, [0.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::Model { .. })));
}

#[test]
fn errors_on_non_finite_residual() {
    let model = FnModel(|x: f64| if x > 0.5 { f64::NAN } else { x - 1.0 });

    let result = solve_unobserved(&model, [0.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::NonFiniteResidual { .. })));
}

#[test]
fn errors_on_non_finite_bracket() {
    let result = solve_unobserved(&Cubic, [f64::NAN, 2.0], &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));

    let result = solve_unobserved(&Cubic, [1.0, f64::INFINITY], &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteBracket { .. })));
}

#[test]
fn errors_on_invalid_config() {
    let config = Config {
        residual_tol: -1.0,
        ..Config::default()
    };

    let result = solve_unobserved(&Cubic, [1.0, 2.0], &config);

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn stops_at_iteration_cap() {
    let config = Config {
        max_iters: Some(3),
        ..Config::default()
    };

    let mut calls = 0;
    let observer = |_: &Event| -> Option<Action> {
        calls += 1;
        None
    };

    let result = solve(&Cubic, [1.0, 2.0], &config, observer);

    assert!(matches!(result, Err(Error::MaxIters { iters: 3, .. })));
    assert_eq!(calls, 3);
}

#[test]
fn unbounded_matches_capped_result() {
    let capped = solve_unobserved(&Cubic, [1.0, 2.0], &Config::default()).expect("converges");
    let unbounded =
        solve_unobserved(&Cubic, [1.0, 2.0], &Config::default().unbounded()).expect("converges");

    assert_eq!(capped, unbounded);
}
