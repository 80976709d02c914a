use super::{Config, Error};

/// Evenly spaced samples over a half-open interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Grid {
    start: f64,
    step: f64,
    len: usize,
}

impl Grid {
    /// Builds the grid `a + i * step_size` for `i in 0..ceil((b - a) / step_size)`.
    pub(super) fn new(a: f64, b: f64, config: &Config) -> Result<Self, Error> {
        config.validate()?;
        for value in [a, b] {
            if !value.is_finite() {
                return Err(Error::NonFiniteBound { value });
            }
        }

        let count = if b > a {
            ((b - a) / config.step_size).ceil()
        } else {
            0.0
        };

        // An overflowing span gives an infinite count and is rejected here.
        #[allow(clippy::cast_precision_loss)]
        let max_samples = config.max_samples as f64;
        if count > max_samples {
            return Err(Error::TooManySamples {
                a,
                b,
                max_samples: config.max_samples,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = count as usize;

        Ok(Self {
            start: a,
            step: config.step_size,
            len,
        })
    }

    pub(super) fn len(&self) -> usize {
        self.len
    }

    pub(super) fn points(&self) -> impl Iterator<Item = f64> {
        let Self { start, step, len } = *self;
        #[allow(clippy::cast_precision_loss)]
        let at = move |i: usize| start + i as f64 * step;
        (0..len).map(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn config(step_size: f64) -> Config {
        Config {
            step_size,
            ..Config::default()
        }
    }

    #[test]
    fn excludes_upper_bound() {
        let grid = Grid::new(0.0, 1.0, &config(0.25)).unwrap();
        let points: Vec<_> = grid.points().collect();

        assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn partial_last_step_still_samples() {
        let grid = Grid::new(0.0, 1.0, &config(0.3)).unwrap();
        let points: Vec<_> = grid.points().collect();

        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[3], 0.9, epsilon = 1e-12);
    }

    #[test]
    fn empty_when_bounds_are_not_increasing() {
        assert_eq!(Grid::new(1.0, 1.0, &config(0.1)).unwrap().len(), 0);
        assert_eq!(Grid::new(2.0, 1.0, &config(0.1)).unwrap().len(), 0);
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert_eq!(
            Grid::new(0.0, f64::INFINITY, &config(0.1)),
            Err(Error::NonFiniteBound {
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn rejects_oversized_scans() {
        let config = Config {
            max_samples: 10,
            ..config(0.1)
        };
        assert!(Grid::new(0.0, 0.9, &config).is_ok());
        assert!(matches!(
            Grid::new(0.0, 2.0, &config),
            Err(Error::TooManySamples { max_samples: 10, .. })
        ));

        let huge = Grid::new(-f64::MAX, f64::MAX, &Config::default());
        assert!(matches!(huge, Err(Error::TooManySamples { .. })));
    }
}
