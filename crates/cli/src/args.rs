use std::path::PathBuf;

use clap::Parser;
use regula::{Settings, SettingsError};

/// Find a root of f(x) on [LOWER, UPPER] with the false-position method.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Args {
    /// Expression in the variable x, for example "x^3 - x - 2".
    pub expression: String,

    /// Lower end of the interval.
    pub lower: f64,

    /// Upper end of the interval.
    pub upper: f64,

    /// TOML settings file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Decimal places for printed values.
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Give up after this many iterations.
    #[arg(long, conflicts_with = "unbounded")]
    pub max_iters: Option<usize>,

    /// Iterate until convergence with no cap.
    #[arg(long)]
    pub unbounded: bool,

    /// Write the plot sample as JSON to this path.
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Number of plot points, overriding the settings.
    #[arg(long, requires = "plot")]
    pub num_points: Option<usize>,

    /// Send iterations to the log instead of standard output.
    #[arg(long)]
    pub log_iterations: bool,

    /// Show the bracket, secant slope and replaced end for every iteration.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Loads the settings file, if any, and applies the flag overrides.
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(precision) = self.precision {
            settings.precision = precision;
        }
        if let Some(max_iters) = self.max_iters {
            settings.solver.max_iters = Some(max_iters);
        }
        if self.unbounded {
            settings.solver = settings.solver.unbounded();
        }
        if let Some(num_points) = self.num_points {
            settings.plot.num_points = num_points;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn accepts_negative_bounds() {
        let args = Args::try_parse_from(["regula", "x^2 - 4", "-3", "-1"]).unwrap();

        assert_eq!(args.expression, "x^2 - 4");
        assert_eq!(args.lower, -3.0);
        assert_eq!(args.upper, -1.0);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "regula",
            "x",
            "0",
            "1",
            "--precision",
            "4",
            "--max-iters",
            "25",
            "--plot",
            "out.json",
            "--num-points",
            "50",
        ])
        .unwrap();

        let settings = args.settings().unwrap();
        assert_eq!(settings.precision, 4);
        assert_eq!(settings.solver.max_iters, Some(25));
        assert_eq!(settings.plot.num_points, 50);
    }

    #[test]
    fn verbose_is_off_by_default() {
        let args = Args::try_parse_from(["regula", "x", "0", "1"]).unwrap();
        assert!(!args.verbose);

        let args = Args::try_parse_from(["regula", "x", "0", "1", "-v"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn unbounded_lifts_the_cap() {
        let args = Args::try_parse_from(["regula", "x", "0", "1", "--unbounded"]).unwrap();
        assert_eq!(args.settings().unwrap().solver.max_iters, None);
    }

    #[test]
    fn cap_and_unbounded_conflict() {
        let result =
            Args::try_parse_from(["regula", "x", "0", "1", "--unbounded", "--max-iters", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_cap_is_rejected() {
        let args = Args::try_parse_from(["regula", "x", "0", "1", "--max-iters", "0"]).unwrap();
        assert!(matches!(args.settings(), Err(SettingsError::Solver(_))));
    }
}
