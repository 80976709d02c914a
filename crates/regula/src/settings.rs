use std::{fs, io, path::Path, path::PathBuf};

use regula_solvers::{diagnostics, equation::false_position, plot};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of decimal places used when displaying results.
pub const PRECISION: usize = 10;

/// Every tunable used by a [`Session`](crate::Session).
///
/// All fields are optional in TOML; missing ones keep their defaults.
///
/// ```toml
/// precision = 6
///
/// [diagnostics]
/// step_size = 1e-3
///
/// [solver]
/// max_iters = 500
///
/// [plot]
/// num_points = 200
/// ```
///
/// TOML has no null value, so the iteration cap can only be lifted through
/// [`false_position::Config::unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Decimal places for displayed estimates and residuals.
    pub precision: usize,
    pub diagnostics: diagnostics::Config,
    pub solver: false_position::Config,
    pub plot: plot::Config,
}

/// Errors that can occur when loading or validating [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid diagnostics settings: {0}")]
    Diagnostics(#[from] diagnostics::ConfigError),

    #[error("invalid solver settings: {0}")]
    Solver(#[from] false_position::ConfigError),

    #[error("invalid plot settings: {0}")]
    Plot(#[from] plot::ConfigError),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: PRECISION,
            diagnostics: diagnostics::Config::default(),
            solver: false_position::Config::default(),
            plot: plot::Config::default(),
        }
    }
}

impl Settings {
    /// Parses and validates settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for these settings or
    /// if any value fails validation.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a TOML settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or see
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Renders the settings as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }

    /// Validates each algorithm config.
    ///
    /// # Errors
    ///
    /// Returns the first invalid config.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.diagnostics.validate()?;
        self.solver.validate()?;
        self.plot.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.precision, 10);
        assert_eq!(settings.solver.max_iters, Some(false_position::DEFAULT_MAX_ITERS));
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let settings = Settings::from_toml_str(
            r"
            precision = 6

            [diagnostics]
            step_size = 1e-3

            [solver]
            max_iters = 500

            [plot]
            num_points = 200
            ",
        )
        .unwrap();

        assert_eq!(settings.precision, 6);
        assert_relative_eq!(settings.diagnostics.step_size, 1e-3);
        assert_relative_eq!(settings.diagnostics.tolerance, 1e-4);
        assert_eq!(settings.solver.max_iters, Some(500));
        assert_relative_eq!(settings.solver.residual_tol, 1e-9);
        assert_eq!(settings.plot.num_points, 200);
        assert_relative_eq!(settings.plot.margin, 1.5);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = Settings::from_toml_str("[plot]\nmargin = -1.0\n").unwrap_err();
        assert!(matches!(err, SettingsError::Plot(plot::ConfigError::Margin)));

        let err = Settings::from_toml_str("[solver]\nmax_iters = 0\n").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Solver(false_position::ConfigError::MaxIters)
        ));

        let err = Settings::from_toml_str("precision = \"ten\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn defaults_survive_a_toml_round_trip() {
        let text = Settings::default().to_toml_string().unwrap();
        assert_eq!(Settings::from_toml_str(&text).unwrap(), Settings::default());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = Settings::load("/nonexistent/regula.toml").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/regula.toml"));
    }
}
