use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{EngineErr, LinearParams, Result};

/// Immutable inputs of a single gradient descent run.
///
/// Every field may be omitted from JSON, in which case the default value is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// The true slope `A` samples are drawn around.
    pub a: i64,
    /// The true intercept `B` samples are drawn around.
    pub b: i64,
    /// Standard deviation of the gaussian noise added to every target.
    pub dispersion: f64,
    /// Learning rate of the slope.
    pub eta1: f64,
    /// Learning rate of the intercept.
    pub eta2: f64,
    pub iterations: usize,
    /// Inclusive lower bound of the sample inputs.
    pub n_points: i64,
    /// Exclusive upper bound of the sample inputs.
    pub p_points: i64,
    /// Seeds the sample noise. Without one, every run draws fresh entropy.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            a: 5,
            b: -20,
            dispersion: 7.,
            eta1: 0.01,
            eta2: 0.5,
            iterations: 20,
            n_points: -20,
            p_points: 20,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Parses a `RunConfig` from a JSON document.
    ///
    /// # Errors
    /// Returns `EngineErr::Json` if the document is malformed and
    /// `EngineErr::InvalidDispersion` if it fails validation.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a `RunConfig` from a JSON file.
    ///
    /// # Errors
    /// Returns `EngineErr::Io` if the file cannot be read, otherwise the same
    /// errors as [`RunConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Checks the ranges the engine cannot work around.
    ///
    /// Only the dispersion is checked. Empty point ranges and zero iterations
    /// produce a degenerate outcome rather than an error, and learning rates
    /// are never bounded.
    pub fn validate(&self) -> Result<()> {
        if !self.dispersion.is_finite() || self.dispersion < 0. {
            return Err(EngineErr::InvalidDispersion {
                got: self.dispersion,
            });
        }

        Ok(())
    }

    /// The line the samples are generated from.
    pub fn true_line(&self) -> LinearParams {
        LinearParams::new(self.a as f64, self.b as f64)
    }

    /// Number of samples this configuration generates.
    pub fn sample_count(&self) -> usize {
        (self.p_points - self.n_points).max(0) as usize
    }

    pub fn learning_rates(&self) -> [f64; 2] {
        [self.eta1, self.eta2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = RunConfig::from_json(r#"{ "a": -3, "iterations": 50 }"#).unwrap();

        assert_eq!(config.a, -3);
        assert_eq!(config.iterations, 50);
        assert_eq!(config.b, -20);
        assert_eq!(config.eta2, 0.5);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(RunConfig::from_json("{}").unwrap(), RunConfig::default());
    }

    #[test]
    fn rejects_negative_dispersion() {
        let err = RunConfig::from_json(r#"{ "dispersion": -1.5 }"#).unwrap_err();
        assert!(matches!(err, EngineErr::InvalidDispersion { got } if got == -1.5));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = RunConfig::from_json(r#"{ "a": "five" }"#).unwrap_err();
        assert!(matches!(err, EngineErr::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RunConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, EngineErr::Io(_)));
    }

    #[test]
    fn sample_count_clamps_inverted_ranges() {
        let mut config = RunConfig::default();
        assert_eq!(config.sample_count(), 40);

        config.n_points = 0;
        config.p_points = 0;
        assert_eq!(config.sample_count(), 0);

        config.n_points = 5;
        config.p_points = -5;
        assert_eq!(config.sample_count(), 0);
    }

    #[test]
    fn learning_rates_are_slope_then_intercept() {
        let config = RunConfig {
            eta1: 0.02,
            eta2: 0.7,
            ..RunConfig::default()
        };

        assert_eq!(config.learning_rates(), [0.02, 0.7]);
        assert_eq!(config.true_line(), LinearParams::new(5., -20.));
    }
}
