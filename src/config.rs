//! # Configuration
//!
//! Settings of the integration demonstration, read from TOML. Every field has a default, so an
//! empty document describes the integral of `x^2` over `[0, 2]` with the usual sample counts.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::integration::{Interval, SampleCount};
use crate::integration::monte_carlo::{MonteCarlo, UpperBound, DEFAULT_SAMPLE_COUNTS};
use crate::integration::quadrature::GaussKronrod;

/// All settings of the integration demonstration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Domain of integration.
    pub interval: IntervalConfig,
    /// Stochastic estimation.
    pub monte_carlo: MonteCarloConfig,
    /// Reference value.
    pub quadrature: QuadratureConfig,
    /// Figure.
    pub plot: PlotConfig,
}

/// Limits of integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalConfig {
    /// `a`
    pub lower: f64,
    /// `b`
    pub upper: f64,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self { lower: 0.0, upper: 2.0 }
    }
}

/// Settings of the rejection sampling estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// The estimate is computed once for each of these.
    pub sample_counts: Vec<usize>,
    /// Seed of the random source. Without one, the source is seeded from the operating system.
    pub seed: Option<u64>,
    /// Height of the sampling box. Without one, the value of the integrand at the upper limit is
    /// used.
    pub upper_bound: Option<f64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            sample_counts: DEFAULT_SAMPLE_COUNTS.to_vec(),
            seed: None,
            upper_bound: None,
        }
    }
}

/// Tolerances of the reference quadrature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Absolute tolerance.
    pub epsabs: f64,
    /// Relative tolerance.
    pub epsrel: f64,
    /// Maximum number of subintervals.
    pub limit: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        let default = GaussKronrod::default();
        Self { epsabs: default.epsabs, epsrel: default.epsrel, limit: default.limit }
    }
}

/// Output of the figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Where the SVG document is written.
    pub output: PathBuf,
    /// Horizontal range over which the curve is drawn.
    pub view: [f64; 2],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { output: PathBuf::from("integral.svg"), view: [-0.5, 2.5] }
    }
}

impl IntegrationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        Self::from_toml(&text)
    }

    /// Check that all values are within their domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.interval()?;
        self.sample_counts()?;
        self.quadrature()?;

        if let Some(bound) = self.monte_carlo.upper_bound {
            if !bound.is_finite() || bound < 0.0 {
                return Err(ConfigError::Validation {
                    field: "monte_carlo.upper_bound",
                    message: format!("should be finite and non-negative, got {}", bound),
                });
            }
        }

        let [lower, upper] = self.plot.view;
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(ConfigError::Validation {
                field: "plot.view",
                message: format!("should be a finite, increasing pair, got [{}, {}]", lower, upper),
            });
        }

        Ok(())
    }

    /// Domain of integration.
    pub fn interval(&self) -> Result<Interval, ConfigError> {
        Interval::new(self.interval.lower, self.interval.upper)
            .map_err(|error| ConfigError::Validation { field: "interval", message: error.to_string() })
    }

    /// Sample counts, in the configured order.
    pub fn sample_counts(&self) -> Result<Vec<SampleCount>, ConfigError> {
        if self.monte_carlo.sample_counts.is_empty() {
            return Err(ConfigError::Validation {
                field: "monte_carlo.sample_counts",
                message: "at least one sample count is needed".to_string(),
            });
        }

        self.monte_carlo.sample_counts.iter()
            .map(|&count| SampleCount::new(count).map_err(|error| ConfigError::Validation {
                field: "monte_carlo.sample_counts",
                message: error.to_string(),
            }))
            .collect()
    }

    /// Estimator with the configured box height.
    pub fn monte_carlo(&self) -> MonteCarlo {
        match self.monte_carlo.upper_bound {
            Some(bound) => MonteCarlo::new(UpperBound::Fixed(bound)),
            None => MonteCarlo::default(),
        }
    }

    /// Quadrature with the configured tolerances.
    pub fn quadrature(&self) -> Result<GaussKronrod, ConfigError> {
        let QuadratureConfig { epsabs, epsrel, limit } = self.quadrature;
        GaussKronrod::new(epsabs, epsrel, limit)
            .map_err(|error| ConfigError::Validation { field: "quadrature", message: error.to_string() })
    }
}
