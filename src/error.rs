//! # Errors
//!
//! One error type per concern. Infeasible or unbounded linear programs are not errors; they are
//! reported through `LinearProgramType`.
use std::io;
use std::path::PathBuf;

/// A `ModelError` is returned when a linear program is described inconsistently.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Variables and constraints need a name that is not only whitespace.
    #[error("names of variables and constraints can't be empty")]
    EmptyName,
    /// Names are shared between variables and constraints and should be unique.
    #[error("name '{0}' is already in use")]
    DuplicateName(String),
    /// An expression refers to a variable that was created by another model.
    #[error("variable with index {0} is not part of this model")]
    UnknownVariable(usize),
    /// The upper bound of a variable is smaller than its lower bound.
    #[error("bounds of variable '{variable}' are inconsistent: {lower} > {upper}")]
    InvalidBounds {
        /// Name of the variable.
        variable: String,
        /// Lower bound, formatted.
        lower: String,
        /// Upper bound, formatted.
        upper: String,
    },
}

/// Errors of the integration routines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrationError {
    /// An argument is outside of the domain of the routine, such as a sample count of zero.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The integrand evaluated to NaN or an infinity.
    #[error("integrand is not finite at x = {x}: f(x) = {value}")]
    NonFinite {
        /// Where the integrand was evaluated.
        x: f64,
        /// What it evaluated to.
        value: f64,
    },
}

/// Errors while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file couldn't be read.
    #[error("could not read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Cause.
        source: io::Error,
    },
    /// The contents are not valid TOML for the configuration.
    #[error("could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is outside of its domain.
    #[error("invalid value for '{field}': {message}")]
    Validation {
        /// Name of the field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

/// Errors while rendering a figure.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// Writing the output failed.
    #[error("could not write plot: {0}")]
    Io(#[from] io::Error),
    /// The figure can't be rendered, for example because a series is empty.
    #[error("invalid figure: {0}")]
    InvalidFigure(String),
}

/// Any error of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// See `ModelError`.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// See `IntegrationError`.
    #[error(transparent)]
    Integration(#[from] IntegrationError),
    /// See `ConfigError`.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See `PlotError`.
    #[error(transparent)]
    Plot(#[from] PlotError),
}
