//! # Numerical integration
//!
//! Estimating definite integrals of real functions, either stochastically (`monte_carlo`) or with
//! a deterministic quadrature rule (`quadrature`).
use std::fmt;
use std::num::NonZeroUsize;

use crate::error::IntegrationError;

pub mod monte_carlo;
pub mod quadrature;

/// Closed interval `[a, b]` with finite bounds, `a <= b` and a finite width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Create a new interval.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if a bound is not finite, if `lower > upper` or if the width `upper - lower`
    /// overflows.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntegrationError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntegrationError::InvalidArgument(format!(
                "interval bounds should be finite, got [{}, {}]", lower, upper,
            )));
        }
        if lower > upper {
            return Err(IntegrationError::InvalidArgument(format!(
                "lower bound {} exceeds upper bound {}", lower, upper,
            )));
        }
        if !(upper - lower).is_finite() {
            return Err(IntegrationError::InvalidArgument(format!(
                "width of [{}, {}] is not representable", lower, upper,
            )));
        }

        Ok(Self { lower, upper })
    }

    /// Left end point `a`.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Right end point `b`.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `b - a`.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether the interval has measure zero.
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Number of samples drawn by a stochastic estimator, at least one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SampleCount(NonZeroUsize);

impl SampleCount {
    /// Create a sample count.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `count` is zero.
    pub fn new(count: usize) -> Result<Self, IntegrationError> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or_else(|| IntegrationError::InvalidArgument(
                "the number of samples should be positive".to_string()
            ))
    }

    /// The count as a plain integer.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for SampleCount {
    type Error = IntegrationError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl fmt::Display for SampleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
