//! # Area under a parabola
//!
//! Estimates `∫_0^2 x^2 dx = 8/3` by rejection sampling at increasing sample counts, computes the
//! quadrature reference and builds a figure of the area.
use std::fmt;

use rand::Rng;
use tracing::info;

use crate::config::IntegrationConfig;
use crate::demo::format_float;
use crate::error::Error;
use crate::integration::SampleCount;
use crate::integration::quadrature::{Quadrature, QuadratureEstimate};
use crate::plot::{area_under_curve, Figure};

/// The integrand, `x^2`.
pub fn square(x: f64) -> f64 {
    x * x
}

/// Results of the demonstration.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaReport {
    /// Stochastic estimate per sample count, in the configured order.
    pub estimates: Vec<(SampleCount, f64)>,
    /// Deterministic reference.
    pub reference: QuadratureEstimate,
    /// Picture of the integrand and the area.
    pub figure: Figure,
}

/// Run the demonstration.
///
/// # Arguments
///
/// * `config`: Interval, sample counts, tolerances and plot range.
/// * `rng`: Source of the samples. Its state advances.
///
/// # Errors
///
/// When the configuration is invalid, or when the integrand can't be integrated or drawn.
pub fn integrate_square<R: Rng + ?Sized>(
    config: &IntegrationConfig,
    rng: &mut R,
) -> Result<AreaReport, Error> {
    let interval = config.interval()?;
    let sample_counts = config.sample_counts()?;

    let estimates = config.monte_carlo().convergence(square, interval, &sample_counts, rng)?;
    let reference = config.quadrature()?.integrate(square, interval.lower(), interval.upper())?;
    info!(value = reference.value, abs_error = reference.abs_error, "reference value");

    let [view_lower, view_upper] = config.plot.view;
    let figure = area_under_curve(square, "x^2", interval, (view_lower, view_upper))?;

    Ok(AreaReport { estimates, reference, figure })
}

impl fmt::Display for AreaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (samples, estimate) in &self.estimates {
            writeln!(f, "Monte Carlo integral ({} points): {}", samples, format_float(*estimate))?;
        }
        writeln!(
            f,
            "Integral using quad:  {} (error estimate: {})",
            format_float(self.reference.value),
            format_float(self.reference.abs_error),
        )
    }
}
