//! # Quadrature
//!
//! Deterministic integration used as the reference value for the stochastic estimates.
//!
//! `GaussKronrod` is an adaptive 21-point Gauss-Kronrod scheme. Each subinterval is integrated
//! with the 21-point Kronrod rule, and the difference with the embedded 10-point Gauss rule serves
//! as the error estimate. The subinterval with the largest error is bisected until the requested
//! tolerance is met. The constants and error scaling are those of QUADPACK (Piessens, de
//! Doncker-Kapenga, Überhuber and Kahaner, 1983), routines `qk21` and `qag`.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, warn};

use crate::error::IntegrationError;

/// Abscissae of the 21-point Kronrod rule on [-1, 1], only the non-negative half.
///
/// The entries with an odd index are the abscissae of the 10-point Gauss rule.
const XGK: [f64; 11] = [
    0.995_657_163_025_808_080_735_527_280_689_003,
    0.973_906_528_517_171_720_077_964_012_084_452,
    0.930_157_491_355_708_226_001_207_180_059_508,
    0.865_063_366_688_984_510_732_096_688_423_493,
    0.780_817_726_586_416_897_063_717_578_345_042,
    0.679_409_568_299_024_406_234_327_365_114_874,
    0.562_757_134_668_604_683_339_000_099_272_694,
    0.433_395_394_129_247_190_799_265_943_165_784,
    0.294_392_862_701_460_198_131_126_603_103_866,
    0.148_874_338_981_631_210_884_826_001_129_720,
    0.0,
];

/// Weights of the 21-point Kronrod rule, matching `XGK`.
const WGK: [f64; 11] = [
    0.011_694_638_867_371_874_278_064_396_062_192,
    0.032_558_162_307_964_727_478_818_972_459_390,
    0.054_755_896_574_351_996_031_381_300_244_580,
    0.075_039_674_810_919_952_767_043_140_916_190,
    0.093_125_454_583_697_605_535_065_465_083_366,
    0.109_387_158_802_297_641_899_210_590_325_805,
    0.123_491_976_262_065_851_077_208_067_605_294,
    0.134_709_217_311_473_325_928_054_001_771_707,
    0.142_775_938_577_060_080_797_094_273_138_717,
    0.147_739_104_901_338_491_374_841_515_972_068,
    0.149_445_554_002_916_905_664_936_468_389_821,
];

/// Weights of the 10-point Gauss rule, for the abscissae `XGK[1]`, `XGK[3]`, ..., `XGK[9]`.
const WG: [f64; 5] = [
    0.066_671_344_308_688_137_593_568_809_893_332,
    0.149_451_349_150_580_593_145_776_339_657_697,
    0.219_086_362_515_982_043_995_534_934_228_163,
    0.269_266_719_309_996_355_091_226_921_569_469,
    0.295_524_224_714_752_870_173_892_994_651_338,
];

/// Number of integrand evaluations of a single application of the 21-point rule.
const EVALUATIONS_PER_RULE: usize = 21;

/// Result of a deterministic integration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadratureEstimate {
    /// Approximation of the integral.
    pub value: f64,
    /// Estimate of the absolute error `|value - integral|`.
    pub abs_error: f64,
    /// How often the integrand was evaluated.
    pub evaluations: usize,
    /// Number of subintervals in the final partition.
    pub subintervals: usize,
}

/// Deterministic integration of a real function over a bounded interval.
pub trait Quadrature {
    /// Integrate `f` from `a` to `b`.
    ///
    /// # Arguments
    ///
    /// * `f`: Integrand, should be finite on the interval.
    /// * `a`: Lower limit of integration.
    /// * `b`: Upper limit of integration, may be smaller than `a`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if a limit is not finite, `NonFinite` if `f` evaluates to a value that is
    /// not finite.
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<QuadratureEstimate, IntegrationError>
    where
        F: Fn(f64) -> f64;
}

/// Adaptive Gauss-Kronrod quadrature.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GaussKronrod {
    /// Absolute error tolerance.
    pub epsabs: f64,
    /// Relative error tolerance.
    pub epsrel: f64,
    /// Maximum number of subintervals.
    pub limit: usize,
}

impl GaussKronrod {
    /// Absolute and relative tolerance used by default.
    pub const DEFAULT_TOLERANCE: f64 = 1.49e-8;
    /// Maximum number of subintervals used by default.
    pub const DEFAULT_LIMIT: usize = 50;

    /// Create a new instance.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if both tolerances are zero, if either is negative or not finite, or if
    /// the limit is zero.
    pub fn new(epsabs: f64, epsrel: f64, limit: usize) -> Result<Self, IntegrationError> {
        let valid = |tolerance: f64| tolerance.is_finite() && tolerance >= 0.0;
        if !valid(epsabs) || !valid(epsrel) || (epsabs == 0.0 && epsrel == 0.0) {
            return Err(IntegrationError::InvalidArgument(format!(
                "tolerances should be non-negative and not both zero, got {} and {}", epsabs, epsrel,
            )));
        }
        if limit == 0 {
            return Err(IntegrationError::InvalidArgument(
                "at least one subinterval is needed".to_string()
            ));
        }

        Ok(Self { epsabs, epsrel, limit })
    }

    fn tolerance(&self, value: f64) -> f64 {
        self.epsabs.max(self.epsrel * value.abs())
    }
}

impl Default for GaussKronrod {
    fn default() -> Self {
        Self {
            epsabs: Self::DEFAULT_TOLERANCE,
            epsrel: Self::DEFAULT_TOLERANCE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl Quadrature for GaussKronrod {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<QuadratureEstimate, IntegrationError>
    where
        F: Fn(f64) -> f64,
    {
        if !a.is_finite() || !b.is_finite() {
            return Err(IntegrationError::InvalidArgument(format!(
                "limits of integration should be finite, got {} and {}", a, b,
            )));
        }
        match a.partial_cmp(&b) {
            Some(Ordering::Equal) => return Ok(QuadratureEstimate {
                value: 0.0,
                abs_error: 0.0,
                evaluations: 0,
                subintervals: 0,
            }),
            Some(Ordering::Greater) => {
                let reversed = self.integrate(f, b, a)?;
                return Ok(QuadratureEstimate { value: -reversed.value, ..reversed });
            },
            _ => {},
        }

        let first = Segment::new(&f, a, b)?;
        let mut value = first.value;
        let mut abs_error = first.abs_error;
        let mut evaluations = EVALUATIONS_PER_RULE;
        let mut segments = BinaryHeap::from([first]);

        while abs_error > self.tolerance(value) {
            if segments.len() >= self.limit {
                warn!(
                    limit = self.limit,
                    abs_error,
                    tolerance = self.tolerance(value),
                    "maximum number of subintervals reached, returning the best estimate",
                );
                break;
            }

            let Some(worst) = segments.pop() else { break };
            let middle = 0.5 * (worst.lower + worst.upper);
            let left = Segment::new(&f, worst.lower, middle)?;
            let right = Segment::new(&f, middle, worst.upper)?;
            evaluations += 2 * EVALUATIONS_PER_RULE;

            value += left.value + right.value - worst.value;
            abs_error += left.abs_error + right.abs_error - worst.abs_error;
            segments.push(left);
            segments.push(right);
        }

        // Recompute without the rounding of the running updates.
        let value: f64 = segments.iter().map(|segment| segment.value).sum();
        let abs_error: f64 = segments.iter().map(|segment| segment.abs_error).sum();
        debug!(value, abs_error, evaluations, subintervals = segments.len(), "quadrature done");

        Ok(QuadratureEstimate { value, abs_error, evaluations, subintervals: segments.len() })
    }
}

/// A subinterval with the 21-point estimate of the integral over it.
///
/// Ordered by the error estimate, such that a max-heap yields the segment to bisect next.
#[derive(Copy, Clone, Debug)]
struct Segment {
    lower: f64,
    upper: f64,
    value: f64,
    abs_error: f64,
}

impl Segment {
    /// Apply the 21-point Gauss-Kronrod rule to `[lower, upper]`.
    fn new<F: Fn(f64) -> f64>(f: &F, lower: f64, upper: f64) -> Result<Self, IntegrationError> {
        let center = 0.5 * (lower + upper);
        let half_length = 0.5 * (upper - lower);
        let abs_half_length = half_length.abs();

        let f_center = evaluate(f, center)?;
        let mut result_gauss = 0.0;
        let mut result_kronrod = WGK[10] * f_center;
        let mut result_abs = result_kronrod.abs();
        let mut f_left = [0.0; 10];
        let mut f_right = [0.0; 10];

        for (j, &x) in XGK[..10].iter().enumerate() {
            let abscissa = half_length * x;
            let left = evaluate(f, center - abscissa)?;
            let right = evaluate(f, center + abscissa)?;
            f_left[j] = left;
            f_right[j] = right;

            let sum = left + right;
            result_kronrod += WGK[j] * sum;
            result_abs += WGK[j] * (left.abs() + right.abs());
            if j % 2 == 1 {
                result_gauss += WG[j / 2] * sum;
            }
        }

        let mean = 0.5 * result_kronrod;
        let result_asc = WGK[10] * (f_center - mean).abs()
            + (0..10)
                .map(|j| WGK[j] * ((f_left[j] - mean).abs() + (f_right[j] - mean).abs()))
                .sum::<f64>();

        let value = result_kronrod * half_length;
        let result_abs = result_abs * abs_half_length;
        let result_asc = result_asc * abs_half_length;
        let mut abs_error = ((result_kronrod - result_gauss) * half_length).abs();

        if result_asc != 0.0 && abs_error != 0.0 {
            abs_error = result_asc * (200.0 * abs_error / result_asc).powf(1.5).min(1.0);
        }
        if result_abs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
            abs_error = abs_error.max(50.0 * f64::EPSILON * result_abs);
        }

        Ok(Self { lower, upper, value, abs_error })
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.abs_error.total_cmp(&other.abs_error)
    }
}

fn evaluate<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, IntegrationError> {
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IntegrationError::NonFinite { x, value })
    }
}
