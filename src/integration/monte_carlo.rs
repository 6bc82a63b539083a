//! # Monte Carlo integration
//!
//! Estimating `∫_a^b f(x) dx` by rejection sampling: points are drawn uniformly from the box
//! `[a, b] x [0, U]` and the fraction that lies under the graph of `f` is scaled by the area of the
//! box.
//!
//! The estimate is unbiased only if `f` is non-negative on the interval and `U` is an upper bound
//! of `f` there. By default `U = f(b)`, which is only an upper bound for non-decreasing `f`. This
//! is a known limitation; when a bound is known, pass it with `UpperBound::Fixed`.
use rand::Rng;
use tracing::{debug, instrument};

use crate::error::IntegrationError;
use crate::integration::{Interval, SampleCount};

/// Sample counts at which the estimator is demonstrated.
pub const DEFAULT_SAMPLE_COUNTS: [usize; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];

/// How to choose the height of the sampling box.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum UpperBound {
    /// `U = f(b)`, valid for non-negative, non-decreasing functions.
    #[default]
    RightEndpoint,
    /// A bound supplied by the caller.
    Fixed(f64),
}

/// Rejection sampling estimator.
#[derive(Copy, Clone, Debug, Default)]
pub struct MonteCarlo {
    upper_bound: UpperBound,
}

impl MonteCarlo {
    /// Create an estimator with the given choice of box height.
    pub fn new(upper_bound: UpperBound) -> Self {
        Self { upper_bound }
    }

    /// Estimate the integral of `f` over `interval`.
    ///
    /// Draws `samples` independent pairs `(x, y)`, `x` uniform in `[a, b)` and `y` uniform in
    /// `[0, U)`, and counts the pairs with `y <= f(x)`. The random source is only borrowed: seeding
    /// it makes the estimate reproducible.
    ///
    /// # Return value
    ///
    /// `(k / n) (b - a) U` for `k` hits out of `n` samples. Exactly zero when `a = b`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the box height is negative or not finite.
    #[instrument(level = "debug", skip_all, fields(interval = %interval, samples = %samples))]
    pub fn estimate<F, R>(
        &self,
        f: F,
        interval: Interval,
        samples: SampleCount,
        rng: &mut R,
    ) -> Result<f64, IntegrationError>
    where
        F: Fn(f64) -> f64,
        R: Rng + ?Sized,
    {
        if interval.is_degenerate() {
            return Ok(0.0);
        }

        let height = match self.upper_bound {
            UpperBound::RightEndpoint => f(interval.upper()),
            UpperBound::Fixed(height) => height,
        };
        if !height.is_finite() || height < 0.0 {
            return Err(IntegrationError::InvalidArgument(format!(
                "the sampling box height should be finite and non-negative, got {}", height,
            )));
        }

        let (a, width) = (interval.lower(), interval.width());
        let n = samples.get();
        let hits = (0..n)
            .filter(|_| {
                let x = a + width * rng.random::<f64>();
                let y = height * rng.random::<f64>();
                y <= f(x)
            })
            .count();

        let estimate = (hits as f64 / n as f64) * width * height;
        debug!(hits, height, estimate, "rejection sampling done");

        Ok(estimate)
    }

    /// Estimate the same integral once for each of the sample counts.
    ///
    /// # Return value
    ///
    /// `(sample count, estimate)` pairs in the order of `sample_counts`.
    pub fn convergence<F, R>(
        &self,
        f: F,
        interval: Interval,
        sample_counts: &[SampleCount],
        rng: &mut R,
    ) -> Result<Vec<(SampleCount, f64)>, IntegrationError>
    where
        F: Fn(f64) -> f64,
        R: Rng + ?Sized,
    {
        sample_counts.iter()
            .map(|&samples| Ok((samples, self.estimate(&f, interval, samples, rng)?)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::error::IntegrationError;
    use crate::integration::{Interval, SampleCount};

    use super::{MonteCarlo, UpperBound, DEFAULT_SAMPLE_COUNTS};

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn reproducible() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let samples = SampleCount::new(10_000).unwrap();
        let estimator = MonteCarlo::default();

        let first = estimator.estimate(square, interval, samples, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = estimator.estimate(square, interval, samples, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn degenerate_interval() {
        let interval = Interval::new(1.5, 1.5).unwrap();
        let samples = SampleCount::new(1).unwrap();
        let estimate = MonteCarlo::default()
            .estimate(square, interval, samples, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(estimate, 0.0);
    }

    #[test]
    fn estimate_is_a_multiple_of_the_box() {
        // With a single sample, the estimate is either zero or the full box.
        let interval = Interval::new(0.0, 2.0).unwrap();
        let samples = SampleCount::new(1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let estimate = MonteCarlo::default().estimate(square, interval, samples, &mut rng).unwrap();
            assert!(estimate == 0.0 || estimate == 8.0);
        }
    }

    #[test]
    fn constant_function_is_exact() {
        // Every sample is a hit when the function equals the box height.
        let interval = Interval::new(-1.0, 3.0).unwrap();
        let samples = SampleCount::new(1_000).unwrap();
        let estimate = MonteCarlo::default()
            .estimate(|_| 2.5, interval, samples, &mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(estimate, 10.0);
    }

    #[test]
    fn invalid_height() {
        let interval = Interval::new(0.0, 1.0).unwrap();
        let samples = SampleCount::new(10).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let result = MonteCarlo::default().estimate(|x| -x, interval, samples, &mut rng);
        assert!(matches!(result, Err(IntegrationError::InvalidArgument(_))));

        let result = MonteCarlo::new(UpperBound::Fixed(f64::NAN)).estimate(square, interval, samples, &mut rng);
        assert!(matches!(result, Err(IntegrationError::InvalidArgument(_))));
    }

    #[test]
    fn fixed_bound_for_decreasing_function() {
        // f(b) = 0 would make the box empty; a fixed bound of 1 covers 1 - x^2 on [0, 1].
        let interval = Interval::new(0.0, 1.0).unwrap();
        let samples = SampleCount::new(200_000).unwrap();
        let estimate = MonteCarlo::new(UpperBound::Fixed(1.0))
            .estimate(|x| 1.0 - x * x, interval, samples, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert!((estimate - 2.0 / 3.0).abs() < 0.01);

        let biased = MonteCarlo::default()
            .estimate(|x| 1.0 - x * x, interval, samples, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(biased, 0.0);
    }

    #[test]
    fn convergence_keeps_order() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let counts = DEFAULT_SAMPLE_COUNTS[..3].iter()
            .map(|&count| SampleCount::new(count).unwrap())
            .collect::<Vec<_>>();
        let results = MonteCarlo::default()
            .convergence(square, interval, &counts, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(results.iter().map(|(n, _)| n.get()).collect::<Vec<_>>(), vec![100, 1_000, 10_000]);
        assert!(results.iter().all(|&(_, estimate)| (0.0..=8.0).contains(&estimate)));
    }
}
