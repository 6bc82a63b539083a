use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use lpquad::error::IntegrationError;
use lpquad::integration::{Interval, SampleCount};
use lpquad::integration::monte_carlo::{MonteCarlo, UpperBound};
use lpquad::integration::quadrature::{GaussKronrod, Quadrature};

fn square(x: f64) -> f64 {
    x * x
}

fn zero_to_two() -> Interval {
    Interval::new(0.0, 2.0).unwrap()
}

/// Value of the integral according to the quadrature.
fn reference() -> f64 {
    let interval = zero_to_two();
    GaussKronrod::default()
        .integrate(square, interval.lower(), interval.upper())
        .unwrap()
        .value
}

/// Absolute error of the estimate for each of the seeds.
fn errors(samples: usize, seeds: std::ops::Range<u64>) -> Vec<f64> {
    let samples = SampleCount::new(samples).unwrap();
    let reference = reference();
    seeds
        .map(|seed| {
            let estimate = MonteCarlo::default()
                .estimate(square, zero_to_two(), samples, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            (estimate - reference).abs()
        })
        .collect()
}

#[test]
fn million_samples() {
    let errors = errors(1_000_000, 0..20);
    let within = errors.iter().filter(|&&error| error < 0.05).count();
    assert!(within * 100 >= 95 * errors.len(), "only {} of {} estimates within 0.05: {:?}", within, errors.len(), errors);
}

#[test]
fn error_shrinks_with_more_samples() {
    let mean = |errors: Vec<f64>| errors.iter().sum::<f64>() / errors.len() as f64;
    let small = mean(errors(100, 100..120));
    let large = mean(errors(100_000, 100..120));

    assert!(large < small, "{} should be smaller than {}", large, small);
    assert!(large < 0.05);
}

#[test]
fn zero_samples() {
    assert!(matches!(SampleCount::new(0), Err(IntegrationError::InvalidArgument(_))));
}

#[test]
fn one_random_source_for_all_counts() {
    // Sharing one source gives the same results as drawing from it sequentially.
    let counts = [100, 1_000].map(|count| SampleCount::new(count).unwrap());
    let shared = MonteCarlo::default()
        .convergence(square, zero_to_two(), &counts, &mut StdRng::seed_from_u64(9))
        .unwrap();

    let mut rng = StdRng::seed_from_u64(9);
    let sequential = counts.iter()
        .map(|&samples| MonteCarlo::default().estimate(square, zero_to_two(), samples, &mut rng).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(shared.iter().map(|&(_, estimate)| estimate).collect::<Vec<_>>(), sequential);
}

proptest! {
    #[test]
    fn reproducible_for_a_seed(seed in any::<u64>(), samples in 1_usize..2_000) {
        let samples = SampleCount::new(samples).unwrap();
        let first = MonteCarlo::default()
            .estimate(square, zero_to_two(), samples, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let second = MonteCarlo::default()
            .estimate(square, zero_to_two(), samples, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn within_the_box(seed in any::<u64>(), lower in -10.0_f64..10.0, width in 0.0_f64..5.0, bound in 0.0_f64..10.0) {
        let interval = Interval::new(lower, lower + width).unwrap();
        let samples = SampleCount::new(500).unwrap();
        let estimate = MonteCarlo::new(UpperBound::Fixed(bound))
            .estimate(|x: f64| x.sin().abs(), interval, samples, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert!(estimate >= 0.0);
        prop_assert!(estimate <= interval.width() * bound + 1e-12);
    }

    #[test]
    fn degenerate_interval_is_zero(seed in any::<u64>(), point in -100.0_f64..100.0) {
        let interval = Interval::new(point, point).unwrap();
        let samples = SampleCount::new(10).unwrap();
        let estimate = MonteCarlo::default()
            .estimate(square, interval, samples, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        prop_assert_eq!(estimate, 0.0);
    }
}
