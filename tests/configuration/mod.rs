use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

use lpquad::config::IntegrationConfig;
use lpquad::demo::area::integrate_square;
use lpquad::error::ConfigError;

#[test]
fn load_from_file() {
    let directory = tempdir().unwrap();
    let path = directory.path().join("integration.toml");
    fs::write(&path, "[monte_carlo]\nsample_counts = [1000]\nseed = 7\n\n[plot]\noutput = \"area.svg\"\n").unwrap();

    let config = IntegrationConfig::load(&path).unwrap();
    assert_eq!(config.monte_carlo.sample_counts, vec![1000]);
    assert_eq!(config.monte_carlo.seed, Some(7));
    assert_eq!(config.plot.output.to_str(), Some("area.svg"));
    assert_eq!(config.interval.upper, 2.0);
}

#[test]
fn missing_file() {
    let directory = tempdir().unwrap();
    let result = IntegrationConfig::load(directory.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn seeded_runs_agree() {
    let config = IntegrationConfig::from_toml("[monte_carlo]\nsample_counts = [100, 1000]\n").unwrap();

    let first = integrate_square(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    let second = integrate_square(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string().lines().count(), 3);
}

#[test]
fn fixed_upper_bound() {
    let config = IntegrationConfig::from_toml(
        "[monte_carlo]\nsample_counts = [200000]\nupper_bound = 5.0\n"
    ).unwrap();

    let report = integrate_square(&config, &mut StdRng::seed_from_u64(3)).unwrap();
    let (_, estimate) = report.estimates[0];
    assert!((estimate - 8.0 / 3.0).abs() < 0.05);
}
