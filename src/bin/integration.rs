//! Estimate the integral of `x^2` over `[0, 2]` by rejection sampling, compare with quadrature and
//! plot the area.
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use lpquad::config::IntegrationConfig;
use lpquad::demo::area::integrate_square;
use lpquad::error::Error;
use lpquad::logging::init_tracing;
use lpquad::plot::PlotSink;
use lpquad::plot::svg::SvgSink;

/// Monte Carlo integration of a parabola.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// TOML file with the interval, sample counts, tolerances and plot settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed of the random source, for reproducible estimates
    #[arg(long)]
    seed: Option<u64>,
    /// Where the SVG figure is written
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    init_tracing();
    let opts = Opts::parse();

    let mut config = match &opts.config {
        Some(path) => IntegrationConfig::load(path)?,
        None => IntegrationConfig::default(),
    };
    if let Some(seed) = opts.seed {
        config.monte_carlo.seed = Some(seed);
    }
    if let Some(output) = opts.output {
        config.plot.output = output;
    }

    let report = match config.monte_carlo.seed {
        Some(seed) => integrate_square(&config, &mut StdRng::seed_from_u64(seed))?,
        None => integrate_square(&config, &mut rand::rng())?,
    };
    print!("{}", report);

    SvgSink::create(&config.plot.output)?.render(&report.figure)?;
    info!(path = %config.plot.output.display(), "figure written");

    Ok(())
}
