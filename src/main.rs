use std::io;

use anyhow::Context;
use clap::Parser;

use tsp_anneal::sa::{SaConfig, SaRunner};
use tsp_anneal::tsp::{format_tour, read_instance};

/// Approximate a shortest closed tour over cities read from stdin.
///
/// Input: a city count followed by that many `x y` coordinate pairs,
/// whitespace or newline separated. Output: the best tour found as
/// 1-based city indices in visiting order, then its total cost.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Search budget (candidate evaluations).
    #[arg(short, long, default_value_t = 10_000)]
    iterations: usize,

    /// Initial temperature.
    #[arg(short = 't', long, default_value_t = 10_000.0)]
    start_temperature: f64,

    /// Per-iteration cooling multiplier, in (0, 1).
    #[arg(short, long, default_value_t = 0.995)]
    alpha: f64,

    /// Random seed; omit for a fresh seed per run.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = SaConfig::default()
        .with_iterations(args.iterations)
        .with_start_temperature(args.start_temperature)
        .with_alpha(args.alpha);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("invalid search parameters")?;

    let instance = read_instance(io::stdin().lock()).context("failed to read instance")?;

    let result = SaRunner::run(&instance, &config);

    println!("{}", format_tour(&result.best_tour));
    println!("Total cost: {}", result.best_cost);

    Ok(())
}
