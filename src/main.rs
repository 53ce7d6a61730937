//! Command-line interface for treebench
//!
//! # Usage Examples
//!
//! ```bash
//! # Default sweep: sizes 2048 << 0..10, seeds 4..6, streams of 1000
//! treebench
//!
//! # Narrow sweep with a name filter
//! treebench --doublings 3 --base-size 1024 --filter 'ZipTree'
//!
//! # Relative experiment sizing and a counter list for downstream tooling
//! treebench --relative-experiment-size 0.25 --counters cycles,cache-misses
//! ```
//!
//! Result records are JSON lines on stdout; logs go to stderr and obey
//! `RUST_LOG`.

use anyhow::Context;
use clap::Parser;
use regex::RegexBuilder;

use bench_core::{ExperimentSize, RangeConfig};
use treebench::DriverConfig;

#[derive(Parser)]
#[command(name = "treebench")]
#[command(about = "Reproducible random-workload microbenchmarks for ordered containers")]
struct Cli {
    /// Number of size doublings, starting at the base size
    #[arg(long, default_value = "10")]
    doublings: u32,

    /// Smallest fixed-population size
    #[arg(long, default_value = "2048")]
    base_size: u64,

    /// First seed
    #[arg(long, default_value = "4")]
    seed_start: u64,

    /// Number of seeds per size
    #[arg(long, default_value = "2")]
    seed_count: u64,

    /// Experiment-stream length
    #[arg(long, default_value = "1000")]
    experiment_size: u64,

    /// Experiment-stream length as a fraction of the fixed size
    /// (overrides --experiment-size)
    #[arg(long)]
    relative_experiment_size: Option<f64>,

    /// Case-insensitive regex matched against benchmark names
    #[arg(long)]
    filter: Option<String>,

    /// Hardware counter names carried into each result record
    /// (comma-separated)
    #[arg(long, value_delimiter = ',')]
    counters: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let filter = match &cli.filter {
        Some(pattern) => Some(
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("invalid filter pattern: {pattern}"))?,
        ),
        None => None,
    };

    let experiment_size = match cli.relative_experiment_size {
        Some(fraction) => ExperimentSize::Relative(fraction),
        None => ExperimentSize::Absolute(cli.experiment_size),
    };

    let config = DriverConfig {
        range: RangeConfig {
            base_size: cli.base_size,
            doublings: cli.doublings,
            experiment_size,
            seed_start: cli.seed_start,
            seed_count: cli.seed_count,
        },
        filter,
        counters: cli.counters,
    };

    treebench::run(&config)
}
