//! Measurement driver.
//!
//! Crosses every registered experiment with every backend and every
//! parameter tuple, builds the workload, times the measured operation and
//! emits one JSON result record per run on stdout. A failing fixture
//! (e.g. domain exhaustion under distinctness) fails that one tuple only.

use std::time::Instant;

use anyhow::Context;
use bench_core::{RangeConfig, RunParams};
use regex::Regex;
use serde::Serialize;
use tree_adapters::{
    BTreeMultisetAdapter, ContainerAdapter, EnergyTreeAdapter, RbTreeAdapter, SortedVecAdapter,
    WbTreeAdapter, ZipTreeHashedAdapter, ZipTreeRandomAdapter,
};
use workload_gen::Workload;

use crate::experiments::{run_op, standard_experiments, ExperimentSpec};

/// Everything the driver needs for one invocation.
pub struct DriverConfig {
    /// Parameter space to sweep.
    pub range: RangeConfig,
    /// Case-insensitive filter on combined benchmark names.
    pub filter: Option<Regex>,
    /// Hardware counter names carried verbatim into each result record.
    pub counters: Vec<String>,
}

/// One emitted measurement.
#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    benchmark: &'a str,
    experiment: &'a str,
    backend: &'a str,
    fixed_count: usize,
    experiment_count: usize,
    seed: u64,
    nanos: u64,
    ops: usize,
    counters: &'a [String],
}

/// Run the full sweep.
pub fn run(config: &DriverConfig) -> anyhow::Result<()> {
    let runs = config.range.expand();
    tracing::info!(
        tuples = runs.len(),
        counters = ?config.counters,
        "starting benchmark sweep"
    );

    for exp in standard_experiments() {
        run_all_backends(&exp, config, &runs)?;
    }
    Ok(())
}

fn run_all_backends(
    exp: &ExperimentSpec,
    config: &DriverConfig,
    runs: &[RunParams],
) -> anyhow::Result<()> {
    run_backend::<RbTreeAdapter>(exp, config, runs)?;
    run_backend::<WbTreeAdapter>(exp, config, runs)?;
    run_backend::<EnergyTreeAdapter>(exp, config, runs)?;
    run_backend::<ZipTreeRandomAdapter>(exp, config, runs)?;
    run_backend::<ZipTreeHashedAdapter>(exp, config, runs)?;
    run_backend::<BTreeMultisetAdapter>(exp, config, runs)?;
    run_backend::<SortedVecAdapter>(exp, config, runs)?;
    Ok(())
}

fn run_backend<A: ContainerAdapter>(
    exp: &ExperimentSpec,
    config: &DriverConfig,
    runs: &[RunParams],
) -> anyhow::Result<()> {
    let backend = A::name();
    let benchmark = format!("BST :: {} :: {}", exp.name, backend);
    if let Some(filter) = &config.filter {
        if !filter.is_match(&benchmark) {
            tracing::debug!(%benchmark, "filtered out");
            return Ok(());
        }
    }

    for &params in runs {
        let mut workload = match Workload::<A>::build(params, &exp.config) {
            Ok(workload) => workload,
            Err(e) => {
                tracing::warn!(
                    %benchmark,
                    fixed_count = params.fixed_count,
                    experiment_count = params.experiment_count,
                    seed = params.seed,
                    error = %e,
                    "fixture setup failed, skipping tuple"
                );
                continue;
            }
        };

        let start = Instant::now();
        let ops = run_op(exp.op, &mut workload);
        let nanos = start.elapsed().as_nanos() as u64;

        let record = ResultRecord {
            benchmark: &benchmark,
            experiment: exp.name,
            backend: &backend,
            fixed_count: params.fixed_count,
            experiment_count: params.experiment_count,
            seed: params.seed,
            nanos,
            ops,
            counters: &config.counters,
        };
        println!(
            "{}",
            serde_json::to_string(&record).context("serializing result record")?
        );

        workload.teardown();
    }
    Ok(())
}
