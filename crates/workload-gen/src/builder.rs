//! Workload construction.
//!
//! [`Workload::build`] turns a `(fixed_count, experiment_count, seed)` tuple
//! and a [`WorkloadConfig`] into a fixed population, a populated container,
//! and the requested experiment streams. Every random draw comes from one
//! seeded engine, advanced monotonically; sub-engines are seeded from draws
//! of the master engine at fixed points, so the draw order is part of the
//! reproducibility contract.

use std::collections::HashSet;

use bench_core::{RunParams, WorkloadConfig, WorkloadError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tree_adapters::ContainerAdapter;

use crate::presort::{presort, presort_by};
use crate::random::ValueDistribution;

/// Retry budget per slot for distinctness enforcement. Spending it means the
/// draw domain cannot supply enough unique values.
pub const DISTINCT_RETRY_LIMIT: usize = 1 << 20;

/// A fully materialized workload, read-only during measurement.
///
/// `fixed_values` and `fixed_nodes` correspond index for index, and the
/// container holds exactly the fixed values. `experiment_node_indices` are
/// arena indices into `fixed_nodes`; they cannot dangle, whatever the
/// container does internally. Dropping the workload drops the container.
pub struct Workload<A: ContainerAdapter> {
    /// Values of the fixed population, in insertion order.
    pub fixed_values: Vec<i32>,
    /// One node per fixed value, same order.
    pub fixed_nodes: Vec<A::Node>,
    /// The measured container, populated with every fixed node.
    pub container: A::Container,
    /// Experiment stream of ready-made nodes, if requested.
    pub experiment_nodes: Vec<A::Node>,
    /// Experiment stream of plain values, if requested.
    pub experiment_values: Vec<i32>,
    /// Experiment stream of indices into `fixed_nodes`, if requested.
    pub experiment_node_indices: Vec<usize>,
}

impl<A: ContainerAdapter> Workload<A> {
    /// Build the workload for one benchmark run.
    pub fn build(params: RunParams, config: &WorkloadConfig) -> Result<Self, WorkloadError> {
        validate(params, config)?;

        let RunParams {
            fixed_count,
            experiment_count,
            seed,
        } = params;
        tracing::debug!(fixed_count, experiment_count, seed, "building workload");

        let mut master = StdRng::seed_from_u64(seed);
        let mut main = ValueDistribution::new(config.fixed_distribution, seed, "fixed population")?;
        let (main_min, main_max) = config.fixed_distribution.domain();

        let mut seen_values: HashSet<i32> = HashSet::new();
        let mut fixed_values = Vec::with_capacity(fixed_count);
        for slot in 0..fixed_count {
            let val = if config.distinct {
                draw_distinct(&mut main, main_min, main_max, &mut seen_values, slot)?
            } else {
                main.generate(main_min, main_max)
            };
            fixed_values.push(val);
        }

        if let Some(fraction) = config.fixed_presort_fraction {
            let count = (fixed_values.len() as f64 * fraction).floor() as usize;
            presort(&mut fixed_values, count, master.gen::<u64>());
        }

        // Node materialization and container fill stay separate passes:
        // insertion order is itself a variable under study, and it must be
        // exactly the order of the finished value list.
        let fixed_nodes: Vec<A::Node> = fixed_values.iter().map(|&v| A::create_node(v)).collect();
        let mut container = A::Container::default();
        for node in &fixed_nodes {
            A::insert(&mut container, node);
        }

        let mut experiment_nodes = Vec::new();
        if let Some(nc) = &config.nodes {
            let mut rnd = ValueDistribution::new(nc.distribution, master.gen::<u64>(), "node")?;
            let (min, max) = nc.distribution.domain();
            seen_values.clear();
            experiment_nodes.reserve(experiment_count);
            for slot in 0..experiment_count {
                let val = if config.values_from_fixed {
                    let idx = rnd.generate(0, fixed_values.len() as i32 - 1) as usize;
                    fixed_values[idx]
                } else if config.distinct {
                    draw_distinct(&mut rnd, min, max, &mut seen_values, slot)?
                } else {
                    rnd.generate(min, max)
                };
                experiment_nodes.push(A::create_node(val));
            }
            if let Some(fraction) = nc.presort_fraction {
                let count = (experiment_nodes.len() as f64 * fraction).floor() as usize;
                presort_by(&mut experiment_nodes, count, master.gen::<u64>(), |a, b| {
                    A::get_value(a).cmp(&A::get_value(b))
                });
            }
        }

        let mut experiment_node_indices = Vec::new();
        if let Some(pc) = &config.node_pointers {
            let mut rnd =
                ValueDistribution::new(pc.distribution, master.gen::<u64>(), "node pointer")?;
            let mut seen_indices: HashSet<usize> = HashSet::new();
            experiment_node_indices.reserve(experiment_count);
            for slot in 0..experiment_count {
                let mut idx = rnd.generate(0, fixed_nodes.len() as i32 - 1) as usize;
                if config.distinct || pc.distinct {
                    let mut retries = 0;
                    while !seen_indices.insert(idx) {
                        retries += 1;
                        if retries > DISTINCT_RETRY_LIMIT {
                            return Err(WorkloadError::DomainExhausted {
                                slot,
                                retries: DISTINCT_RETRY_LIMIT,
                            });
                        }
                        idx = rnd.generate(0, fixed_nodes.len() as i32 - 1) as usize;
                    }
                }
                experiment_node_indices.push(idx);
            }
            if let Some(fraction) = pc.presort_fraction {
                let count = (experiment_node_indices.len() as f64 * fraction).floor() as usize;
                presort_by(
                    &mut experiment_node_indices,
                    count,
                    master.gen::<u64>(),
                    |&a, &b| fixed_values[a].cmp(&fixed_values[b]),
                );
            }
        }

        let mut experiment_values = Vec::new();
        if let Some(vc) = &config.values {
            let mut rnd = ValueDistribution::new(vc.distribution, master.gen::<u64>(), "value")?;
            let (domain_min, domain_max) = vc.distribution.domain();
            seen_values.clear();
            experiment_values.reserve(experiment_count);
            for slot in 0..experiment_count {
                let val = if config.values_from_fixed {
                    let idx = rnd.generate(0, fixed_values.len() as i32 - 1) as usize;
                    fixed_values[idx]
                } else {
                    let (min, max) = if vc.change_percentage > 0 {
                        let anchor = A::get_value(&fixed_nodes[experiment_node_indices[slot]]);
                        perturbation_window(anchor, domain_min, domain_max, vc.change_percentage)
                    } else {
                        (domain_min, domain_max)
                    };
                    if config.distinct {
                        draw_distinct(&mut rnd, min, max, &mut seen_values, slot)?
                    } else {
                        rnd.generate(min, max)
                    }
                };
                experiment_values.push(val);
            }
            if let Some(fraction) = vc.presort_fraction {
                let count = (experiment_values.len() as f64 * fraction).floor() as usize;
                presort(&mut experiment_values, count, master.gen::<u64>());
            }
        }

        Ok(Workload {
            fixed_values,
            fixed_nodes,
            container,
            experiment_nodes,
            experiment_values,
            experiment_node_indices,
        })
    }

    /// Empty the container. Also happens implicitly when the workload drops.
    pub fn teardown(&mut self) {
        A::clear(&mut self.container);
    }
}

fn validate(params: RunParams, config: &WorkloadConfig) -> Result<(), WorkloadError> {
    let streams_requested =
        config.nodes.is_some() || config.values.is_some() || config.node_pointers.is_some();
    if params.fixed_count == 0 && (streams_requested || config.values_from_fixed) {
        return Err(WorkloadError::InvalidConfig(
            "experiment streams need a non-empty fixed population".to_string(),
        ));
    }
    if let Some(vc) = &config.values {
        if vc.change_percentage > 0 && !config.values_from_fixed && config.node_pointers.is_none() {
            return Err(WorkloadError::InvalidConfig(
                "perturbed values need the node-pointer stream for their anchors".to_string(),
            ));
        }
    }
    Ok(())
}

/// Draw until the value is unused, within the retry budget.
fn draw_distinct(
    dist: &mut ValueDistribution,
    min: i32,
    max: i32,
    seen: &mut HashSet<i32>,
    slot: usize,
) -> Result<i32, WorkloadError> {
    let mut val = dist.generate(min, max);
    let mut retries = 0;
    while !seen.insert(val) {
        retries += 1;
        if retries > DISTINCT_RETRY_LIMIT {
            return Err(WorkloadError::DomainExhausted {
                slot,
                retries: DISTINCT_RETRY_LIMIT,
            });
        }
        val = dist.generate(min, max);
    }
    Ok(val)
}

/// Window of "nearby" replacement values around `anchor`.
///
/// The half-width is `percentage` percent of half the domain span; each side
/// is clamped to the domain bound independently, so the window never leaves
/// `[domain_min, domain_max]` and the arithmetic cannot overflow.
fn perturbation_window(
    anchor: i32,
    domain_min: i32,
    domain_max: i32,
    percentage: u32,
) -> (i32, i32) {
    let half_span = (domain_max as f64 / 2.0) - (domain_min as f64 / 2.0);
    let mut delta = half_span * (percentage as f64 / 100.0);
    if !delta.is_finite() || f64::MAX / half_span.max(1.0) < percentage as f64 / 100.0 {
        delta = f64::MAX / 2.0;
    }

    let lo = if (domain_min as f64) + delta < anchor as f64 {
        (anchor as f64 - delta).round() as i32
    } else {
        domain_min
    };
    let hi = if (domain_max as f64) - delta > anchor as f64 {
        (anchor as f64 + delta).round() as i32
    } else {
        domain_max
    };
    (lo, hi)
}
