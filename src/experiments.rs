//! The registry of standard experiments.
//!
//! An experiment is a workload shape plus the operation measured over it.
//! The driver crosses every experiment with every backend and every
//! parameter tuple; filtering happens on the combined name.

use bench_core::{
    DistributionKind, NodeStreamConfig, PointerStreamConfig, ValueStreamConfig, WorkloadConfig,
};
use tree_adapters::ContainerAdapter;
use workload_gen::Workload;

/// Operation timed over the materialized streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasuredOp {
    /// Insert every experiment node into the populated container.
    InsertNodes,
    /// Write the experiment values into the nodes the pointer stream
    /// references.
    SetValues,
    /// Clear the container and re-insert the whole fixed population.
    ClearRefill,
}

/// One named experiment: workload shape plus measured operation.
pub struct ExperimentSpec {
    /// Short name; the driver combines it with the backend name.
    pub name: &'static str,
    /// Workload shape handed to the builder.
    pub config: WorkloadConfig,
    /// What gets timed.
    pub op: MeasuredOp,
}

/// Execute the measured operation; returns the number of operations done,
/// so the timed loop has an observable result.
pub fn run_op<A: ContainerAdapter>(op: MeasuredOp, workload: &mut Workload<A>) -> usize {
    match op {
        MeasuredOp::InsertNodes => {
            for node in &workload.experiment_nodes {
                A::insert(&mut workload.container, node);
            }
            workload.experiment_nodes.len()
        }
        MeasuredOp::SetValues => {
            let count = workload
                .experiment_node_indices
                .len()
                .min(workload.experiment_values.len());
            for slot in 0..count {
                let idx = workload.experiment_node_indices[slot];
                A::set_value(&mut workload.fixed_nodes[idx], workload.experiment_values[slot]);
            }
            count
        }
        MeasuredOp::ClearRefill => {
            A::clear(&mut workload.container);
            for node in &workload.fixed_nodes {
                A::insert(&mut workload.container, node);
            }
            workload.fixed_nodes.len()
        }
    }
}

fn nodes(distribution: DistributionKind, presort_fraction: Option<f64>) -> Option<NodeStreamConfig> {
    Some(NodeStreamConfig {
        distribution,
        presort_fraction,
    })
}

/// The experiments the binary registers.
pub fn standard_experiments() -> Vec<ExperimentSpec> {
    vec![
        ExperimentSpec {
            name: "insert",
            config: WorkloadConfig {
                nodes: nodes(DistributionKind::Uniform, None),
                ..WorkloadConfig::default()
            },
            op: MeasuredOp::InsertNodes,
        },
        ExperimentSpec {
            name: "insert_zipf",
            config: WorkloadConfig {
                nodes: nodes(DistributionKind::Zipfian, None),
                ..WorkloadConfig::default()
            },
            op: MeasuredOp::InsertNodes,
        },
        ExperimentSpec {
            name: "insert_skewed",
            config: WorkloadConfig {
                nodes: nodes(DistributionKind::Skewed, None),
                ..WorkloadConfig::default()
            },
            op: MeasuredOp::InsertNodes,
        },
        ExperimentSpec {
            name: "insert_half_sorted",
            config: WorkloadConfig {
                fixed_presort_fraction: Some(0.0),
                nodes: nodes(DistributionKind::Uniform, Some(0.5)),
                ..WorkloadConfig::default()
            },
            op: MeasuredOp::InsertNodes,
        },
        ExperimentSpec {
            name: "update_nearby",
            config: WorkloadConfig {
                node_pointers: Some(PointerStreamConfig {
                    distribution: DistributionKind::Uniform,
                    distinct: true,
                    presort_fraction: None,
                }),
                values: Some(ValueStreamConfig {
                    distribution: DistributionKind::Uniform,
                    presort_fraction: None,
                    change_percentage: 5,
                }),
                ..WorkloadConfig::default()
            },
            op: MeasuredOp::SetValues,
        },
        ExperimentSpec {
            name: "overwrite_existing",
            config: WorkloadConfig {
                values_from_fixed: true,
                node_pointers: Some(PointerStreamConfig {
                    distribution: DistributionKind::Uniform,
                    distinct: false,
                    presort_fraction: None,
                }),
                values: Some(ValueStreamConfig {
                    distribution: DistributionKind::Uniform,
                    presort_fraction: None,
                    change_percentage: 0,
                }),
                ..WorkloadConfig::default()
            },
            op: MeasuredOp::SetValues,
        },
        ExperimentSpec {
            name: "refill",
            config: WorkloadConfig {
                distinct: true,
                ..WorkloadConfig::default()
            },
            op: MeasuredOp::ClearRefill,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_core::RunParams;
    use tree_adapters::BTreeMultisetAdapter;

    #[test]
    fn test_experiment_names_are_unique() {
        let experiments = standard_experiments();
        for (i, a) in experiments.iter().enumerate() {
            for b in &experiments[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_every_experiment_builds_and_runs() {
        let params = RunParams {
            fixed_count: 128,
            experiment_count: 32,
            seed: 4,
        };
        for exp in standard_experiments() {
            let mut workload = Workload::<BTreeMultisetAdapter>::build(params, &exp.config)
                .unwrap_or_else(|e| panic!("{} failed to build: {e}", exp.name));
            let done = run_op(exp.op, &mut workload);
            assert!(done > 0, "{} did no work", exp.name);
        }
    }

    #[test]
    fn test_insert_extends_container() {
        let params = RunParams {
            fixed_count: 64,
            experiment_count: 16,
            seed: 1,
        };
        let experiments = standard_experiments();
        let exp = &experiments[0];
        let mut workload = Workload::<BTreeMultisetAdapter>::build(params, &exp.config).unwrap();
        run_op(exp.op, &mut workload);
        assert_eq!(BTreeMultisetAdapter::len(&workload.container), 80);
    }
}
