//! Reproducibility contract tests.
//!
//! Identical `(fixed_count, experiment_count, seed, config)` must yield
//! byte-identical generated sequences, run to run and backend to backend;
//! different seeds must not.

use bench_core::{
    DistributionKind, NodeStreamConfig, PointerStreamConfig, RunParams, ValueStreamConfig,
    WorkloadConfig,
};
use tree_adapters::{
    ContainerAdapter, EnergyTreeAdapter, SortedVecAdapter, WbTreeAdapter, ZipTreeHashedAdapter,
};
use workload_gen::Workload;

fn full_config() -> WorkloadConfig {
    WorkloadConfig {
        distinct: false,
        fixed_distribution: DistributionKind::Uniform,
        fixed_presort_fraction: Some(0.1),
        values_from_fixed: false,
        nodes: Some(NodeStreamConfig {
            distribution: DistributionKind::Zipfian,
            presort_fraction: Some(0.2),
        }),
        node_pointers: Some(PointerStreamConfig {
            distribution: DistributionKind::Uniform,
            distinct: true,
            presort_fraction: None,
        }),
        values: Some(ValueStreamConfig {
            distribution: DistributionKind::Skewed,
            presort_fraction: None,
            change_percentage: 0,
        }),
    }
}

fn node_values<A: ContainerAdapter>(nodes: &[A::Node]) -> Vec<i32> {
    nodes.iter().map(A::get_value).collect()
}

#[test]
fn test_repeat_runs_are_byte_identical() {
    let params = RunParams {
        fixed_count: 512,
        experiment_count: 256,
        seed: 17,
    };
    let config = full_config();

    let a = Workload::<WbTreeAdapter>::build(params, &config).unwrap();
    let b = Workload::<WbTreeAdapter>::build(params, &config).unwrap();

    assert_eq!(a.fixed_values, b.fixed_values);
    assert_eq!(
        node_values::<WbTreeAdapter>(&a.experiment_nodes),
        node_values::<WbTreeAdapter>(&b.experiment_nodes)
    );
    assert_eq!(a.experiment_node_indices, b.experiment_node_indices);
    assert_eq!(a.experiment_values, b.experiment_values);
}

#[test]
fn test_generation_does_not_depend_on_backend() {
    let params = RunParams {
        fixed_count: 512,
        experiment_count: 256,
        seed: 23,
    };
    let config = full_config();

    let a = Workload::<EnergyTreeAdapter>::build(params, &config).unwrap();
    let b = Workload::<ZipTreeHashedAdapter>::build(params, &config).unwrap();
    let c = Workload::<SortedVecAdapter>::build(params, &config).unwrap();

    assert_eq!(a.fixed_values, b.fixed_values);
    assert_eq!(a.fixed_values, c.fixed_values);
    assert_eq!(
        node_values::<EnergyTreeAdapter>(&a.experiment_nodes),
        node_values::<ZipTreeHashedAdapter>(&b.experiment_nodes)
    );
    assert_eq!(a.experiment_node_indices, b.experiment_node_indices);
    assert_eq!(a.experiment_values, c.experiment_values);

    // Same multiset in every container, whatever the internal layout.
    assert_eq!(
        EnergyTreeAdapter::values(&a.container),
        ZipTreeHashedAdapter::values(&b.container)
    );
    assert_eq!(
        EnergyTreeAdapter::values(&a.container),
        SortedVecAdapter::values(&c.container)
    );
}

#[test]
fn test_different_seeds_diverge() {
    let config = full_config();
    let a = Workload::<SortedVecAdapter>::build(
        RunParams {
            fixed_count: 512,
            experiment_count: 128,
            seed: 1,
        },
        &config,
    )
    .unwrap();
    let b = Workload::<SortedVecAdapter>::build(
        RunParams {
            fixed_count: 512,
            experiment_count: 128,
            seed: 2,
        },
        &config,
    )
    .unwrap();
    assert_ne!(a.fixed_values, b.fixed_values);
}
