//! Workload generation for the treebench benchmark framework.
//!
//! This crate builds reproducible, statistically-controlled random workloads
//! for ordered-container microbenchmarks. The same `(fixed_count,
//! experiment_count, seed, config)` always yields byte-identical sequences,
//! on every backend, across runs.
//!
//! # Architecture
//!
//! ```text
//! RunParams + WorkloadConfig
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  Workload::build │
//! │                  │
//! │  - master StdRng │
//! │  - distributions │
//! │  - presort       │
//! └────────┬─────────┘
//!          │
//!          ▼
//! fixed population ──▶ container (via ContainerAdapter)
//! experiment streams (values / nodes / node indices)
//! ```
//!
//! # Example
//!
//! ```rust
//! use bench_core::{RunParams, WorkloadConfig};
//! use tree_adapters::BTreeMultisetAdapter;
//! use workload_gen::Workload;
//!
//! let params = RunParams { fixed_count: 256, experiment_count: 64, seed: 4 };
//! let config = WorkloadConfig { distinct: true, ..WorkloadConfig::default() };
//!
//! let workload = Workload::<BTreeMultisetAdapter>::build(params, &config).unwrap();
//! assert_eq!(workload.fixed_values.len(), 256);
//! ```

pub mod builder;
pub mod presort;
pub mod random;

// Re-exports for convenience
pub use builder::Workload;
pub use presort::{presort, presort_by};
pub use random::ValueDistribution;
