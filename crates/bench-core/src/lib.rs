//! Core types for the treebench workload pipeline.
//!
//! This crate provides the foundational types shared by the workload
//! generator and the measurement driver:
//!
//! - [`WorkloadConfig`] - Immutable per-experiment generation configuration
//! - [`DistributionKind`] - Which statistical shape a stream draws from
//! - [`RunParams`] - One concrete `(fixed_count, experiment_count, seed)` run
//! - [`RangeConfig`] - Parameter-space expansion into [`RunParams`] tuples
//! - [`WorkloadError`] - Errors surfaced during workload construction
//!
//! # Architecture
//!
//! ```text
//! bench-core (this crate)
//!    │
//!    ├─── workload-gen    (consumes WorkloadConfig + RunParams)
//!    ├─── tree-adapters   (driven through the generated workloads)
//!    └─── treebench       (CLI builds RangeConfig, expands to RunParams)
//! ```

pub mod config;
pub mod error;
pub mod params;

// Re-exports for convenience
pub use config::{
    DistributionKind, NodeStreamConfig, PointerStreamConfig, ValueStreamConfig, WorkloadConfig,
    SKEWED_DOMAIN_MARGIN, ZIPF_DOMAIN_CAP,
};
pub use error::WorkloadError;
pub use params::{ExperimentSize, RangeConfig, RunParams};
