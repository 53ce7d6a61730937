//! treebench library
//!
//! Reproducible random-workload microbenchmarks for ordered containers.
//! The binary wires three layers together:
//!
//! - `bench-core` - configuration, parameter-space expansion, errors
//! - `workload-gen` - seeded population and experiment-stream construction
//! - `tree-adapters` - the uniform contract over the measured backends
//!
//! This crate adds the measurement side: a registry of standard experiments
//! ([`experiments`]) and the driver that times them and emits result records
//! ([`driver`]).
//!
//! # CLI Usage
//!
//! ```bash
//! # Full sweep: 10 doublings from 2048, seeds 4 and 5
//! treebench
//!
//! # One size, one seed, insert experiments on the red-black backend only
//! treebench --doublings 1 --seed-count 1 --filter 'insert.*RBTree'
//!
//! # Relative experiment sizing: streams are 10% of the fixed size
//! treebench --relative-experiment-size 0.1
//! ```

pub mod driver;
pub mod experiments;

pub use driver::{run, DriverConfig};
pub use experiments::{standard_experiments, ExperimentSpec, MeasuredOp};
