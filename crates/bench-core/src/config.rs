//! Workload generation configuration.
//!
//! A [`WorkloadConfig`] is fixed when an experiment is defined and passed by
//! reference into the builder; nothing in the pipeline mutates it afterwards.
//! Each optional stream section both enables the stream and carries its
//! per-stream knobs, so "which streams are needed" is encoded in the type
//! rather than in loose boolean flags.

use serde::{Deserialize, Serialize};

/// Statistical shape of a seeded integer generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    /// Stream must not draw values at all. Constructing an engine from this
    /// variant is an error; callers gate on [`DistributionKind::is_enabled`].
    Disabled,
    /// Every integer in the requested range equally probable.
    Uniform,
    /// Zipf-distributed ranks with exponent 1.0. The domain is capped at
    /// 10 000 distinct values regardless of the caller-requested maximum,
    /// so the skew stays meaningful.
    Zipfian,
    /// Mäkinen-style skewed sequence (skew factor 3, peak width 1000).
    Skewed,
}

/// Domain cap for the Zipfian shape.
pub const ZIPF_DOMAIN_CAP: i32 = 10_000;

/// Margin by which the skewed shape narrows the integer domain, keeping
/// draws away from the representable bounds where clamping would cluster.
pub const SKEWED_DOMAIN_MARGIN: i32 = 1000;

impl DistributionKind {
    /// Whether this kind may be turned into a generator.
    pub fn is_enabled(self) -> bool {
        self != DistributionKind::Disabled
    }

    /// The integer domain this shape wants to draw from.
    ///
    /// # Panics
    ///
    /// Panics for [`DistributionKind::Disabled`]; gate on
    /// [`DistributionKind::is_enabled`] first.
    pub fn domain(self) -> (i32, i32) {
        match self {
            DistributionKind::Disabled => {
                panic!("disabled distribution has no domain")
            }
            DistributionKind::Uniform => (i32::MIN, i32::MAX),
            DistributionKind::Zipfian => (i32::MIN, ZIPF_DOMAIN_CAP),
            DistributionKind::Skewed => (
                i32::MIN + SKEWED_DOMAIN_MARGIN,
                (i32::MAX as f64 * 0.8) as i32,
            ),
        }
    }
}

/// Configuration for the experiment-node stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStreamConfig {
    /// Shape the node values are drawn from.
    pub distribution: DistributionKind,
    /// Presort fraction applied to the finished stream, if any.
    pub presort_fraction: Option<f64>,
}

/// Configuration for the node-pointer stream (arena indices into the
/// fixed population).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerStreamConfig {
    /// Shape the indices are drawn from.
    pub distribution: DistributionKind,
    /// No fixed-population index may be referenced twice.
    pub distinct: bool,
    /// Presort fraction applied to the finished stream, if any. Indices are
    /// ordered by the value they point at.
    pub presort_fraction: Option<f64>,
}

/// Configuration for the experiment-value stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueStreamConfig {
    /// Shape the values are drawn from.
    pub distribution: DistributionKind,
    /// Presort fraction applied to the finished stream, if any.
    pub presort_fraction: Option<f64>,
    /// When non-zero, each slot `i` is drawn from a window of this
    /// percentage of the domain, centered on the value the node-pointer
    /// stream references at slot `i`. Models "nearby" replacement values
    /// for update-style operations.
    pub change_percentage: u32,
}

/// Immutable configuration driving one workload build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// All fixed-population values (and fresh experiment values) must be
    /// pairwise distinct.
    pub distinct: bool,
    /// Shape the fixed population is drawn from.
    pub fixed_distribution: DistributionKind,
    /// Presort fraction applied to the fixed population before nodes are
    /// materialized, if any.
    pub fixed_presort_fraction: Option<f64>,
    /// Experiment values are taken from the fixed population by uniform
    /// index (operations on values known to exist) instead of drawn fresh
    /// (operations on arbitrary, possibly absent values).
    pub values_from_fixed: bool,
    /// Experiment-node stream, if the experiment needs one.
    pub nodes: Option<NodeStreamConfig>,
    /// Node-pointer stream, if the experiment needs one.
    pub node_pointers: Option<PointerStreamConfig>,
    /// Experiment-value stream, if the experiment needs one.
    pub values: Option<ValueStreamConfig>,
}

impl Default for WorkloadConfig {
    /// Everything off: uniform fixed population, no experiment streams.
    fn default() -> Self {
        WorkloadConfig {
            distinct: false,
            fixed_distribution: DistributionKind::Uniform,
            fixed_presort_fraction: None,
            values_from_fixed: false,
            nodes: None,
            node_pointers: None,
            values: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_domain_spans_i32() {
        assert_eq!(
            DistributionKind::Uniform.domain(),
            (i32::MIN, i32::MAX)
        );
    }

    #[test]
    fn test_zipfian_domain_is_capped() {
        let (_, max) = DistributionKind::Zipfian.domain();
        assert_eq!(max, 10_000);
    }

    #[test]
    fn test_skewed_domain_is_narrowed() {
        let (min, max) = DistributionKind::Skewed.domain();
        assert_eq!(min, i32::MIN + 1000);
        assert!(max < i32::MAX - 1000);
    }

    #[test]
    #[should_panic(expected = "disabled distribution")]
    fn test_disabled_has_no_domain() {
        DistributionKind::Disabled.domain();
    }

    #[test]
    fn test_default_config_has_no_streams() {
        let config = WorkloadConfig::default();
        assert!(!config.distinct);
        assert!(config.nodes.is_none());
        assert!(config.node_pointers.is_none());
        assert!(config.values.is_none());
        assert!(config.fixed_distribution.is_enabled());
    }
}
