//! Errors surfaced during workload construction.

/// Error type for workload generation.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    /// A stream was requested but its distribution is `Disabled`.
    #[error("distribution for the {stream} stream is disabled")]
    DistributionDisabled {
        /// Which stream asked for a generator.
        stream: &'static str,
    },

    /// Distinctness enforcement spent its retry budget without finding an
    /// unused value. Reachable in practice when the draw domain is smaller
    /// than the requested count (e.g. the capped Zipfian domain).
    #[error("could not draw a distinct value for slot {slot} after {retries} retries")]
    DomainExhausted {
        /// Slot index that could not be filled.
        slot: usize,
        /// Retry budget that was exhausted.
        retries: usize,
    },

    /// The configuration is internally inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
