//! Seeded integer generators of different statistical shapes.

use bench_core::{DistributionKind, WorkloadError, ZIPF_DOMAIN_CAP};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution as _, Zipf};

/// Skew factor of the Mäkinen-style sequence: one draw in `SKEW_FACTOR`
/// relocates the peak, the rest stay inside it.
const SKEW_FACTOR: u32 = 3;

/// Width of the hot window the skewed sequence clusters in.
const PEAK_WIDTH: i64 = 1000;

struct ZipfCache {
    min: i32,
    max: i32,
    zipf: Zipf<f64>,
}

/// A seeded integer generator. Values are deterministic given the seed and
/// the call order; every engine is owned by exactly one workload build.
pub struct ValueDistribution {
    kind: DistributionKind,
    rng: StdRng,
    zipf: Option<ZipfCache>,
    peak: Option<i32>,
}

impl ValueDistribution {
    /// Create an engine for `kind`.
    ///
    /// `stream` names the requesting stream for error reporting; asking for
    /// an engine on a `Disabled` kind is a configuration error.
    pub fn new(
        kind: DistributionKind,
        seed: u64,
        stream: &'static str,
    ) -> Result<Self, WorkloadError> {
        if !kind.is_enabled() {
            return Err(WorkloadError::DistributionDisabled { stream });
        }
        Ok(ValueDistribution {
            kind,
            rng: StdRng::seed_from_u64(seed),
            zipf: None,
            peak: None,
        })
    }

    /// Next integer in `[min, max]` under this engine's shape.
    pub fn generate(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        match self.kind {
            DistributionKind::Disabled => unreachable!("rejected in new()"),
            DistributionKind::Uniform => self.rng.gen_range(min..=max),
            DistributionKind::Zipfian => self.generate_zipf(min, max),
            DistributionKind::Skewed => self.generate_skewed(min, max),
        }
    }

    /// Zipf-distributed rank mapped onto the range bottom. The number of
    /// ranks is capped so the low ranks keep a meaningful probability mass
    /// even when the caller requests the full integer range.
    fn generate_zipf(&mut self, min: i32, max: i32) -> i32 {
        let span = (max as i64 - min as i64 + 1).min(ZIPF_DOMAIN_CAP as i64) as u64;
        let stale = match &self.zipf {
            Some(cache) => cache.min != min || cache.max != max,
            None => true,
        };
        if stale {
            let zipf =
                Zipf::new(span, 1.0).expect("span >= 1 and exponent 1.0 are valid");
            self.zipf = Some(ZipfCache { min, max, zipf });
        }
        let cache = self.zipf.as_ref().expect("populated above");
        let rank = cache.zipf.sample(&mut self.rng).round() as i64;
        (min as i64 + rank - 1) as i32
    }

    /// Locality sequence: draws cluster inside a moving hot window. One in
    /// `SKEW_FACTOR` draws relocates the window uniformly.
    fn generate_skewed(&mut self, min: i32, max: i32) -> i32 {
        let relocate = match self.peak {
            None => true,
            Some(_) => self.rng.gen_range(0..SKEW_FACTOR) == 0,
        };
        if relocate {
            self.peak = Some(self.rng.gen_range(min..=max));
        }
        let peak = self.peak.expect("set above") as i64;
        let lo = (peak - PEAK_WIDTH / 2).max(min as i64) as i32;
        let hi = (peak + PEAK_WIDTH / 2).min(max as i64) as i32;
        self.rng.gen_range(lo..=hi)
    }
}
