//! Parameter-space expansion for benchmark runs.
//!
//! The driver describes the space it wants to cover (base size, number of
//! doublings, experiment sizing, seed range) as a [`RangeConfig`]; expansion
//! yields the concrete [`RunParams`] tuples, one fixture instantiation each.

use serde::{Deserialize, Serialize};

/// One concrete benchmark run: fixture setup receives exactly this tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// Number of elements inserted into the container before measurement.
    pub fixed_count: usize,
    /// Length of every requested experiment stream.
    pub experiment_count: usize,
    /// Seed for the run's single pseudo-random engine.
    pub seed: u64,
}

/// How the experiment-stream length is derived from the fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentSize {
    /// Same stream length for every fixed size.
    Absolute(u64),
    /// Stream length is `round(fixed_count * fraction)`.
    Relative(f64),
}

impl ExperimentSize {
    fn count_for(&self, fixed_count: u64) -> usize {
        match *self {
            ExperimentSize::Absolute(n) => n as usize,
            ExperimentSize::Relative(fraction) => {
                (fixed_count as f64 * fraction).round() as usize
            }
        }
    }
}

/// The parameter space one driver invocation covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Smallest fixed-population size.
    pub base_size: u64,
    /// Number of size doublings, starting at `base_size`.
    pub doublings: u32,
    /// Experiment-stream sizing rule.
    pub experiment_size: ExperimentSize,
    /// First seed (inclusive).
    pub seed_start: u64,
    /// Number of seeds.
    pub seed_count: u64,
}

impl RangeConfig {
    /// Expand into the Cartesian product
    /// `{base_size << k : k in [0, doublings)} x [seed_start, seed_start + seed_count)`,
    /// ordered by increasing size, then seed.
    pub fn expand(&self) -> Vec<RunParams> {
        let mut runs =
            Vec::with_capacity(self.doublings as usize * self.seed_count as usize);
        for doubling in 0..self.doublings {
            let fixed_count = self.base_size << doubling;
            let experiment_count = self.experiment_size.count_for(fixed_count);
            for seed in self.seed_start..self.seed_start + self.seed_count {
                runs.push(RunParams {
                    fixed_count: fixed_count as usize,
                    experiment_count,
                    seed,
                });
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_absolute_sizes() {
        let range = RangeConfig {
            base_size: 2048,
            doublings: 3,
            experiment_size: ExperimentSize::Absolute(1000),
            seed_start: 4,
            seed_count: 2,
        };

        let runs = range.expand();
        assert_eq!(runs.len(), 6);
        assert_eq!(
            runs[0],
            RunParams {
                fixed_count: 2048,
                experiment_count: 1000,
                seed: 4
            }
        );
        assert_eq!(
            runs[1],
            RunParams {
                fixed_count: 2048,
                experiment_count: 1000,
                seed: 5
            }
        );
        assert_eq!(runs[4].fixed_count, 8192);
        assert!(runs.iter().all(|r| r.experiment_count == 1000));
    }

    #[test]
    fn test_expand_is_ordered_by_size_then_seed() {
        let range = RangeConfig {
            base_size: 16,
            doublings: 4,
            experiment_size: ExperimentSize::Absolute(8),
            seed_start: 0,
            seed_count: 3,
        };

        let runs = range.expand();
        for pair in runs.windows(2) {
            assert!(
                pair[0].fixed_count < pair[1].fixed_count
                    || (pair[0].fixed_count == pair[1].fixed_count
                        && pair[0].seed < pair[1].seed)
            );
        }
    }

    #[test]
    fn test_expand_relative_sizes() {
        let range = RangeConfig {
            base_size: 1000,
            doublings: 2,
            experiment_size: ExperimentSize::Relative(0.25),
            seed_start: 7,
            seed_count: 1,
        };

        let runs = range.expand();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].experiment_count, 250);
        assert_eq!(runs[1].experiment_count, 500);
    }
}
