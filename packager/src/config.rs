use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Configuration of the packagers
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PackagerConfig {
    /// Search strategy used to fill a single container
    pub strategy: Strategy,
    /// Number of permutation slices searched in parallel by the brute-force strategy
    pub n_workers: usize,
    /// Number of search steps between two consecutive reads of the clock
    pub checkpoints_per_deadline_check: usize,
    /// Time limit per call in milliseconds. If undefined, the packagers run until completion
    pub time_limit_ms: Option<u64>,
    /// Maximum number of containers in list mode
    pub container_limit: usize,
    /// Candidate selection policy of the largest-area-fit-first strategy
    pub laff_policy: LaffPolicy,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Exhaustive search over all item orderings and rotations
    BruteForce,
    /// Greedy, level-by-level placement
    #[default]
    LargestAreaFitFirst,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LaffPolicy {
    /// Prefer the largest footprint, then the largest volume
    #[default]
    LargestArea,
    /// Open levels with the largest footprint, then fill them by largest volume
    LargestVolume,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            n_workers: 4,
            checkpoints_per_deadline_check: 64,
            time_limit_ms: None,
            container_limit: 8,
            laff_policy: LaffPolicy::default(),
        }
    }
}

impl PackagerConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.n_workers >= 1, "at least one worker is required");
        ensure!(
            self.checkpoints_per_deadline_check >= 1,
            "checkpoints_per_deadline_check must be at least 1"
        );
        ensure!(self.container_limit >= 1, "container_limit must be at least 1");
        Ok(())
    }
}
