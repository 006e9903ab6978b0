use serde::{Deserialize, Serialize};

use crate::error::{Result, SegmentError};

pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// How the initial centroids are picked from the input points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SeedingStrategy {
    /// Points at indices `i * n / k`. Fully deterministic.
    #[default]
    Strided,
    /// K distinct points sampled uniformly. `seed: None` draws from entropy.
    Random { seed: Option<u64> },
    /// k-means++ D² weighting over distinct points.
    KMeansPlusPlus { seed: Option<u64> },
}

impl SeedingStrategy {
    /// Same strategy with its seed offset by `offset`, used to vary restarts.
    pub fn offset_seed(&self, offset: u64) -> Self {
        match *self {
            SeedingStrategy::Strided => SeedingStrategy::Strided,
            SeedingStrategy::Random { seed } => SeedingStrategy::Random {
                seed: seed.map(|s| s.wrapping_add(offset)),
            },
            SeedingStrategy::KMeansPlusPlus { seed } => SeedingStrategy::KMeansPlusPlus {
                seed: seed.map(|s| s.wrapping_add(offset)),
            },
        }
    }
}

/// What happens to a cluster that received no points in an assignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyClusterPolicy {
    /// Keep the centroid from the previous iteration.
    #[default]
    RetainPrevious,
    /// Move the centroid onto the point farthest from its own centroid.
    ReseedFarthest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KMeansConfig {
    /// Cap on assign+update passes.
    pub max_iterations: usize,
    /// A run converges once no centroid moves farther than this.
    pub tolerance: f64,
    pub seeding: SeedingStrategy,
    pub empty_cluster_policy: EmptyClusterPolicy,
    /// Number of independent initializations; the lowest-inertia run wins.
    pub n_init: usize,
    /// Keep a snapshot of the centroids after every pass.
    pub record_history: bool,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            seeding: SeedingStrategy::default(),
            empty_cluster_policy: EmptyClusterPolicy::default(),
            n_init: 1,
            record_history: false,
        }
    }
}

impl KMeansConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_seeding(mut self, seeding: SeedingStrategy) -> Self {
        self.seeding = seeding;
        self
    }

    pub fn with_empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.empty_cluster_policy = policy;
        self
    }

    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    pub fn with_record_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(SegmentError::invalid_parameter(
                "max_iterations must be at least 1",
            ));
        }
        if self.n_init == 0 {
            return Err(SegmentError::invalid_parameter("n_init must be at least 1"));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(SegmentError::invalid_parameter(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
