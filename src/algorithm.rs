use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assignment::{assign_labels, group_clusters};
use crate::config::{KMeansConfig, SeedingStrategy};
use crate::convergence::{ConvergenceChecker, RunState, RunStatus};
use crate::error::{Result, SegmentError};
use crate::inertia::calculate_inertia;
use crate::initialization::{seed_centroids, validate_k};
use crate::point::{Cluster, ClusteredPoint, Point};
use crate::update::update_centroids;

/// Outcome of a clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clustering {
    /// Exactly K clusters, index-aligned with the seeded centroids.
    pub clusters: Vec<Cluster>,
    /// Cluster index of every input point, in input order.
    pub labels: Vec<usize>,
    pub status: RunStatus,
    /// Number of assign+update passes performed.
    pub iterations: usize,
    /// Total within-cluster squared distance of the final partition.
    pub inertia: f64,
    /// Inertia after each pass. Non-increasing.
    pub inertia_history: Vec<f64>,
    /// Centroids after each pass, only kept when `record_history` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid_history: Option<Vec<Vec<Point>>>,
}

impl Clustering {
    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    pub fn converged(&self) -> bool {
        self.status == RunStatus::Converged
    }

    pub fn centroids(&self) -> Vec<Point> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }

    pub fn clustered_points<'a>(
        &'a self,
        data: &'a [Point],
    ) -> impl Iterator<Item = ClusteredPoint> + 'a {
        data.iter()
            .zip(self.labels.iter())
            .map(|(&point, &cluster)| ClusteredPoint { point, cluster })
    }
}

/// Partitions `data` into `k` clusters with Lloyd's algorithm.
///
/// Fails only with `InvalidParameter`, before any iteration runs. When
/// `config.n_init > 1` the independent runs execute in parallel and the one
/// with the lowest inertia is returned (ties go to the earliest run).
pub fn cluster(data: &[Point], k: usize, config: &KMeansConfig) -> Result<Clustering> {
    config.validate()?;
    validate_k(data, k)?;

    log::info!(
        "Starting KMeans: {} points, k = {}, seeding {:?}, {} initialization(s)",
        data.len(),
        k,
        config.seeding,
        config.n_init
    );

    if config.n_init == 1 {
        return kmeans_single(data, k, config, &config.seeding);
    }

    let runs = (0..config.n_init)
        .into_par_iter()
        .map(|run| kmeans_single(data, k, config, &config.seeding.offset_seed(run as u64)))
        .collect::<Result<Vec<_>>>()?;

    let inertia_per_initialization: Vec<f64> = runs.iter().map(|r| r.inertia).collect();
    log::info!("Inertia per initialization: {:?}", inertia_per_initialization);

    let (best_index, best) = runs
        .into_iter()
        .enumerate()
        .reduce(|best, candidate| {
            if candidate.1.inertia < best.1.inertia {
                candidate
            } else {
                best
            }
        })
        .ok_or_else(|| SegmentError::invalid_parameter("n_init must be at least 1"))?;
    log::info!(
        "Best initialization is index #{} with {} inertia",
        best_index,
        best.inertia
    );

    Ok(best)
}

pub fn kmeans_single(
    data: &[Point],
    k: usize,
    config: &KMeansConfig,
    seeding: &SeedingStrategy,
) -> Result<Clustering> {
    let mut checker = ConvergenceChecker::new(config.tolerance, config.max_iterations);
    let mut centroids = seed_centroids(data, k, seeding)?;
    log::info!("initialized centroids with {:?}", seeding);
    checker.start();

    let mut labels;
    let mut inertia_history = Vec::new();
    let mut centroid_history = config.record_history.then(Vec::new);

    loop {
        labels = assign_labels(data, &centroids);
        let next = update_centroids(data, &labels, &centroids, config.empty_cluster_policy);

        let inertia = calculate_inertia(data, &next, &labels);
        log::debug!("inertia {}", inertia);
        inertia_history.push(inertia);
        if let Some(history) = centroid_history.as_mut() {
            history.push(next.clone());
        }

        let state = checker.check(&centroids, &next);
        centroids = next;

        if let RunState::Iterating { iteration } = state {
            if iteration % 10 == 0 {
                log::info!("Finished iteration {}", iteration);
            }
        }
        if state.is_terminal() {
            break;
        }
    }

    let status = checker.status().unwrap_or(RunStatus::MaxIterationsReached);
    match status {
        RunStatus::Converged => log::info!("Converged after {} iterations", inertia_history.len()),
        RunStatus::MaxIterationsReached => log::warn!(
            "Stopped at the iteration cap ({}) without converging",
            inertia_history.len()
        ),
    }
    let iterations = inertia_history.len();
    let inertia = calculate_inertia(data, &centroids, &labels);
    let clusters = group_clusters(data, &labels, &centroids);

    Ok(Clustering {
        clusters,
        labels,
        status,
        iterations,
        inertia,
        inertia_history,
        centroid_history,
    })
}
