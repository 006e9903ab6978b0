use itertools::Itertools;
use rand::{
    distributions::{Distribution, WeightedIndex},
    rngs::StdRng,
    seq::index,
    Rng, SeedableRng,
};

use crate::config::SeedingStrategy;
use crate::distance::squared_euclidian_distance;
use crate::error::{Result, SegmentError};
use crate::point::Point;

/// Checks the K/point-count relationship. Runs before any clustering work.
pub fn validate_k(data: &[Point], k: usize) -> Result<()> {
    if data.is_empty() {
        return Err(SegmentError::invalid_parameter(
            "at least one data point is required",
        ));
    }
    if k == 0 {
        return Err(SegmentError::invalid_parameter(
            "number of clusters (K) must be at least 1",
        ));
    }
    if k > data.len() {
        return Err(SegmentError::invalid_parameter(format!(
            "number of clusters (K = {}) cannot be greater than the number of data points ({})",
            k,
            data.len()
        )));
    }
    Ok(())
}

/// Picks `k` initial centroids from `data`, each one a distinct input point.
pub fn seed_centroids(data: &[Point], k: usize, strategy: &SeedingStrategy) -> Result<Vec<Point>> {
    validate_k(data, k)?;

    let indices = match *strategy {
        SeedingStrategy::Strided => strided_indices(data.len(), k),
        SeedingStrategy::Random { seed } => {
            let mut rng = make_rng(seed);
            index::sample(&mut rng, data.len(), k).into_vec()
        }
        SeedingStrategy::KMeansPlusPlus { seed } => {
            let mut rng = make_rng(seed);
            kmeans_plusplus_indices(data, k, &mut rng)
        }
    };
    log::debug!("seeded centroids from indices {:?}", indices);

    Ok(indices.into_iter().map(|idx| data[idx]).collect_vec())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `i * n / k` for `i` in `0..k`; distinct because `n >= k`.
fn strided_indices(n: usize, k: usize) -> Vec<usize> {
    (0..k).map(|i| i * n / k).collect_vec()
}

fn kmeans_plusplus_indices<R: Rng>(data: &[Point], k: usize, rng: &mut R) -> Vec<usize> {
    let mut chosen = Vec::with_capacity(k);
    let mut taken = vec![false; data.len()];

    // Randomly select the first centroid
    let first_idx = rng.gen_range(0..data.len());
    chosen.push(first_idx);
    taken[first_idx] = true;

    let mut min_distances = vec![f64::MAX; data.len()];

    for _ in 1..k {
        let last = data[*chosen.last().unwrap_or(&first_idx)];
        for (idx, min_dist) in min_distances.iter_mut().enumerate() {
            *min_dist = if taken[idx] {
                0.0
            } else {
                min_dist.min(squared_euclidian_distance(&data[idx], &last))
            };
        }

        // Every remaining point may coincide with a chosen one; fall back to the
        // lowest unchosen index so the seeds stay distinct.
        let next_idx = match WeightedIndex::new(&min_distances) {
            Ok(dist) => dist.sample(rng),
            Err(_) => taken.iter().position(|&t| !t).unwrap_or(0),
        };
        chosen.push(next_idx);
        taken[next_idx] = true;
    }

    chosen
}
