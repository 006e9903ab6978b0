use std::cmp::Ordering;

use crate::centroid::{Centroid, CentroidSum};
use crate::config::EmptyClusterPolicy;
use crate::distance::scaled_distance;
use crate::point::Point;

/// Recomputes every centroid as the mean of its assigned points.
///
/// The output is index-aligned with `previous`. Clusters with no points are
/// handled according to `policy`.
pub fn update_centroids(
    data: &[Point],
    labels: &[usize],
    previous: &[Point],
    policy: EmptyClusterPolicy,
) -> Vec<Point> {
    let mut sums = vec![CentroidSum::default(); previous.len()];
    for (point, &label) in data.iter().zip(labels.iter()) {
        sums[label].update_centroid(point);
    }

    let mut centroids: Vec<Option<Point>> =
        sums.iter().map(|sum| sum.finalize_centroid()).collect();
    let empty = centroids.iter().filter(|c| c.is_none()).count();
    if empty > 0 {
        log::warn!("{} cluster(s) received no points", empty);
    }

    if policy == EmptyClusterPolicy::ReseedFarthest && empty > 0 {
        // Farthest first; ties broken by input order.
        let mut candidates: Vec<(usize, f64)> = data
            .iter()
            .zip(labels.iter())
            .enumerate()
            .map(|(idx, (point, &label))| (idx, scaled_distance(point, &previous[label])))
            .collect();
        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        let mut candidates = candidates.into_iter();

        for centroid in centroids.iter_mut().filter(|c| c.is_none()) {
            if let Some((idx, _)) = candidates.next() {
                *centroid = Some(data[idx]);
            }
        }
    }

    centroids
        .into_iter()
        .zip(previous.iter())
        .map(|(centroid, &prev)| centroid.unwrap_or(prev))
        .collect()
}
