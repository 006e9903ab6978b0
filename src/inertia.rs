use crate::distance::squared_euclidian_distance;
use crate::point::Point;

/// Total within-cluster squared distance of `data` under `labels`.
pub fn calculate_inertia(data: &[Point], centroids: &[Point], labels: &[usize]) -> f64 {
    data.iter()
        .zip(labels.iter())
        .map(|(point, &label)| squared_euclidian_distance(point, &centroids[label]))
        .sum()
}
