use crate::distance::{scaled_distance, squared_euclidian_distance};
use crate::point::{Cluster, ClusteredPoint, Point};

/// Index of the nearest centroid. Ties go to the lowest index.
pub fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let (best_idx, best_distance) = argmin(centroids, |c| squared_euclidian_distance(point, c));
    if best_distance.is_finite() {
        return best_idx;
    }
    // Every squared distance overflowed; rank on the overflow-safe scale.
    argmin(centroids, |c| scaled_distance(point, c)).0
}

fn argmin(centroids: &[Point], distance: impl Fn(&Point) -> f64) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_distance = f64::INFINITY;
    for (idx, centroid) in centroids.iter().enumerate() {
        let d = distance(centroid);
        if d < best_distance {
            best_distance = d;
            best_idx = idx;
        }
    }
    (best_idx, best_distance)
}

/// One label per input point, in input order.
pub fn assign_labels(data: &[Point], centroids: &[Point]) -> Vec<usize> {
    data.iter()
        .map(|point| nearest_centroid(point, centroids))
        .collect()
}

pub fn assign(data: &[Point], centroids: &[Point]) -> Vec<ClusteredPoint> {
    data.iter()
        .map(|&point| ClusteredPoint {
            point,
            cluster: nearest_centroid(&point, centroids),
        })
        .collect()
}

/// Groups points by label into exactly `centroids.len()` clusters, keeping
/// input order inside each cluster.
pub fn group_clusters(data: &[Point], labels: &[usize], centroids: &[Point]) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = centroids
        .iter()
        .map(|&centroid| Cluster {
            centroid,
            points: Vec::new(),
        })
        .collect();
    for (point, &label) in data.iter().zip(labels.iter()) {
        clusters[label].points.push(*point);
    }
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equidistant_point_goes_to_lowest_index() {
        let centroids = [Point::new(-1.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        assert_eq!(nearest_centroid(&Point::new(0.0, 0.0), &centroids), 0);
        let centroids = [Point::new(5.0, 5.0), Point::new(1.0, 0.0), Point::new(-1.0, 0.0)];
        assert_eq!(nearest_centroid(&Point::new(0.0, 0.0), &centroids), 1);
    }

    #[test]
    fn far_apart_points_still_find_their_nearest_centroid() {
        let centroids = [Point::new(-1e200, 0.0), Point::new(1e200, 0.0)];
        assert_eq!(nearest_centroid(&Point::new(3e200, 0.0), &centroids), 1);
        assert_eq!(nearest_centroid(&Point::new(-3e200, 0.0), &centroids), 0);

        let centroids = [Point::new(-f64::MAX, 0.0), Point::new(f64::MAX, 0.0)];
        assert_eq!(nearest_centroid(&Point::new(f64::MAX, f64::MAX), &centroids), 1);
    }

    #[test]
    fn grouping_keeps_every_cluster() {
        let data = [Point::new(0.0, 0.0), Point::new(0.5, 0.0), Point::new(9.0, 9.0)];
        let centroids = [Point::new(0.0, 0.0), Point::new(100.0, 100.0), Point::new(9.0, 9.0)];
        let clustered = assign(&data, &centroids);
        assert_eq!(clustered.iter().map(|cp| cp.cluster).collect::<Vec<_>>(), vec![0, 0, 2]);

        let labels = assign_labels(&data, &centroids);
        let clusters = group_clusters(&data, &labels, &centroids);
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters[0].points, vec![data[0], data[1]]);
        assert!(clusters[1].is_empty());
        assert_eq!(clusters[1].centroid, centroids[1]);
        assert_eq!(clusters[2].points, vec![data[2]]);
    }
}
