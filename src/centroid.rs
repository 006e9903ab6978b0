use std::fmt::Debug;

use crate::point::Point;

/// Running mean of the points assigned to one cluster during an update pass.
pub trait Centroid: Sized + Clone + Debug + Default {
    fn update_centroid(&mut self, data_point: &Point);
    /// Mean of everything accumulated, or `None` if nothing was.
    fn finalize_centroid(&self) -> Option<Point>;
}

/// Keeps the mean itself rather than a sum, so it stays finite for any finite
/// input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CentroidSum {
    mean_x: f64,
    mean_y: f64,
    count: usize,
}

impl CentroidSum {
    pub fn count(&self) -> usize {
        self.count
    }
}

/// `mean + (value - mean) / n` with both terms divided first, so the
/// difference cannot overflow.
fn step_mean(mean: f64, value: f64, n: f64) -> f64 {
    mean + (value / n - mean / n)
}

impl Centroid for CentroidSum {
    fn update_centroid(&mut self, data_point: &Point) {
        self.count += 1;
        let n = self.count as f64;
        self.mean_x = step_mean(self.mean_x, data_point.x, n);
        self.mean_y = step_mean(self.mean_y, data_point.y, n);
    }

    fn finalize_centroid(&self) -> Option<Point> {
        if self.count == 0 {
            return None;
        }
        Some(Point::new(self.mean_x, self.mean_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_accumulated_points() {
        let mut sum = CentroidSum::default();
        for p in [Point::new(1.0, 1.0), Point::new(3.0, 2.0), Point::new(2.0, 6.0)] {
            sum.update_centroid(&p);
        }
        assert_eq!(sum.count(), 3);
        assert_eq!(sum.finalize_centroid(), Some(Point::new(2.0, 3.0)));
    }

    #[test]
    fn empty_sum_has_no_mean() {
        assert_eq!(CentroidSum::default().finalize_centroid(), None);
    }

    #[test]
    fn mean_near_f64_max_stays_finite() {
        let mut sum = CentroidSum::default();
        sum.update_centroid(&Point::new(1e308, f64::MAX));
        sum.update_centroid(&Point::new(1.5e308, f64::MAX));
        let mean = sum.finalize_centroid().unwrap();
        assert!(mean.x > 1.24e308 && mean.x < 1.26e308);
        assert_eq!(mean.y, f64::MAX);

        let mut sum = CentroidSum::default();
        sum.update_centroid(&Point::new(f64::MAX, -f64::MAX));
        sum.update_centroid(&Point::new(-f64::MAX, f64::MAX));
        assert_eq!(sum.finalize_centroid(), Some(Point::new(0.0, 0.0)));
    }
}
