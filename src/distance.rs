use crate::point::Point;

/// Squared Euclidean distance. Ranks the same as Euclidean distance, so the
/// square root is never taken. Overflows to `inf` once a coordinate gap
/// passes roughly `1.34e154`; see [`scaled_distance`].
pub fn squared_euclidian_distance(us: &Point, them: &Point) -> f64 {
    let dx = us.x - them.x;
    let dy = us.y - them.y;
    dx * dx + dy * dy
}

pub fn euclidian_distance(us: &Point, them: &Point) -> f64 {
    (us.x - them.x).hypot(us.y - them.y)
}

/// A quarter of the Euclidean distance, finite for any pair of finite points.
///
/// Ranks the same as [`squared_euclidian_distance`] and is used where that
/// overflows.
pub fn scaled_distance(us: &Point, them: &Point) -> f64 {
    let dx = us.x * 0.25 - them.x * 0.25;
    let dy = us.y * 0.25 - them.y * 0.25;
    dx.hypot(dy)
}
