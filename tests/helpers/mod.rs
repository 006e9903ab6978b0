// tests/helpers/mod.rs
#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use segmenter::Point;

/// Gaussian-ish blobs around `centers`, `per_blob` points each, reproducible by `seed`.
pub fn blobs(centers: &[(f64, f64)], per_blob: usize, spread: f64, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(centers.len() * per_blob);
    for _ in 0..per_blob {
        for &(cx, cy) in centers {
            // sum of uniforms, close enough to normal for clustering tests
            let dx: f64 = (0..4).map(|_| rng.gen_range(-1.0f64..1.0)).sum::<f64>() * spread / 2.0;
            let dy: f64 = (0..4).map(|_| rng.gen_range(-1.0f64..1.0)).sum::<f64>() * spread / 2.0;
            points.push(Point::new(cx + dx, cy + dy));
        }
    }
    points
}

/// Points sorted by (x, y), for comparing point multisets.
pub fn sorted(points: impl IntoIterator<Item = Point>) -> Vec<Point> {
    let mut points: Vec<Point> = points.into_iter().collect();
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points
}

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn points(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&p| Point::from(p)).collect()
}

/// The sample customer table the CLI is usually fed.
pub const MALL_CUSTOMERS: &str = "Annual Income (k$),Spending Score (1-100)
15,39
15,81
16,6
16,77
17,40
17,76
18,6
18,94
19,3
19,72
20,14
20,77
21,35
23,98
24,73
25,5
28,14
28,32
29,77
30,4
33,92
35,35
38,91
39,1
40,42
42,52
43,36
46,65
48,59
49,3
54,49
54,57
59,40
60,55
62,75
63,7
65,58
67,43
69,91
70,29
71,75
73,88
75,5
76,37
78,22
78,76
81,93
85,15
86,95
87,75
93,90
98,15
101,68
103,85
113,91
120,16
126,74
137,83";
