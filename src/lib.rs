//! K-means segmentation of two-column numeric data.
//!
//! [`cluster`] is a pure function of its inputs: seed K centroids, alternate
//! assignment and centroid update until the centroids stop moving or the
//! iteration cap is hit, and return exactly K clusters. [`analyze`] wraps it
//! with the CSV parser and a [`SegmentDescriber`].

pub mod algorithm;
pub mod analysis;
pub mod assignment;
pub mod centroid;
pub mod config;
pub mod convergence;
pub mod describe;
pub mod distance;
pub mod error;
pub mod inertia;
pub mod initialization;
pub mod logger;
pub mod parse;
pub mod point;
pub mod update;

pub use algorithm::{cluster, Clustering};
pub use analysis::{analyze, Analysis};
pub use config::{EmptyClusterPolicy, KMeansConfig, SeedingStrategy};
pub use convergence::RunStatus;
pub use describe::{ProfileDescriber, SegmentDescriber};
pub use error::{DescribeError, Result, SegmentError};
pub use parse::{parse_dataset, Dataset};
pub use point::{Cluster, ClusteredPoint, Headers, Point};
