//! Human-readable summaries of finished clusters.
//!
//! A describer only ever sees finalized clusters, and its failures are kept
//! apart from the clustering result.

use std::fmt::Write;

use itertools::Itertools;

use crate::error::DescribeError;
use crate::point::{Cluster, Headers};

/// Produces one description per cluster, in cluster order.
pub trait SegmentDescriber {
    fn describe(
        &self,
        clusters: &[Cluster],
        headers: &Headers,
    ) -> Result<Vec<String>, DescribeError>;
}

/// Runs `describer` and checks it answered once per cluster.
pub fn describe_segments<D: SegmentDescriber + ?Sized>(
    describer: &D,
    clusters: &[Cluster],
    headers: &Headers,
) -> Result<Vec<String>, DescribeError> {
    let descriptions = describer.describe(clusters, headers)?;
    if descriptions.len() != clusters.len() {
        return Err(DescribeError::CountMismatch {
            expected: clusters.len(),
            actual: descriptions.len(),
        });
    }
    Ok(descriptions)
}

/// Request text for a generative text service.
pub fn summary_prompt(clusters: &[Cluster], headers: &Headers) -> String {
    let mut prompt = format!(
        "Customer data was segmented into {} groups using the columns \"{}\" and \"{}\".\n\
         For each segment below, write a short marketing persona. Answer with one \
         description per segment, in the same order.\n",
        clusters.len(),
        headers.x,
        headers.y
    );
    for (idx, cluster) in clusters.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "Segment {}: {} members, average {} = {:.2}, average {} = {:.2}",
            idx + 1,
            cluster.len(),
            headers.x,
            cluster.centroid.x,
            headers.y,
            cluster.centroid.y
        );
    }
    prompt
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Moderate,
    High,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Moderate => "moderate",
            Level::High => "high",
        }
    }

    /// Where `value` sits within `[min, max]`, split into thirds.
    fn classify(value: f64, min: f64, max: f64) -> Self {
        let span = max - min;
        if span <= 0.0 {
            return Level::Moderate;
        }
        let t = (value - min) / span;
        if t < 1.0 / 3.0 {
            Level::Low
        } else if t > 2.0 / 3.0 {
            Level::High
        } else {
            Level::Moderate
        }
    }
}

/// Offline describer: ranks each centroid against the other segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileDescriber;

impl SegmentDescriber for ProfileDescriber {
    fn describe(
        &self,
        clusters: &[Cluster],
        headers: &Headers,
    ) -> Result<Vec<String>, DescribeError> {
        let occupied = clusters.iter().filter(|c| !c.is_empty()).collect_vec();
        let (min_x, max_x) = bounds(occupied.iter().map(|c| c.centroid.x));
        let (min_y, max_y) = bounds(occupied.iter().map(|c| c.centroid.y));

        let descriptions = clusters
            .iter()
            .enumerate()
            .map(|(idx, cluster)| {
                if cluster.is_empty() {
                    return format!("Segment {}: no customers fall into this segment.", idx + 1);
                }
                let x_level = Level::classify(cluster.centroid.x, min_x, max_x);
                let y_level = Level::classify(cluster.centroid.y, min_y, max_y);
                format!(
                    "Segment {}: {} customer{} with {} {} and {} {} (average {:.1}, {:.1}).",
                    idx + 1,
                    cluster.len(),
                    if cluster.len() == 1 { "" } else { "s" },
                    x_level.as_str(),
                    headers.x,
                    y_level.as_str(),
                    headers.y,
                    cluster.centroid.x,
                    cluster.centroid.y
                )
            })
            .collect();
        Ok(descriptions)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
