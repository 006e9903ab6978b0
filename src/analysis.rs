use serde::Serialize;

use crate::algorithm::{cluster, Clustering};
use crate::config::KMeansConfig;
use crate::describe::{describe_segments, SegmentDescriber};
use crate::error::{DescribeError, Result, SegmentError};
use crate::parse::parse_dataset;
use crate::point::Headers;

/// Result of one analyze request.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub headers: Headers,
    pub clustering: Clustering,
    /// Failure here leaves `clustering` intact.
    pub descriptions: std::result::Result<Vec<String>, DescribeError>,
}

/// Parse, cluster, then describe. Only parse and parameter errors abort the
/// pipeline.
pub fn analyze<D: SegmentDescriber + ?Sized>(
    text: &str,
    k: usize,
    config: &KMeansConfig,
    describer: &D,
) -> Result<Analysis> {
    let dataset = parse_dataset(text)?;
    if dataset.points.len() < k {
        return Err(SegmentError::invalid_parameter(
            "The number of data points must be greater than or equal to the number of clusters (K).",
        ));
    }

    let clustering = cluster(&dataset.points, k, config)?;

    let descriptions = describe_segments(describer, &clustering.clusters, &dataset.headers);
    if let Err(err) = &descriptions {
        log::warn!("{}", err);
    }

    Ok(Analysis {
        headers: dataset.headers,
        clustering,
        descriptions,
    })
}

/// Serializable view of an [`Analysis`].
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub headers: &'a Headers,
    #[serde(flatten)]
    pub clustering: &'a Clustering,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_error: Option<String>,
}

impl Analysis {
    pub fn report(&self) -> AnalysisReport<'_> {
        let (descriptions, description_error) = match &self.descriptions {
            Ok(descriptions) => (Some(descriptions.as_slice()), None),
            Err(err) => (None, Some(err.to_string())),
        };
        AnalysisReport {
            headers: &self.headers,
            clustering: &self.clustering,
            descriptions,
            description_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::ProfileDescriber;
    use crate::point::Cluster;

    struct FailingDescriber;

    impl SegmentDescriber for FailingDescriber {
        fn describe(
            &self,
            _: &[Cluster],
            _: &Headers,
        ) -> std::result::Result<Vec<String>, DescribeError> {
            Err(DescribeError::Service("service unavailable".to_string()))
        }
    }

    const DATA: &str = "income,score\n1,1\n1,2\n9,9\n9,8\n";

    #[test]
    fn full_pipeline() {
        let analysis = analyze(DATA, 2, &KMeansConfig::default(), &ProfileDescriber).unwrap();
        assert_eq!(analysis.headers, Headers::new("income", "score"));
        assert_eq!(analysis.clustering.k(), 2);
        assert_eq!(analysis.descriptions.as_ref().unwrap().len(), 2);

        let json = serde_json::to_value(analysis.report()).unwrap();
        assert_eq!(json["headers"]["x"], "income");
        assert_eq!(json["status"], "converged");
        assert_eq!(json["clusters"].as_array().unwrap().len(), 2);
        assert!(json.get("description_error").is_none());
    }

    #[test]
    fn description_failure_keeps_clusters() {
        let analysis = analyze(DATA, 2, &KMeansConfig::default(), &FailingDescriber).unwrap();
        assert_eq!(analysis.clustering.k(), 2);
        assert!(analysis.descriptions.is_err());

        let json = serde_json::to_value(analysis.report()).unwrap();
        assert_eq!(json["description_error"], "Segment description failed: service unavailable");
    }

    #[test]
    fn too_few_points_stops_the_pipeline() {
        let text = "x,y\n1,1\n2,2\n3,3";
        let err = analyze(text, 5, &KMeansConfig::default(), &ProfileDescriber).unwrap_err();
        assert!(matches!(err, SegmentError::InvalidParameter { .. }));
    }
}
