use segmenter::{
    analyze, Cluster, DescribeError, Headers, KMeansConfig, ProfileDescriber, SegmentDescriber,
    SegmentError,
};

mod helpers;
use helpers::MALL_CUSTOMERS;

struct EchoDescriber;

impl SegmentDescriber for EchoDescriber {
    fn describe(
        &self,
        clusters: &[Cluster],
        headers: &Headers,
    ) -> Result<Vec<String>, DescribeError> {
        Ok(clusters
            .iter()
            .map(|c| format!("{}={:.0} {}={:.0}", headers.x, c.centroid.x, headers.y, c.centroid.y))
            .collect())
    }
}

#[test]
fn mall_customers_into_five_segments() {
    let analysis = analyze(MALL_CUSTOMERS, 5, &KMeansConfig::default(), &ProfileDescriber).unwrap();
    assert_eq!(analysis.headers, Headers::new("Annual Income (k$)", "Spending Score (1-100)"));
    assert_eq!(analysis.clustering.k(), 5);
    assert_eq!(analysis.clustering.clusters.iter().map(Cluster::len).sum::<usize>(), 58);

    let descriptions = analysis.descriptions.unwrap();
    assert_eq!(descriptions.len(), 5);
    for (idx, description) in descriptions.iter().enumerate() {
        assert!(description.starts_with(&format!("Segment {}:", idx + 1)));
    }
}

#[test]
fn descriptions_arrive_in_cluster_order() {
    let analysis = analyze(MALL_CUSTOMERS, 3, &KMeansConfig::default(), &EchoDescriber).unwrap();
    let descriptions = analysis.descriptions.as_ref().unwrap();
    for (cluster, description) in analysis.clustering.clusters.iter().zip(descriptions.iter()) {
        assert!(description.starts_with(&format!("Annual Income (k$)={:.0}", cluster.centroid.x)));
    }
}

#[test]
fn malformed_text_never_reaches_clustering() {
    let err = analyze("a,b\n1,2\nx,3", 1, &KMeansConfig::default(), &ProfileDescriber).unwrap_err();
    assert_eq!(err, SegmentError::malformed_input(Some(3), "Non-numeric data found on line 3."));
}
