//! Built-in sample catalog for running without a catalog file

use tv_data::{DataSource, Dataset, DatasetRef};

/// A small monitoring-flavored catalog
pub fn demo_sources() -> Vec<DataSource> {
    vec![
        DataSource {
            id: "node-a".to_string(),
            name: "Node A".to_string(),
            features: vec!["ldev_map".to_string()],
            datasets: vec![
                Dataset {
                    id: "cpu".to_string(),
                    name: "CPU utilization".to_string(),
                    source: "node-a".to_string(),
                    available_x_range: [1_600_000_000_000, 1_600_086_400_000],
                    variants: None,
                },
                Dataset {
                    id: "latency".to_string(),
                    name: "Request latency".to_string(),
                    source: "node-a".to_string(),
                    available_x_range: [1_600_000_000_000, 1_600_043_200_000],
                    variants: Some(vec!["p50".to_string(), "p95".to_string(), "p99".to_string()]),
                },
            ],
        },
        DataSource {
            id: "node-b".to_string(),
            name: "Node B".to_string(),
            features: Vec::new(),
            datasets: vec![Dataset {
                id: "cpu".to_string(),
                name: "CPU utilization".to_string(),
                source: "node-b".to_string(),
                available_x_range: [1_599_990_000_000, 1_600_060_000_000],
                variants: None,
            }],
        },
    ]
}

/// Expand every dataset into the references the tree widget would report
/// as checked: one per variant for variant families, one per bare dataset
pub fn all_leaves(sources: &[DataSource]) -> Vec<DatasetRef> {
    let mut leaves = Vec::new();
    for source in sources {
        for dataset in &source.datasets {
            match &dataset.variants {
                Some(variants) => {
                    for variant in variants {
                        leaves.push(DatasetRef::with_variant(
                            source.id.clone(),
                            dataset.id.clone(),
                            variant.clone(),
                        ));
                    }
                }
                None => leaves.push(DatasetRef::new(source.id.clone(), dataset.id.clone())),
            }
        }
    }
    leaves
}
