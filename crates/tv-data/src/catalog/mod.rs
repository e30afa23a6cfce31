//! Catalog model and the read path that delivers it
//!
//! A catalog is an ordered list of data sources, each exposing datasets
//! with a known available range on the primary axis. Sources are immutable
//! once delivered; a new delivery replaces the list wholesale.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// A named provider exposing one or more datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSource {
    /// Identity of the source
    pub id: String,

    /// Display name
    pub name: String,

    /// Capability tags, e.g. `"ldev_map"`
    #[serde(default)]
    pub features: Vec<String>,

    /// Datasets in catalog order
    pub datasets: Vec<Dataset>,
}

impl DataSource {
    /// Whether this source advertises the given capability tag
    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f == tag)
    }
}

/// A selectable series, or a family of series when variants are declared
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Identity within the owning source
    pub id: String,

    /// Display name
    pub name: String,

    /// Id of the owning source
    pub source: String,

    /// Closed interval of available timestamps on the primary axis,
    /// `[min, max]` with `min <= max`, in catalog timestamp units
    #[serde(rename = "availableXRange")]
    pub available_x_range: [i64; 2],

    /// Named sub-series, when the dataset is a family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,
}

/// Read path for the catalog
///
/// One-shot wholesale delivery; no pagination or incremental loading is
/// assumed anywhere downstream.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch the ordered source list
    async fn get_sources(&self) -> Result<Vec<DataSource>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_json_shape() {
        let raw = r#"[
            {
                "id": "s1",
                "name": "Primary",
                "features": ["ldev_map"],
                "datasets": [
                    {
                        "id": "cpu",
                        "name": "CPU",
                        "source": "s1",
                        "availableXRange": [100, 200],
                        "variants": ["p50", "p99"]
                    },
                    {
                        "id": "mem",
                        "name": "Memory",
                        "source": "s1",
                        "availableXRange": [0, 50]
                    }
                ]
            }
        ]"#;

        let sources: Vec<DataSource> = serde_json::from_str(raw).unwrap();
        assert_eq!(sources.len(), 1);
        assert!(sources[0].has_feature("ldev_map"));
        assert!(!sources[0].has_feature("export"));

        let cpu = &sources[0].datasets[0];
        assert_eq!(cpu.available_x_range, [100, 200]);
        assert_eq!(cpu.variants.as_deref(), Some(&["p50".to_string(), "p99".to_string()][..]));
        assert!(sources[0].datasets[1].variants.is_none());
    }
}
