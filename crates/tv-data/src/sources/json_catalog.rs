//! File-backed catalog

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::catalog::{CatalogService, DataSource};
use crate::CatalogError;

/// Catalog service reading the source list from a JSON file
///
/// The file holds the serialized `Vec<DataSource>`; the whole list is read
/// and replaced per delivery, matching the wholesale-update contract.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Create a catalog over the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogService for JsonCatalog {
    async fn get_sources(&self) -> Result<Vec<DataSource>, CatalogError> {
        let raw = tokio::fs::read(&self.path).await?;
        let sources: Vec<DataSource> = serde_json::from_slice(&raw)?;

        info!(
            path = %self.path.display(),
            sources = sources.len(),
            "loaded catalog file"
        );
        Ok(sources)
    }
}
