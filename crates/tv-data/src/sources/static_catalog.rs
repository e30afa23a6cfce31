//! Fixed in-memory catalog

use async_trait::async_trait;

use crate::catalog::{CatalogService, DataSource};
use crate::CatalogError;

/// Catalog service backed by a fixed source list
///
/// Used by tests and the demo harness; every delivery hands out the same
/// list.
pub struct StaticCatalog {
    sources: Vec<DataSource>,
}

impl StaticCatalog {
    /// Create a catalog over the given sources
    pub fn new(sources: Vec<DataSource>) -> Self {
        Self { sources }
    }
}

#[async_trait]
impl CatalogService for StaticCatalog {
    async fn get_sources(&self) -> Result<Vec<DataSource>, CatalogError> {
        Ok(self.sources.clone())
    }
}
