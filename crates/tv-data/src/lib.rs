//! Dataset catalog and compiled record model for traceview

pub mod catalog;
pub mod index;
pub mod model;
pub mod sources;
pub mod time;

use thiserror::Error;

// Re-exports
pub use catalog::{CatalogService, DataSource, Dataset};
pub use index::DatasetIndex;
pub use model::{DatasetRef, Graph, GraphStyle, PipelineExpr, Trace, XType};
pub use sources::{JsonCatalog, StaticCatalog};

/// Errors that can occur in catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
