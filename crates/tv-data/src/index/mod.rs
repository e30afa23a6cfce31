//! Dataset lookup for selection resolution

use ahash::AHashMap;
use tracing::debug;

use crate::catalog::{DataSource, Dataset};
use crate::model::DatasetRef;

/// Explicit `(source, dataset) -> Dataset` mapping
///
/// Owned by whoever holds the current catalog and rebuilt wholesale on
/// every delivery; entries are never mutated incrementally.
#[derive(Debug, Default)]
pub struct DatasetIndex {
    datasets: AHashMap<String, AHashMap<String, Dataset>>,
    dataset_count: usize,
}

impl DatasetIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a delivered source list
    pub fn from_sources(sources: &[DataSource]) -> Self {
        let mut index = Self::new();
        index.rebuild(sources);
        index
    }

    /// Replace the mapping with the given source list
    pub fn rebuild(&mut self, sources: &[DataSource]) {
        self.datasets.clear();
        self.dataset_count = 0;

        for source in sources {
            let by_id = self.datasets.entry(source.id.clone()).or_default();
            for dataset in &source.datasets {
                by_id.insert(dataset.id.clone(), dataset.clone());
                self.dataset_count += 1;
            }
        }
        debug!(
            sources = sources.len(),
            datasets = self.dataset_count,
            "rebuilt dataset index"
        );
    }

    /// Resolve a selection reference to its dataset
    ///
    /// Returns `None` for unknown sources or datasets, and for references
    /// naming a variant the dataset does not declare; such references are
    /// stale-state noise and get dropped by the selection handler.
    pub fn resolve(&self, node: &DatasetRef) -> Option<&Dataset> {
        let dataset = self.datasets.get(&node.source)?.get(&node.id)?;

        if let Some(variant) = &node.variant {
            match &dataset.variants {
                Some(declared) if declared.contains(variant) => {}
                _ => return None,
            }
        }
        Some(dataset)
    }

    /// Number of indexed datasets
    pub fn len(&self) -> usize {
        self.dataset_count
    }

    /// Whether the index holds no datasets
    pub fn is_empty(&self) -> bool {
        self.dataset_count == 0
    }
}
