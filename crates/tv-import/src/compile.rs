//! Selection-to-pipeline compiler

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use tv_data::{Dataset, DatasetIndex, DatasetRef, Graph, GraphStyle, PipelineExpr, Trace, XType};

/// How the compiler treats a descriptor that names a variant family
/// without picking a variant
///
/// Both modes existed in the import flow's history; callers choose
/// explicitly rather than the compiler silently picking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantExpansion {
    /// One trace per descriptor; a specific variant must already be chosen
    /// per leaf at selection time
    PerLeaf,

    /// A bare descriptor on a variant-bearing dataset expands into one
    /// trace per declared variant
    DeclaredVariants,
}

impl Default for VariantExpansion {
    fn default() -> Self {
        VariantExpansion::PerLeaf
    }
}

/// Defaults for the graph form fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDefaults {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            title: "Nový graf".to_string(),
            x_label: "osa x".to_string(),
            y_label: "osa y".to_string(),
        }
    }
}

/// Finalized graph metadata handed to the compiler
#[derive(Debug, Clone)]
pub struct GraphSpec {
    /// User-entered title
    pub title: String,

    /// Primary axis label
    pub x_label: String,

    /// Value axis label
    pub y_label: String,

    /// Visual style
    pub style: GraphStyle,

    /// Active window in catalog timestamp units
    pub x_range: (i64, i64),
}

/// Deterministically maps a finalized selection to trace records
///
/// Trace ids are `source:dataset`, or `source:dataset:variant` with a
/// variant, and must be unique within the produced sequence; the compiler
/// does not deduplicate, two descriptors yielding the same id are a caller
/// error. The confirm affordance guarantees the compiler is never invoked
/// with zero descriptors.
pub struct PipelineCompiler<'a> {
    index: &'a DatasetIndex,
    expansion: VariantExpansion,
}

impl<'a> PipelineCompiler<'a> {
    /// Create a compiler over the given index with per-leaf variants
    pub fn new(index: &'a DatasetIndex) -> Self {
        Self {
            index,
            expansion: VariantExpansion::default(),
        }
    }

    /// Use the given variant-expansion mode
    pub fn with_expansion(mut self, expansion: VariantExpansion) -> Self {
        self.expansion = expansion;
        self
    }

    /// Build one trace per selected leaf, in selection order
    pub fn traces<'s>(&self, selection: impl IntoIterator<Item = &'s DatasetRef>) -> Vec<Trace> {
        let mut traces = Vec::new();
        for node in selection {
            let Some(dataset) = self.index.resolve(node) else {
                debug!(node = ?node, "skipping unresolvable descriptor during compile");
                continue;
            };

            match (&node.variant, self.expansion, &dataset.variants) {
                (None, VariantExpansion::DeclaredVariants, Some(declared)) => {
                    for variant in declared {
                        traces.push(build_trace(dataset, node, Some(variant)));
                    }
                }
                _ => traces.push(build_trace(dataset, node, node.variant.as_deref())),
            }
        }
        traces
    }

    /// Wrap the compiled traces into a graph record
    ///
    /// `active_traces` starts as every produced trace id, in trace order.
    pub fn graph<'s>(
        &self,
        selection: impl IntoIterator<Item = &'s DatasetRef>,
        spec: GraphSpec,
    ) -> Graph {
        let traces = self.traces(selection);
        let active_traces = traces.iter().map(|trace| trace.id.clone()).collect();

        Graph {
            id: Uuid::new_v4(),
            title: spec.title,
            x_label: spec.x_label,
            y_label: spec.y_label,
            x_type: XType::DateTime,
            style: spec.style,
            x_range: spec.x_range,
            traces,
            active_traces,
        }
    }
}

fn build_trace(dataset: &Dataset, node: &DatasetRef, variant: Option<&str>) -> Trace {
    let (id, title) = match variant {
        Some(variant) => (
            format!("{}:{}:{}", node.source, node.id, variant),
            format!("{} ({})", dataset.name, variant),
        ),
        None => (
            format!("{}:{}", node.source, node.id),
            dataset.name.clone(),
        ),
    };

    Trace {
        id,
        title,
        pipeline: PipelineExpr::Data {
            dataset: DatasetRef {
                source: node.source.clone(),
                id: node.id.clone(),
                variant: variant.map(str::to_string),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tv_data::DataSource;

    fn index() -> DatasetIndex {
        DatasetIndex::from_sources(&[DataSource {
            id: "s1".to_string(),
            name: "Primary".to_string(),
            features: Vec::new(),
            datasets: vec![
                Dataset {
                    id: "cpu".to_string(),
                    name: "CPU load".to_string(),
                    source: "s1".to_string(),
                    available_x_range: [100, 200],
                    variants: Some(vec!["p50".to_string(), "p99".to_string()]),
                },
                Dataset {
                    id: "mem".to_string(),
                    name: "Memory".to_string(),
                    source: "s1".to_string(),
                    available_x_range: [0, 50],
                    variants: None,
                },
            ],
        }])
    }

    #[test]
    fn test_trace_id_and_title_without_variant() {
        let index = index();
        let compiler = PipelineCompiler::new(&index);

        let traces = compiler.traces(&[DatasetRef::new("s1", "mem")]);
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].id, "s1:mem");
        assert_eq!(traces[0].title, "Memory");
    }

    #[test]
    fn test_trace_id_and_title_with_variant() {
        let index = index();
        let compiler = PipelineCompiler::new(&index);

        let traces = compiler.traces(&[DatasetRef::with_variant("s1", "cpu", "p99")]);
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].id, "s1:cpu:p99");
        assert_eq!(traces[0].title, "CPU load (p99)");
        assert_eq!(
            traces[0].pipeline,
            PipelineExpr::Data {
                dataset: DatasetRef::with_variant("s1", "cpu", "p99"),
            }
        );
    }

    #[test]
    fn test_per_leaf_keeps_bare_family_as_one_trace() {
        let index = index();
        let compiler = PipelineCompiler::new(&index);

        let traces = compiler.traces(&[DatasetRef::new("s1", "cpu")]);
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].id, "s1:cpu");
    }

    #[test]
    fn test_declared_variant_expansion() {
        let index = index();
        let compiler =
            PipelineCompiler::new(&index).with_expansion(VariantExpansion::DeclaredVariants);

        let traces = compiler.traces(&[
            DatasetRef::new("s1", "cpu"),
            DatasetRef::new("s1", "mem"),
        ]);

        let ids: Vec<_> = traces.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["s1:cpu:p50", "s1:cpu:p99", "s1:mem"]);
        assert_eq!(traces[0].title, "CPU load (p50)");
    }

    #[test]
    fn test_graph_wrapping() {
        let index = index();
        let compiler = PipelineCompiler::new(&index);
        let selection = [
            DatasetRef::with_variant("s1", "cpu", "p50"),
            DatasetRef::with_variant("s1", "cpu", "p99"),
            DatasetRef::new("s1", "mem"),
        ];

        let graph = compiler.graph(
            &selection,
            GraphSpec {
                title: "Load".to_string(),
                x_label: "time".to_string(),
                y_label: "%".to_string(),
                style: GraphStyle::default(),
                x_range: (100, 200),
            },
        );

        assert_eq!(graph.x_type, XType::DateTime);
        assert_eq!(graph.x_range, (100, 200));
        assert_eq!(graph.traces.len(), 3);
        assert_eq!(
            graph.active_traces,
            vec!["s1:cpu:p50", "s1:cpu:p99", "s1:mem"]
        );
    }

    #[test]
    fn test_graph_defaults_match_form_defaults() {
        let defaults = GraphDefaults::default();
        assert_eq!(defaults.title, "Nový graf");
        assert_eq!(defaults.x_label, "osa x");
        assert_eq!(defaults.y_label, "osa y");
    }
}
