//! Compiled trace and graph records
//!
//! These are the immutable outputs of the import flow: value types the
//! plotting and trace-list subsystems consume without aliasing back into
//! the selection state that produced them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to one selectable leaf: a bare dataset, or one variant of it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetRef {
    /// Id of the owning source
    pub source: String,

    /// Dataset id within the source
    pub id: String,

    /// Variant identifier, when a specific sub-series is referenced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl DatasetRef {
    /// Reference a bare dataset
    pub fn new(source: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            id: id.into(),
            variant: None,
        }
    }

    /// Reference one variant of a dataset
    pub fn with_variant(
        source: impl Into<String>,
        id: impl Into<String>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            id: id.into(),
            variant: Some(variant.into()),
        }
    }
}

/// Pipeline expression a trace plots
///
/// Today every trace plots a dataset reference directly; richer operators
/// (sums, averages over other traces) keep their own arms here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PipelineExpr {
    /// Plot a catalog dataset
    Data { dataset: DatasetRef },
}

/// One compiled, plottable series reference plus display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Unique id within the produced result set
    pub id: String,

    /// Display title
    pub title: String,

    /// What this trace plots
    pub pipeline: PipelineExpr,
}

/// Axis interpretation for the primary axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XType {
    /// Timestamps
    DateTime,
}

/// Visual style of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphStyle {
    Line,
    Area,
}

impl Default for GraphStyle {
    fn default() -> Self {
        GraphStyle::Line
    }
}

/// A titled collection of traces sharing axis labels and an active window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Graph identifier
    pub id: Uuid,

    /// User-entered title
    pub title: String,

    /// Primary axis label
    #[serde(rename = "xLabel")]
    pub x_label: String,

    /// Value axis label
    #[serde(rename = "yLabel")]
    pub y_label: String,

    /// Primary axis interpretation
    #[serde(rename = "xType")]
    pub x_type: XType,

    /// Visual style
    #[serde(default)]
    pub style: GraphStyle,

    /// Active window on the primary axis, in catalog timestamp units
    #[serde(rename = "xRange")]
    pub x_range: (i64, i64),

    /// Owned traces in compile order
    pub traces: Vec<Trace>,

    /// Ids of the traces currently shown; starts as every trace id,
    /// in trace order
    #[serde(rename = "activeTraces")]
    pub active_traces: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_wire_shape() {
        let expr = PipelineExpr::Data {
            dataset: DatasetRef::new("s1", "cpu"),
        };
        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "data",
                "dataset": { "source": "s1", "id": "cpu" }
            })
        );
    }

    #[test]
    fn test_variant_ref_round_trip() {
        let node = DatasetRef::with_variant("s1", "cpu", "p99");
        let json = serde_json::to_string(&node).unwrap();
        let back: DatasetRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
        assert_ne!(back, DatasetRef::new("s1", "cpu"));
    }
}
