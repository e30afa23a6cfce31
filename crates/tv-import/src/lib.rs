//! Interactive import flow for the traceview data-visualization tool
//!
//! Turns a hierarchical, incrementally-changing user selection into
//! validated, immutable trace and graph records: selection tree state,
//! derived range constraints, the pipeline compiler, and the concrete
//! dialogs plugged into the generic modal protocol.

pub mod compile;
pub mod dialogs;
pub mod range;
pub mod selection;

// Re-export commonly used types
pub use compile::{GraphDefaults, GraphSpec, PipelineCompiler, VariantExpansion};
pub use dialogs::{
    ImportArgs, ImportDialog, ImportMode, ImportResult, LdevMapArgs, LdevMapDialog,
    ThresholdDialog,
};
pub use range::{RangeEngine, RangeState};
pub use selection::{SelectionState, SelectionTransition};
