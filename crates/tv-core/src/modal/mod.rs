//! Generic modal orchestration protocol
//!
//! Any part of the application can present a modal and receive exactly one
//! typed result asynchronously. A concrete dialog implements the render
//! capability set ([`ModalView`]) plus an output type ([`ModalComponent`]);
//! the host mounts it, hands it a single-use [`Resolver`], and the caller
//! awaits the [`PendingModal`]. Rendering payloads are declarative
//! descriptions consumed by whatever widget toolkit hosts the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod host;
mod request;

pub use host::ModalHost;
pub use request::{PendingModal, Resolver};

/// Modal request identifier type
pub type ModalId = uuid::Uuid;

/// Render capability set implemented by every concrete dialog
pub trait ModalView: Send + Sync {
    fn header(&self) -> ModalHeader;
    fn body(&self) -> ModalBody;
    fn footer(&self) -> Vec<ModalAction>;
}

/// A dialog that resolves to a typed result
///
/// Interaction beyond rendering goes through the typed handle returned by
/// [`ModalHost::open`]; the widget layer calls the concrete dialog's own
/// methods and ultimately its resolver.
pub trait ModalComponent: ModalView {
    type Output: Send + 'static;
}

/// Header description of a modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalHeader {
    /// Title text
    pub title: String,
}

/// Body description of a modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalBody {
    /// Free-form message, e.g. a loading placeholder
    Message(String),
    /// Composite form described as generic widgets
    Widgets(Vec<ModalWidget>),
}

/// Widget-agnostic description of one body element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalWidget {
    /// Checkable hierarchy; the widget reports the full checked key set on
    /// every change, never deltas
    CheckTree { nodes: Vec<TreeNode> },

    /// Single-line text input addressed by field name
    TextField {
        name: String,
        label: String,
        value: String,
    },

    /// Numeric input addressed by field name
    NumberField {
        name: String,
        label: String,
        value: f64,
    },

    /// Date-range picker; min/max constrain the pickable window
    DateRange {
        min: Option<DateTime<Utc>>,
        max: Option<DateTime<Utc>>,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    },
}

/// One node of a checkable tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Stable key identifying the node across re-renders
    pub key: String,

    /// Display label
    pub label: String,

    /// Child nodes; leaves are the selectable entries
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node
    pub fn leaf(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Create a branch node with children
    pub fn branch(
        key: impl Into<String>,
        label: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            children,
        }
    }
}

/// Footer action description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalAction {
    /// Stable action identifier the widget layer dispatches on
    pub id: String,

    /// Button label
    pub label: String,

    /// Disabled actions must not be dispatchable
    pub enabled: bool,

    /// Visual weight
    pub style: ActionStyle,
}

/// Visual weight of a footer action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStyle {
    Primary,
    Secondary,
}

impl ModalAction {
    /// Create an enabled primary action
    pub fn primary(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            enabled: true,
            style: ActionStyle::Primary,
        }
    }

    /// Create an enabled secondary action
    pub fn secondary(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            enabled: true,
            style: ActionStyle::Secondary,
        }
    }

    /// Return the same action with the given enabled state
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
