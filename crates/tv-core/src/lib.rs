//! Core orchestration for the traceview import layer
//!
//! This crate provides the generic modal orchestration protocol and the
//! application event bus. Concrete dialogs and the presentation layer live
//! elsewhere; everything here is widget-agnostic.

pub mod events;
pub mod modal;

// Re-export commonly used types
pub use events::EventBus;
pub use modal::{
    ActionStyle, ModalAction, ModalBody, ModalComponent, ModalHeader, ModalHost, ModalId,
    ModalView, ModalWidget, PendingModal, Resolver, TreeNode,
};
