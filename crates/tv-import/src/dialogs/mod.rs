//! Concrete dialogs plugged into the modal orchestration protocol

pub mod import;
pub mod ldev_map;
pub mod threshold;

pub use import::{ImportArgs, ImportDialog, ImportMode, ImportResult};
pub use ldev_map::{LdevMapArgs, LdevMapDialog};
pub use threshold::ThresholdDialog;
