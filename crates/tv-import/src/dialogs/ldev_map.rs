//! LDEV map dialog
//!
//! Shows which physical components a logical device maps to. The trace
//! list opens it for traces whose dataset belongs to a source advertising
//! the `ldev_map` capability; the caller does not consume a result, so the
//! dialog resolves to unit on close.

use tracing::debug;

use tv_core::modal::{ModalAction, ModalBody, ModalComponent, ModalHeader, ModalView, Resolver};

/// Immutable configuration for one dialog invocation
#[derive(Debug, Clone)]
pub struct LdevMapArgs {
    /// Source the logical device lives in
    pub source: String,

    /// Logical device identifier
    pub ldev: String,
}

/// Informational dialog resolving to unit
pub struct LdevMapDialog {
    args: LdevMapArgs,
    resolver: Resolver<()>,

    /// None until the mapping delivery arrives
    components: Option<Vec<String>>,
}

impl LdevMapDialog {
    /// Create the dialog with its resolution slot
    pub fn new(args: LdevMapArgs, resolver: Resolver<()>) -> Self {
        Self {
            args,
            resolver,
            components: None,
        }
    }

    /// Wholesale delivery of the device's component mapping
    ///
    /// A delivery arriving after the dialog resolved has no visible effect.
    pub fn map_loaded(&mut self, components: Vec<String>) {
        if self.resolver.is_resolved() {
            debug!(
                modal_id = %self.resolver.modal_id(),
                "ignoring map delivery for a resolved dialog"
            );
            return;
        }
        self.components = Some(components);
    }

    /// Dismissal path; there is nothing else to resolve with
    pub fn close(&self) -> bool {
        self.resolver.resolve(())
    }
}

impl ModalView for LdevMapDialog {
    fn header(&self) -> ModalHeader {
        ModalHeader {
            title: format!("Mapa LDEV: {}", self.args.ldev),
        }
    }

    fn body(&self) -> ModalBody {
        match &self.components {
            None => ModalBody::Message("Načítám mapu...".to_string()),
            Some(components) => ModalBody::Message(components.join("\n")),
        }
    }

    fn footer(&self) -> Vec<ModalAction> {
        vec![ModalAction::secondary("close", "Zavřít")]
    }
}

impl ModalComponent for LdevMapDialog {
    type Output = ();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tv_core::{EventBus, ModalHost};

    fn args() -> LdevMapArgs {
        LdevMapArgs {
            source: "s1".to_string(),
            ldev: "00:2A".to_string(),
        }
    }

    #[tokio::test]
    async fn test_close_resolves_with_unit() {
        let host = ModalHost::new(Arc::new(EventBus::new()));
        let (dialog, pending) = host.open(|resolver| LdevMapDialog::new(args(), resolver));

        assert_eq!(dialog.read().header().title, "Mapa LDEV: 00:2A");
        assert_eq!(
            dialog.read().body(),
            ModalBody::Message("Načítám mapu...".to_string())
        );

        dialog
            .write()
            .map_loaded(vec!["Pool 1".to_string(), "MPB-1MA".to_string()]);
        assert_eq!(
            dialog.read().body(),
            ModalBody::Message("Pool 1\nMPB-1MA".to_string())
        );

        assert!(dialog.read().close());
        assert_eq!(pending.outcome().await, Some(()));
    }

    #[tokio::test]
    async fn test_late_map_delivery_is_ignored() {
        let host = ModalHost::new(Arc::new(EventBus::new()));
        let (dialog, _pending) = host.open(|resolver| LdevMapDialog::new(args(), resolver));

        dialog.read().close();
        dialog.write().map_loaded(vec!["Pool 1".to_string()]);

        assert_eq!(
            dialog.read().body(),
            ModalBody::Message("Načítám mapu...".to_string())
        );
    }
}
