//! Threshold prompt
//!
//! Asks for a single numeric value; the trace list uses it to select
//! traces above the entered threshold.

use tv_core::modal::{
    ModalAction, ModalBody, ModalComponent, ModalHeader, ModalView, ModalWidget, Resolver,
};

/// Numeric prompt resolving to the entered value
pub struct ThresholdDialog {
    resolver: Resolver<f64>,
    value: f64,
}

impl ThresholdDialog {
    /// Create the dialog with its resolution slot
    pub fn new(resolver: Resolver<f64>) -> Self {
        Self {
            resolver,
            value: 0.0,
        }
    }

    /// Field edit from the number widget
    pub fn on_change(&mut self, value: f64) {
        self.value = value;
    }

    /// Resolve with the current value
    pub fn confirm(&self) -> bool {
        self.resolver.resolve(self.value)
    }

    /// Dismiss without a result
    pub fn cancel(&self) -> bool {
        self.resolver.cancel()
    }
}

impl ModalView for ThresholdDialog {
    fn header(&self) -> ModalHeader {
        ModalHeader {
            title: "Zvolit křivky větší než".to_string(),
        }
    }

    fn body(&self) -> ModalBody {
        ModalBody::Widgets(vec![ModalWidget::NumberField {
            name: "value".to_string(),
            label: "Hodnota:".to_string(),
            value: self.value,
        }])
    }

    fn footer(&self) -> Vec<ModalAction> {
        vec![
            ModalAction::primary("confirm", "Zvolit"),
            ModalAction::secondary("cancel", "Zrušit"),
        ]
    }
}

impl ModalComponent for ThresholdDialog {
    type Output = f64;
}
