//! Single-resolution slot shared between a modal and its caller

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::warn;

use crate::events::{events::ModalResolved, EventBus};

use super::ModalId;

/// Lifecycle flag shared between the host entry and the resolver
#[derive(Debug, Default)]
pub(super) struct RequestState {
    resolved: AtomicBool,
}

impl RequestState {
    pub(super) fn is_resolved(&self) -> bool {
        self.resolved.load(Ordering::Acquire)
    }
}

/// Create the linked resolver/pending pair for one modal request
pub(super) fn channel<T: Send + 'static>(
    id: ModalId,
    event_bus: Arc<EventBus>,
) -> (Resolver<T>, PendingModal<T>, Arc<RequestState>) {
    let (tx, rx) = oneshot::channel();
    let state = Arc::new(RequestState::default());

    let resolver = Resolver {
        id,
        slot: Arc::new(Mutex::new(Some(tx))),
        state: state.clone(),
        event_bus,
    };
    let pending = PendingModal { id, rx };

    (resolver, pending, state)
}

/// Single-use resolution handle handed to a modal component at mount time
///
/// Cloneable so several footer actions can share it; the underlying slot is
/// still consumed exactly once.
pub struct Resolver<T> {
    id: ModalId,
    slot: Arc<Mutex<Option<oneshot::Sender<Option<T>>>>>,
    state: Arc<RequestState>,
    event_bus: Arc<EventBus>,
}

impl<T> Clone for Resolver<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            slot: self.slot.clone(),
            state: self.state.clone(),
            event_bus: self.event_bus.clone(),
        }
    }
}

impl<T: Send + 'static> Resolver<T> {
    /// The request this resolver belongs to
    pub fn modal_id(&self) -> ModalId {
        self.id
    }

    /// Whether the slot has already been consumed
    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Deliver `value` to the caller
    ///
    /// Returns false if the request was already resolved; the second call
    /// has no observable effect.
    pub fn resolve(&self, value: T) -> bool {
        self.finish(Some(value))
    }

    /// Cancel the request; the caller observes `None`
    pub fn cancel(&self) -> bool {
        self.finish(None)
    }

    fn finish(&self, value: Option<T>) -> bool {
        let Some(tx) = self.slot.lock().take() else {
            warn!(modal_id = %self.id, "attempted to resolve an already-resolved modal request");
            return false;
        };

        let cancelled = value.is_none();
        // The caller may have dropped its pending handle; the request still
        // counts as resolved so the host can tear the modal down.
        let _ = tx.send(value);
        self.state.resolved.store(true, Ordering::Release);
        self.event_bus.publish(ModalResolved {
            modal_id: self.id,
            cancelled,
        });
        true
    }
}

/// The caller's side of a pending modal interaction
pub struct PendingModal<T> {
    id: ModalId,
    rx: oneshot::Receiver<Option<T>>,
}

impl<T> PendingModal<T> {
    /// The request this handle belongs to
    pub fn id(&self) -> ModalId {
        self.id
    }

    /// Await the result
    ///
    /// `None` means the modal was cancelled, or torn down before anything
    /// was resolved.
    pub async fn outcome(self) -> Option<T> {
        self.rx.await.unwrap_or(None)
    }
}
