//! Modal host implementation

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::events::{
    events::{ModalClosed, ModalOpened},
    EventBus,
};

use super::request::{self, PendingModal, RequestState, Resolver};
use super::{ModalComponent, ModalId, ModalView};

/// One mounted modal
struct ModalEntry {
    id: ModalId,
    view: Arc<RwLock<dyn ModalView>>,
    state: Arc<RequestState>,
}

/// The modal host owns the stack of currently mounted modals
///
/// Modals may overlap; each carries an independent resolution slot and
/// resolving one does not affect the others. Teardown of an entry happens
/// only after its slot was consumed, via [`ModalHost::sweep`].
pub struct ModalHost {
    stack: RwLock<Vec<ModalEntry>>,
    event_bus: Arc<EventBus>,
}

impl ModalHost {
    /// Create a new host publishing lifecycle events on `event_bus`
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            stack: RwLock::new(Vec::new()),
            event_bus,
        }
    }

    /// Mount a modal and return the typed interaction handle plus the
    /// caller's pending result
    ///
    /// `build` receives the single-use resolver the component resolves or
    /// cancels itself through. The handle is what the widget layer drives
    /// user interaction with; awaiting the pending result yields `Some`
    /// output or `None` on cancellation.
    pub fn open<C, F>(&self, build: F) -> (Arc<RwLock<C>>, PendingModal<C::Output>)
    where
        C: ModalComponent + 'static,
        F: FnOnce(Resolver<C::Output>) -> C,
    {
        let id = ModalId::new_v4();
        let (resolver, pending, state) = request::channel(id, self.event_bus.clone());

        let component = Arc::new(RwLock::new(build(resolver)));
        let view: Arc<RwLock<dyn ModalView>> = component.clone();

        self.stack.write().push(ModalEntry { id, view, state });
        self.event_bus.publish(ModalOpened { modal_id: id });
        debug!(modal_id = %id, "mounted modal");

        (component, pending)
    }

    /// Unmount every resolved modal, returning their ids
    ///
    /// The host boundary calls this after dispatching events back into the
    /// dialogs. Unresolved modals are never removed here, so teardown
    /// cannot precede resolution.
    pub fn sweep(&self) -> Vec<ModalId> {
        let mut closed = Vec::new();
        self.stack.write().retain(|entry| {
            if entry.state.is_resolved() {
                closed.push(entry.id);
                false
            } else {
                true
            }
        });

        for id in &closed {
            debug!(modal_id = %id, "unmounted modal");
            self.event_bus.publish(ModalClosed { modal_id: *id });
        }
        closed
    }

    /// Whether the modal with the given id is still mounted
    pub fn is_open(&self, id: ModalId) -> bool {
        self.stack.read().iter().any(|entry| entry.id == id)
    }

    /// The topmost modal's render view, if any
    pub fn top(&self) -> Option<Arc<RwLock<dyn ModalView>>> {
        self.stack.read().last().map(|entry| entry.view.clone())
    }

    /// Number of mounted modals
    pub fn len(&self) -> usize {
        self.stack.read().len()
    }

    /// Whether no modal is mounted
    pub fn is_empty(&self) -> bool {
        self.stack.read().is_empty()
    }
}
