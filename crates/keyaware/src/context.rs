//! Shared context handed to input widgets
//!
//! Input widgets never touch coordinator state directly: registration goes
//! through the shared registry and focus notifications travel through the
//! coordinator's event channel. Both paths tolerate a coordinator that has
//! already shut down.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::mpsc;

use keyaware_core::FocusableInput;

use crate::coordinator::CoordinatorEvent;
use crate::registry::InputRegistry;

/// Capability object input widgets use to participate in keyboard avoidance
#[derive(Clone)]
pub struct InputContext {
    registry: Arc<Mutex<InputRegistry>>,
    events: mpsc::UnboundedSender<CoordinatorEvent>,
}

impl InputContext {
    pub(crate) fn new(
        registry: Arc<Mutex<InputRegistry>>,
        events: mpsc::UnboundedSender<CoordinatorEvent>,
    ) -> Self {
        Self { registry, events }
    }

    /// Register a mounted input, returning a guard that unregisters on drop
    pub fn register(&self, input: &Arc<dyn FocusableInput>) -> Registration {
        lock(&self.registry).register(input);
        Registration {
            registry: Arc::downgrade(&self.registry),
            input: Arc::downgrade(input),
        }
    }

    /// Notify that an input gained focus
    ///
    /// A dangling handle (the input unmounted in the meantime) is a no-op, as
    /// is a coordinator that has already shut down.
    pub fn notify_focus(&self, input: Weak<dyn FocusableInput>) {
        let _ = self.events.send(CoordinatorEvent::InputFocused(input));
    }
}

/// RAII registration guard; dropping it removes the input from the registry
pub struct Registration {
    registry: Weak<Mutex<InputRegistry>>,
    input: Weak<dyn FocusableInput>,
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).unregister(&self.input);
        }
    }
}

pub(crate) fn lock(registry: &Mutex<InputRegistry>) -> MutexGuard<'_, InputRegistry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}
