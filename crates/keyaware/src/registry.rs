//! Ordered registry of mounted focusable inputs
//!
//! Handles are held weakly: an input that unmounts without unregistering
//! simply becomes a dead entry, pruned on the next scan. Insertion order is
//! preserved, with re-registration moving a handle to the tail.

use std::sync::{Arc, Weak};

use keyaware_core::FocusableInput;

/// Tracks the set of currently-mounted focusable inputs
#[derive(Default)]
pub struct InputRegistry {
    inputs: Vec<Weak<dyn FocusableInput>>,
}

impl InputRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handle, moving it to the tail if it was already registered
    pub fn register(&mut self, input: &Arc<dyn FocusableInput>) {
        let weak = Arc::downgrade(input);
        self.inputs.retain(|existing| !existing.ptr_eq(&weak));
        self.inputs.push(weak);
    }

    /// Remove a handle; unknown handles are ignored
    pub fn unregister(&mut self, input: &Weak<dyn FocusableInput>) {
        self.inputs.retain(|existing| !existing.ptr_eq(input));
    }

    /// Scan handles in registration order and return the first focused one
    ///
    /// Dead handles are dropped from the registry as a side effect. The scan
    /// stops at the first handle reporting focused; if several report focused
    /// at once, registration order decides.
    pub fn focused_input(&mut self) -> Option<Arc<dyn FocusableInput>> {
        self.inputs.retain(|weak| weak.strong_count() > 0);
        self.inputs
            .iter()
            .filter_map(Weak::upgrade)
            .find(|input| input.is_focused())
    }

    /// Live registered handles, in registration order
    pub fn live_inputs(&self) -> Vec<Arc<dyn FocusableInput>> {
        self.inputs.iter().filter_map(Weak::upgrade).collect()
    }

    /// Number of live registered handles
    pub fn len(&self) -> usize {
        self.inputs
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
