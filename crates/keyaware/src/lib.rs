//! Keyboard-aware scroll coordination
//!
//! Keeps a scrollable container usable while an on-screen keyboard overlaps
//! it: tracks keyboard visibility and height, maintains a registry of the
//! focusable inputs mounted inside the surface, and issues scroll corrections
//! so the focused input stays visible above the keyboard.
//!
//! The host adapter forwards layout/scroll events through a
//! [`CoordinatorHandle`], input widgets register through an [`InputContext`],
//! and the [`coordinator::KeyboardAwareCoordinator`] task owns all state and
//! drives the platform through the capability traits re-exported from
//! `keyaware-core`.

pub mod content_size;
pub mod context;
pub mod coordinator;
pub mod probe;
pub mod registry;

pub use content_size::ContentSizeTracker;
pub use context::{InputContext, Registration};
pub use coordinator::{
    CoordinatorEvent, CoordinatorHandle, CoordinatorSnapshot, KeyboardAwareCoordinator,
};
pub use probe::PositionProbe;
pub use registry::InputRegistry;

pub use keyaware_core::{
    FocusableInput, KeyboardAwareConfig, KeyboardEvent, MeasurableView, PlatformCapabilities,
    Point, Rect, ScrollSurface, Size, TimingConfig, ViewMeasurement,
};
