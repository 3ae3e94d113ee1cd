//! Platform capability seams
//!
//! The coordinator never talks to a platform directly. Everything it needs
//! from the host UI framework arrives through the traits below, and whether a
//! capability exists at all is declared up front in [`PlatformCapabilities`].
//! Keeping the presence checks in one injected value object (instead of
//! scattered OS conditionals) keeps the coordinator logic testable without a
//! device.

use std::sync::Arc;

use async_trait::async_trait;

use crate::geometry::{Point, Size, ViewMeasurement};

/// Which platform capabilities are available to the coordinator
///
/// An absent capability silently disables the dependent behavior; it is never
/// an error. On platforms where the OS handles keyboard avoidance itself
/// (stock Android), construct with [`PlatformCapabilities::none`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// Keyboard will-show/will-hide notifications are delivered
    pub keyboard_notifications: bool,
    /// The scroll surface's content size can be queried asynchronously
    pub content_size_query: bool,
    /// A native "scroll this descendant above the keyboard" command exists
    pub scroll_to_keyboard: bool,
}

impl PlatformCapabilities {
    /// All capabilities present
    pub fn full() -> Self {
        Self {
            keyboard_notifications: true,
            content_size_query: true,
            scroll_to_keyboard: true,
        }
    }

    /// No capabilities present; the coordinator degrades to a no-op
    pub fn none() -> Self {
        Self {
            keyboard_notifications: false,
            content_size_query: false,
            scroll_to_keyboard: false,
        }
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::full()
    }
}

/// Keyboard notifications consumed by the coordinator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyboardEvent {
    /// The keyboard is about to appear at its final `height`
    WillShow { height: f32 },
    /// The keyboard is about to disappear
    WillHide,
}

/// A mounted focusable input inside the scroll surface
///
/// The default `is_focused` body covers handles that lack a focus-query
/// capability; they simply report not-focused.
pub trait FocusableInput: Send + Sync {
    fn is_focused(&self) -> bool {
        false
    }
}

/// The scrollable container being kept clear of the keyboard
///
/// Commands are fire-and-forget; the content-size query is asynchronous and
/// may resolve `None` (or never resolve) without consequence.
#[async_trait]
pub trait ScrollSurface: Send + Sync {
    /// Scroll to an absolute content offset
    fn scroll_to(&self, offset: Point, animated: bool);

    /// Scroll a descendant input into view above the keyboard
    ///
    /// `offset_from_top` is the extra gap to leave between the input and the
    /// keyboard, already translated into absolute screen coordinates.
    fn scroll_input_to_keyboard(
        &self,
        input: &Arc<dyn FocusableInput>,
        offset_from_top: f32,
        animated: bool,
    );

    /// Query the rendered content extent
    async fn content_size(&self) -> Option<Size>;

    /// Make the surface visible after a pre-positioning jump
    ///
    /// Presentation affordance only; surfaces that do not hide themselves
    /// while pre-scrolling can keep the default no-op.
    fn reveal(&self) {}
}

/// A view whose absolute screen position can be measured
#[async_trait]
pub trait MeasurableView: Send + Sync {
    /// Measure the view, `None` if it cannot currently be measured
    async fn measure(&self) -> Option<ViewMeasurement>;
}
