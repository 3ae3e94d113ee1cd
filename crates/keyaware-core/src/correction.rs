//! Pure scroll-correction target computations
//!
//! These functions turn the coordinator's tracked geometry into concrete
//! scroll targets. They never fail; callers are responsible for deferring
//! until the inputs they need are known.

use crate::geometry::{Point, Size};

/// Target offset that pins the end of the content to the bottom of the
/// viewport, accounting for any bottom content inset (the keyboard inset
/// while the keyboard is up).
///
/// The result is intentionally not clamped to zero: a content extent shorter
/// than the viewport yields a negative target, which scroll surfaces with
/// over-scroll enabled accept as-is.
pub fn scroll_to_bottom_target(content: Size, viewport: Size, bottom_inset: f32) -> Point {
    Point {
        x: 0.0,
        y: content.height - viewport.height + bottom_inset,
    }
}

/// Target offset to rebound to when the keyboard hides
///
/// Undoes the keyboard-height worth of scroll compensation, clamped so the
/// surface never rebounds past the top. With no known offset the surface
/// returns to the top.
pub fn keyboard_hide_target(prior_offset: Option<Point>, keyboard_height: f32) -> Point {
    let y = prior_offset
        .map(|offset| (offset.y - keyboard_height).max(0.0))
        .unwrap_or(0.0);
    Point { x: 0.0, y }
}

/// Offset-from-top handed to the native scroll-input-to-keyboard command
///
/// `page_y` translates the wrapping view's position into absolute screen
/// coordinates; `extra_offset` is the configured breathing room above the
/// keyboard.
#[inline]
pub fn input_reveal_offset(extra_offset: f32, page_y: f32) -> f32 {
    extra_offset + page_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_bottom_target() {
        let target = scroll_to_bottom_target(
            Size::new(375.0, 1000.0),
            Size::new(375.0, 600.0),
            300.0,
        );
        assert_eq!(target, Point::new(0.0, 700.0));
    }

    #[test]
    fn test_scroll_to_bottom_no_inset() {
        let target =
            scroll_to_bottom_target(Size::new(375.0, 2000.0), Size::new(375.0, 800.0), 0.0);
        assert_eq!(target.y, 1200.0);
    }

    #[test]
    fn test_scroll_to_bottom_short_content_overscrolls() {
        let target =
            scroll_to_bottom_target(Size::new(375.0, 400.0), Size::new(375.0, 800.0), 0.0);
        assert_eq!(target.y, -400.0);
    }

    #[test]
    fn test_keyboard_hide_target() {
        let target = keyboard_hide_target(Some(Point::new(0.0, 500.0)), 250.0);
        assert_eq!(target, Point::new(0.0, 250.0));
    }

    #[test]
    fn test_keyboard_hide_clamps_to_top() {
        let target = keyboard_hide_target(Some(Point::new(0.0, 100.0)), 250.0);
        assert_eq!(target.y, 0.0);
    }

    #[test]
    fn test_keyboard_hide_without_offset() {
        let target = keyboard_hide_target(None, 250.0);
        assert_eq!(target, Point::ZERO);
    }

    #[test]
    fn test_input_reveal_offset() {
        assert_eq!(input_reveal_offset(75.0, 40.0), 115.0);
    }
}
