//! Geometry value types shared across the workspace
//!
//! All coordinates are in density-independent screen points. `page_x`/`page_y`
//! are absolute screen coordinates, as opposed to the parent-relative `x`/`y`.

use serde::{Deserialize, Serialize};

/// A scroll offset or position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height extent (viewport size or content size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A laid-out rectangle (origin relative to the parent)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// Result of an absolute view measurement
///
/// `x`/`y` are relative to the parent, `page_x`/`page_y` are absolute screen
/// coordinates. Mirrors the platform measure callback's six arguments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewMeasurement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub page_x: f32,
    pub page_y: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_size() {
        let rect = Rect::new(10.0, 20.0, 375.0, 812.0);
        assert_eq!(rect.size(), Size::new(375.0, 812.0));
    }

    #[test]
    fn test_point_zero() {
        assert_eq!(Point::ZERO, Point::new(0.0, 0.0));
    }
}
