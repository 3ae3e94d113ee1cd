pub mod capability;
pub mod config;
pub mod correction;
pub mod error;
pub mod geometry;

pub use capability::{
    FocusableInput, KeyboardEvent, MeasurableView, PlatformCapabilities, ScrollSurface,
};
pub use config::{KeyboardAwareConfig, TimingConfig};
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size, ViewMeasurement};
