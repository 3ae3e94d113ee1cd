use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Behavior configuration for a keyboard-aware coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyboardAwareConfig {
    /// Extra gap (points) kept between the focused input and the keyboard
    #[serde(default = "default_extra_offset")]
    pub scroll_to_input_extra_offset: f32,
    /// Scroll to the bottom of the content whenever the keyboard appears
    #[serde(default)]
    pub scroll_to_bottom_on_keyboard_show: bool,
    /// Start pre-scrolled to the bottom, then reveal the surface
    #[serde(default)]
    pub start_scrolled_to_bottom: bool,
    /// Timing constants
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Default for KeyboardAwareConfig {
    fn default() -> Self {
        Self {
            scroll_to_input_extra_offset: default_extra_offset(),
            scroll_to_bottom_on_keyboard_show: false,
            start_scrolled_to_bottom: false,
            timing: TimingConfig::default(),
        }
    }
}

impl KeyboardAwareConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Delay constants driving the coordinator's timers
///
/// These are empirically chosen animation-timing values, not semantic
/// contracts; they exist as configuration precisely because no platform signal
/// derives them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Delay before scrolling the focused input into view, letting the
    /// keyboard-show animation begin first
    #[serde(default = "default_focus_scroll_delay_ms")]
    pub focus_scroll_delay_ms: u64,
    /// Retry interval while the content size is not yet known
    #[serde(default = "default_content_size_retry_ms")]
    pub content_size_retry_ms: u64,
    /// Delay before revealing a surface that started pre-scrolled
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
    /// Re-poll interval while waiting for a stable page-y measurement
    #[serde(default = "default_page_y_settle_ms")]
    pub page_y_settle_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            focus_scroll_delay_ms: default_focus_scroll_delay_ms(),
            content_size_retry_ms: default_content_size_retry_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
            page_y_settle_ms: default_page_y_settle_ms(),
        }
    }
}

impl TimingConfig {
    #[inline]
    pub fn focus_scroll_delay(&self) -> Duration {
        Duration::from_millis(self.focus_scroll_delay_ms)
    }

    #[inline]
    pub fn content_size_retry(&self) -> Duration {
        Duration::from_millis(self.content_size_retry_ms)
    }

    #[inline]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    #[inline]
    pub fn page_y_settle(&self) -> Duration {
        Duration::from_millis(self.page_y_settle_ms)
    }
}

fn default_extra_offset() -> f32 {
    75.0
}

fn default_focus_scroll_delay_ms() -> u64 {
    400
}

fn default_content_size_retry_ms() -> u64 {
    50
}

fn default_reveal_delay_ms() -> u64 {
    100
}

fn default_page_y_settle_ms() -> u64 {
    200
}
