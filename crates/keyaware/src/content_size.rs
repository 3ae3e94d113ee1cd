//! Asynchronous content-size tracking
//!
//! The scroll surface's content extent is only available through an async
//! platform query that may be absent, may resolve late, or may never resolve.
//! The tracker fires the query on a detached task and reports successful
//! measurements back into the coordinator loop; everything else is a silent
//! no-op.

use std::sync::Weak;

use tokio::sync::mpsc;
use tracing::trace;

use keyaware_core::{ScrollSurface, Size};

use crate::coordinator::CoordinatorEvent;

/// Queries the scroll surface's rendered content dimensions
#[derive(Clone)]
pub struct ContentSizeTracker {
    surface: Weak<dyn ScrollSurface>,
    query_available: bool,
}

impl ContentSizeTracker {
    pub fn new(surface: Weak<dyn ScrollSurface>, query_available: bool) -> Self {
        Self {
            surface,
            query_available,
        }
    }

    /// Kick off an async content-size query
    ///
    /// No-op if the capability is absent or the surface is unmounted. A query
    /// resolving `None` reports nothing, leaving the tracked size unchanged.
    pub fn refresh(&self, events: mpsc::UnboundedSender<CoordinatorEvent>) {
        if !self.query_available {
            return;
        }
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        tokio::spawn(async move {
            if let Some(size) = surface.content_size().await {
                trace!(width = size.width, height = size.height, "content size measured");
                let _ = events.send(CoordinatorEvent::ContentSizeMeasured(size));
            }
        });
    }

    /// Query once and wait for the result, `None` when unavailable
    pub async fn query(&self) -> Option<Size> {
        if !self.query_available {
            return None;
        }
        self.surface.upgrade()?.content_size().await
    }
}
