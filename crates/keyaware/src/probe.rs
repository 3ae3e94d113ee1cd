//! Absolute-position probe for the wrapping view
//!
//! Layout can shift for a few frames after the keyboard or the surface's own
//! dimensions change, so a single measurement is not trustworthy. The probe
//! offers both a one-shot read and a settling read that re-polls until two
//! consecutive measurements agree.

use std::sync::Weak;
use std::time::Duration;

use tracing::trace;

use keyaware_core::MeasurableView;

/// Measures the wrapping view's vertical screen offset
#[derive(Clone)]
pub struct PositionProbe {
    view: Weak<dyn MeasurableView>,
}

impl PositionProbe {
    pub fn new(view: Weak<dyn MeasurableView>) -> Self {
        Self { view }
    }

    /// A probe with no view attached; every read yields zero
    pub fn detached() -> Self {
        let view: Weak<dyn MeasurableView> = Weak::<DetachedView>::new();
        Self { view }
    }

    /// Whether a live view is currently attached
    pub fn is_attached(&self) -> bool {
        self.view.strong_count() > 0
    }

    /// One-shot page-y read
    ///
    /// Resolves exactly once: `0.0` immediately if the view is unmounted, and
    /// a missing measurement also reads as `0.0` (one mobile OS reports a zero
    /// offset as absent rather than zero).
    pub async fn page_y(&self) -> f32 {
        match self.view.upgrade() {
            None => 0.0,
            Some(view) => view
                .measure()
                .await
                .map(|measurement| measurement.page_y)
                .unwrap_or(0.0),
        }
    }

    /// Re-measure every `interval` until two consecutive readings agree, then
    /// return the stable reading
    ///
    /// While the view is unmounted the probe keeps polling; callers run this
    /// on a task torn down with the coordinator.
    pub async fn settle(&self, interval: Duration) -> f32 {
        let mut last: Option<f32> = None;
        loop {
            if let Some(view) = self.view.upgrade() {
                if let Some(measurement) = view.measure().await {
                    let page_y = measurement.page_y;
                    if last == Some(page_y) {
                        return page_y;
                    }
                    trace!(page_y, "page-y reading changed, re-polling");
                    last = Some(page_y);
                }
            }
            tokio::time::sleep(interval).await;
        }
    }
}

struct DetachedView;

#[async_trait::async_trait]
impl MeasurableView for DetachedView {
    async fn measure(&self) -> Option<keyaware_core::ViewMeasurement> {
        None
    }
}
