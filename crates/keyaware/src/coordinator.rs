//! The keyboard-aware coordinator state machine
//!
//! One coordinator instance is bound 1:1 to one mounted scroll surface. It
//! owns all tracked geometry, consumes keyboard notifications and adapter
//! events through channels, and issues scroll commands back to the surface.
//! All state mutation happens inside `handle_event`/`handle_keyboard` on the
//! coordinator task; timers and async measurements are detached tasks that
//! report back through the event channel and silently stop mattering once the
//! surface or the coordinator is gone.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use keyaware_core::correction;
use keyaware_core::{
    FocusableInput, KeyboardAwareConfig, KeyboardEvent, MeasurableView, PlatformCapabilities,
    Point, Rect, ScrollSurface, Size,
};

use crate::content_size::ContentSizeTracker;
use crate::context::{lock, InputContext};
use crate::probe::PositionProbe;
use crate::registry::InputRegistry;

/// Events processed by the coordinator loop
///
/// Adapter handlers, input focus notifications, timer firings and async
/// measurement results all arrive through this one channel, so handlers run
/// to completion before the next queued event starts.
#[derive(Debug)]
pub enum CoordinatorEvent {
    /// The scroll surface was laid out
    Layout(Rect),
    /// The scroll surface scrolled to a new content offset
    Scroll(Point),
    /// The adapter requests a content-size refresh
    RefreshContentSize,
    /// An async content-size query resolved
    ContentSizeMeasured(Size),
    /// The page-y settle task obtained a stable reading
    PageYSettled { page_y: f32, generation: u64 },
    /// An input widget gained focus
    InputFocused(Weak<dyn FocusableInput>),
    /// The post-keyboard-show focus-scroll delay elapsed
    FocusScrollDue,
    /// Retry timer for a deferred scroll-to-bottom elapsed
    ScrollToBottomRetry { animated: bool },
    /// Reveal delay after a pre-scrolled start elapsed
    Reveal,
}

/// Read snapshot of the coordinator's tracked geometry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinatorSnapshot {
    /// Final keyboard height, `0.0` while hidden
    pub keyboard_height: f32,
    /// Laid-out size of the scroll surface
    pub dimensions: Option<Rect>,
    /// Current scroll position
    pub content_offset: Option<Point>,
    /// Measured content extent
    pub content_size: Option<Size>,
    /// Stable absolute vertical offset of the wrapping view
    pub page_y: Option<f32>,
}

/// Keyboard-aware scroll coordinator
///
/// Construct with [`KeyboardAwareCoordinator::new`], optionally attach a
/// keyboard event source and a measurable wrapper view, then spawn
/// [`run`](Self::run). The returned [`CoordinatorHandle`] is the adapter's
/// interface.
pub struct KeyboardAwareCoordinator {
    config: KeyboardAwareConfig,
    capabilities: PlatformCapabilities,
    surface: Weak<dyn ScrollSurface>,
    registry: Arc<Mutex<InputRegistry>>,
    probe: PositionProbe,
    tracker: ContentSizeTracker,
    state: CoordinatorSnapshot,
    settle_generation: u64,
    snapshot_tx: watch::Sender<CoordinatorSnapshot>,
    events_tx: mpsc::UnboundedSender<CoordinatorEvent>,
    events_rx: mpsc::UnboundedReceiver<CoordinatorEvent>,
    keyboard_rx: Option<mpsc::UnboundedReceiver<KeyboardEvent>>,
}

impl KeyboardAwareCoordinator {
    /// Create a coordinator bound to a scroll surface
    pub fn new(
        config: KeyboardAwareConfig,
        capabilities: PlatformCapabilities,
        surface: Weak<dyn ScrollSurface>,
    ) -> (Self, CoordinatorHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(CoordinatorSnapshot::default());
        let registry = Arc::new(Mutex::new(InputRegistry::new()));
        let tracker =
            ContentSizeTracker::new(surface.clone(), capabilities.content_size_query);

        let handle = CoordinatorHandle {
            events: events_tx.clone(),
            snapshot: snapshot_rx,
            registry: registry.clone(),
        };
        let coordinator = Self {
            config,
            capabilities,
            surface,
            registry,
            probe: PositionProbe::detached(),
            tracker,
            state: CoordinatorSnapshot::default(),
            settle_generation: 0,
            snapshot_tx,
            events_tx,
            events_rx,
            keyboard_rx: None,
        };
        (coordinator, handle)
    }

    /// Attach the platform's keyboard notification stream
    pub fn with_keyboard_events(mut self, rx: mpsc::UnboundedReceiver<KeyboardEvent>) -> Self {
        self.keyboard_rx = Some(rx);
        self
    }

    /// Attach the wrapping view used for absolute-position measurement
    pub fn with_wrapper_view(mut self, view: Weak<dyn MeasurableView>) -> Self {
        self.probe = PositionProbe::new(view);
        self
    }

    /// Run the coordinator until shutdown or until every event source closes
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        if !self.capabilities.keyboard_notifications {
            info!("Keyboard notifications unavailable, keyboard tracking disabled");
            self.keyboard_rx = None;
        } else if self.keyboard_rx.is_none() {
            info!("No keyboard event source attached, keyboard tracking disabled");
        } else {
            debug!("Keyboard-aware coordinator started");
        }

        if self.config.start_scrolled_to_bottom {
            self.scroll_to_bottom(false);
            self.schedule(self.config.timing.reveal_delay(), CoordinatorEvent::Reveal);
        }

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_ok() && *shutdown.borrow() {
                        debug!("Coordinator received shutdown signal");
                        break;
                    }
                    if result.is_err() {
                        break;
                    }
                }
                event = self.events_rx.recv() => {
                    match event {
                        Some(event) => self.handle_event(event),
                        None => break,
                    }
                }
                event = recv_keyboard(&mut self.keyboard_rx) => {
                    match event {
                        Some(event) => self.handle_keyboard(event),
                        None => self.keyboard_rx = None,
                    }
                }
            }
        }
        debug!("Keyboard-aware coordinator stopped");
    }

    fn handle_keyboard(&mut self, event: KeyboardEvent) {
        match event {
            KeyboardEvent::WillShow { height } => self.on_keyboard_will_show(height),
            KeyboardEvent::WillHide => self.on_keyboard_will_hide(),
        }
    }

    fn on_keyboard_will_show(&mut self, height: f32) {
        debug!(height, "Keyboard will show");
        if self.capabilities.scroll_to_keyboard {
            // Let the keyboard-show animation begin before revealing the input
            self.schedule(
                self.config.timing.focus_scroll_delay(),
                CoordinatorEvent::FocusScrollDue,
            );
        }

        // Idempotent re-entry guard: repeated notifications at the same
        // height change nothing and fire no redundant scroll.
        if self.state.keyboard_height == height {
            return;
        }
        self.state.keyboard_height = height;
        self.publish();
        self.respawn_page_y_settle();

        if self.config.scroll_to_bottom_on_keyboard_show {
            self.scroll_to_bottom(true);
        }
    }

    fn on_keyboard_will_hide(&mut self) {
        let prior_height = self.state.keyboard_height;
        debug!(prior_height, "Keyboard will hide");
        self.state.keyboard_height = 0.0;
        self.publish();
        self.respawn_page_y_settle();

        let target = correction::keyboard_hide_target(self.state.content_offset, prior_height);
        if let Some(surface) = self.surface.upgrade() {
            surface.scroll_to(target, true);
        }
    }

    fn handle_event(&mut self, event: CoordinatorEvent) {
        match event {
            CoordinatorEvent::Layout(layout) => {
                self.state.dimensions = Some(layout);
                self.state.content_offset = Some(Point::ZERO);
                self.publish();
                self.tracker.refresh(self.events_tx.clone());
                self.respawn_page_y_settle();
            }
            CoordinatorEvent::Scroll(offset) => {
                self.state.content_offset = Some(offset);
                self.publish();
                self.tracker.refresh(self.events_tx.clone());
            }
            CoordinatorEvent::RefreshContentSize => {
                self.tracker.refresh(self.events_tx.clone());
            }
            CoordinatorEvent::ContentSizeMeasured(size) => {
                self.state.content_size = Some(size);
                self.publish();
            }
            CoordinatorEvent::PageYSettled { page_y, generation } => {
                // A settle task restarted by a newer layout change supersedes
                // older in-flight readings.
                if generation == self.settle_generation {
                    self.state.page_y = Some(page_y);
                    self.publish();
                }
            }
            CoordinatorEvent::InputFocused(input) => {
                if self.capabilities.scroll_to_keyboard {
                    if let Some(input) = input.upgrade() {
                        self.scroll_input_above_keyboard(input);
                    }
                }
            }
            CoordinatorEvent::FocusScrollDue => self.scroll_to_focused_input(),
            CoordinatorEvent::ScrollToBottomRetry { animated } => {
                self.scroll_to_bottom(animated)
            }
            CoordinatorEvent::Reveal => {
                if let Some(surface) = self.surface.upgrade() {
                    surface.reveal();
                }
            }
        }
    }

    /// Scroll so the end of the content sits at the bottom of the viewport
    ///
    /// Best-effort convergent: with the content size still unknown the whole
    /// action is re-attempted on a fixed interval until a size arrives or the
    /// surface is torn down.
    fn scroll_to_bottom(&mut self, animated: bool) {
        let Some(surface) = self.surface.upgrade() else {
            return;
        };
        let Some(content) = self.state.content_size else {
            debug!(
                retry_ms = self.config.timing.content_size_retry_ms,
                "Content size unknown, deferring scroll to bottom"
            );
            self.schedule(
                self.config.timing.content_size_retry(),
                CoordinatorEvent::ScrollToBottomRetry { animated },
            );
            return;
        };
        let viewport = self.state.dimensions.map(|rect| rect.size()).unwrap_or_default();
        let target = correction::scroll_to_bottom_target(content, viewport, self.bottom_inset());
        surface.scroll_to(target, animated);
    }

    /// Scan the registry and reveal the first input reporting focused
    fn scroll_to_focused_input(&mut self) {
        if !self.capabilities.scroll_to_keyboard {
            return;
        }
        let focused = lock(&self.registry).focused_input();
        if let Some(input) = focused {
            self.scroll_input_above_keyboard(input);
        }
    }

    fn scroll_input_above_keyboard(&self, input: Arc<dyn FocusableInput>) {
        let surface = self.surface.clone();
        let probe = self.probe.clone();
        let cached_page_y = self.state.page_y;
        let extra_offset = self.config.scroll_to_input_extra_offset;
        tokio::spawn(async move {
            let page_y = match cached_page_y {
                Some(page_y) => page_y,
                None => probe.page_y().await,
            };
            // The surface may have unmounted while we were measuring
            let Some(surface) = surface.upgrade() else {
                return;
            };
            surface.scroll_input_to_keyboard(
                &input,
                correction::input_reveal_offset(extra_offset, page_y),
                true,
            );
        });
    }

    /// Restart the page-y settle task after a layout-affecting change
    fn respawn_page_y_settle(&mut self) {
        if !self.probe.is_attached() {
            return;
        }
        self.settle_generation += 1;
        let generation = self.settle_generation;
        let probe = self.probe.clone();
        let interval = self.config.timing.page_y_settle();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                page_y = probe.settle(interval) => {
                    let _ = events.send(CoordinatorEvent::PageYSettled { page_y, generation });
                }
                _ = events.closed() => {}
            }
        });
    }

    /// The bottom content inset the adapter applies while the keyboard is up
    fn bottom_inset(&self) -> f32 {
        self.state.keyboard_height
    }

    fn schedule(&self, delay: Duration, event: CoordinatorEvent) {
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(event);
        });
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.state);
    }
}

async fn recv_keyboard(
    rx: &mut Option<mpsc::UnboundedReceiver<KeyboardEvent>>,
) -> Option<KeyboardEvent> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Clone-able adapter interface to a running coordinator
///
/// Event sends into an already-stopped coordinator are silently dropped.
#[derive(Clone)]
pub struct CoordinatorHandle {
    events: mpsc::UnboundedSender<CoordinatorEvent>,
    snapshot: watch::Receiver<CoordinatorSnapshot>,
    registry: Arc<Mutex<InputRegistry>>,
}

impl CoordinatorHandle {
    /// The scroll surface was laid out
    pub fn on_layout(&self, layout: Rect) {
        let _ = self.events.send(CoordinatorEvent::Layout(layout));
    }

    /// The scroll surface scrolled
    pub fn on_scroll(&self, offset: Point) {
        let _ = self.events.send(CoordinatorEvent::Scroll(offset));
    }

    /// Ask for a fresh content-size measurement
    pub fn update_content_size(&self) {
        let _ = self.events.send(CoordinatorEvent::RefreshContentSize);
    }

    /// Current keyboard height, `0.0` while hidden
    ///
    /// Adapters use this for the bottom content inset and to decide whether
    /// user scrolling stays enabled.
    pub fn keyboard_height(&self) -> f32 {
        self.snapshot.borrow().keyboard_height
    }

    /// Diagnostics read-out of the tracked geometry
    pub fn snapshot(&self) -> CoordinatorSnapshot {
        *self.snapshot.borrow()
    }

    /// Context for input widgets mounted inside the surface
    pub fn input_context(&self) -> InputContext {
        InputContext::new(self.registry.clone(), self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use keyaware_core::ViewMeasurement;

    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        ScrollTo { y: f32, animated: bool },
        ScrollInputToKeyboard { offset_from_top: f32, animated: bool },
        Reveal,
    }

    struct RecordingSurface {
        commands: Arc<Mutex<Vec<Command>>>,
        content_size: Arc<Mutex<Option<Size>>>,
    }

    #[async_trait::async_trait]
    impl ScrollSurface for RecordingSurface {
        fn scroll_to(&self, offset: Point, animated: bool) {
            self.commands.lock().unwrap().push(Command::ScrollTo {
                y: offset.y,
                animated,
            });
        }

        fn scroll_input_to_keyboard(
            &self,
            _input: &Arc<dyn FocusableInput>,
            offset_from_top: f32,
            animated: bool,
        ) {
            self.commands
                .lock()
                .unwrap()
                .push(Command::ScrollInputToKeyboard {
                    offset_from_top,
                    animated,
                });
        }

        async fn content_size(&self) -> Option<Size> {
            *self.content_size.lock().unwrap()
        }

        fn reveal(&self) {
            self.commands.lock().unwrap().push(Command::Reveal);
        }
    }

    struct FocusedInput(bool);

    impl FocusableInput for FocusedInput {
        fn is_focused(&self) -> bool {
            self.0
        }
    }

    struct FixedWrapper {
        page_y: f32,
    }

    #[async_trait::async_trait]
    impl MeasurableView for FixedWrapper {
        async fn measure(&self) -> Option<ViewMeasurement> {
            Some(ViewMeasurement {
                page_y: self.page_y,
                ..Default::default()
            })
        }
    }

    struct Harness {
        surface: Arc<dyn ScrollSurface>,
        commands: Arc<Mutex<Vec<Command>>>,
        content_size: Arc<Mutex<Option<Size>>>,
        handle: CoordinatorHandle,
        keyboard: mpsc::UnboundedSender<KeyboardEvent>,
        _shutdown: watch::Sender<bool>,
        _wrapper: Option<Arc<dyn MeasurableView>>,
    }

    impl Harness {
        fn spawn(config: KeyboardAwareConfig, capabilities: PlatformCapabilities) -> Self {
            Self::spawn_with(config, capabilities, None)
        }

        fn spawn_with(
            config: KeyboardAwareConfig,
            capabilities: PlatformCapabilities,
            wrapper: Option<Arc<dyn MeasurableView>>,
        ) -> Self {
            let commands = Arc::new(Mutex::new(Vec::new()));
            let content_size = Arc::new(Mutex::new(None));
            let surface: Arc<dyn ScrollSurface> = Arc::new(RecordingSurface {
                commands: commands.clone(),
                content_size: content_size.clone(),
            });
            let (keyboard_tx, keyboard_rx) = mpsc::unbounded_channel();
            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            let (coordinator, handle) =
                KeyboardAwareCoordinator::new(config, capabilities, Arc::downgrade(&surface));
            let mut coordinator = coordinator.with_keyboard_events(keyboard_rx);
            if let Some(view) = &wrapper {
                coordinator = coordinator.with_wrapper_view(Arc::downgrade(view));
            }
            tokio::spawn(coordinator.run(shutdown_rx));

            Self {
                surface,
                commands,
                content_size,
                handle,
                keyboard: keyboard_tx,
                _shutdown: shutdown_tx,
                _wrapper: wrapper,
            }
        }

        fn scroll_tos(&self) -> Vec<Command> {
            self.commands
                .lock()
                .unwrap()
                .iter()
                .filter(|command| matches!(command, Command::ScrollTo { .. }))
                .cloned()
                .collect()
        }

        fn input_scrolls(&self) -> Vec<Command> {
            self.commands
                .lock()
                .unwrap()
                .iter()
                .filter(|command| matches!(command, Command::ScrollInputToKeyboard { .. }))
                .cloned()
                .collect()
        }
    }

    /// Let queued events and freshly spawned tasks run under paused time
    async fn drain() {
        for _ in 0..4 {
            tokio::time::sleep(Duration::from_millis(1)).await;
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_will_show_is_noop() {
        let config = KeyboardAwareConfig {
            scroll_to_bottom_on_keyboard_show: true,
            ..Default::default()
        };
        let harness = Harness::spawn(config, PlatformCapabilities::full());

        *harness.content_size.lock().unwrap() = Some(Size::new(375.0, 1000.0));
        harness.handle.on_layout(Rect::new(0.0, 0.0, 375.0, 600.0));
        drain().await;

        harness
            .keyboard
            .send(KeyboardEvent::WillShow { height: 250.0 })
            .unwrap();
        drain().await;
        // Cover a defer-and-retry round in case the size measurement landed
        // after the show notification
        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(harness.handle.keyboard_height(), 250.0);
        assert_eq!(
            harness.scroll_tos(),
            vec![Command::ScrollTo {
                y: 650.0,
                animated: true
            }]
        );

        // Same height again: state unchanged, no second scroll
        harness
            .keyboard
            .send(KeyboardEvent::WillShow { height: 250.0 })
            .unwrap();
        drain().await;
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(harness.handle.keyboard_height(), 250.0);
        assert_eq!(harness.scroll_tos().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_will_hide_rebounds_by_keyboard_height() {
        let harness = Harness::spawn(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::full(),
        );

        harness.handle.on_scroll(Point::new(0.0, 500.0));
        drain().await;
        harness
            .keyboard
            .send(KeyboardEvent::WillShow { height: 250.0 })
            .unwrap();
        drain().await;
        harness.keyboard.send(KeyboardEvent::WillHide).unwrap();
        drain().await;

        assert_eq!(harness.handle.keyboard_height(), 0.0);
        assert_eq!(
            harness.scroll_tos(),
            vec![Command::ScrollTo {
                y: 250.0,
                animated: true
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_will_hide_clamps_rebound_to_top() {
        let harness = Harness::spawn(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::full(),
        );

        harness.handle.on_scroll(Point::new(0.0, 100.0));
        drain().await;
        harness
            .keyboard
            .send(KeyboardEvent::WillShow { height: 250.0 })
            .unwrap();
        drain().await;
        harness.keyboard.send(KeyboardEvent::WillHide).unwrap();
        drain().await;

        assert_eq!(
            harness.scroll_tos(),
            vec![Command::ScrollTo {
                y: 0.0,
                animated: true
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_to_bottom_defers_until_content_size_known() {
        let config = KeyboardAwareConfig {
            start_scrolled_to_bottom: true,
            ..Default::default()
        };
        let harness = Harness::spawn(config, PlatformCapabilities::full());
        drain().await;

        // No content size yet: retries tick but nothing is issued
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(harness.scroll_tos().is_empty());
        // The reveal affordance still fired on schedule
        assert!(harness
            .commands
            .lock()
            .unwrap()
            .contains(&Command::Reveal));

        // Content size becomes available
        *harness.content_size.lock().unwrap() = Some(Size::new(375.0, 1000.0));
        harness.handle.on_layout(Rect::new(0.0, 0.0, 375.0, 600.0));
        drain().await;

        // The pending retry converges to exactly one unanimated command
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(
            harness.scroll_tos(),
            vec![Command::ScrollTo {
                y: 400.0,
                animated: false
            }]
        );
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(harness.scroll_tos().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_before_focus_scroll_timer() {
        let harness = Harness::spawn(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::full(),
        );
        let context = harness.handle.input_context();
        let input: Arc<dyn FocusableInput> = Arc::new(FocusedInput(true));
        let _registration = context.register(&input);

        harness
            .keyboard
            .send(KeyboardEvent::WillShow { height: 250.0 })
            .unwrap();
        drain().await;

        // Surface unmounts while the 400ms focus-scroll timer is pending
        drop(harness.surface);
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(harness.commands.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_focus_scroll_fires_after_show_delay() {
        let harness = Harness::spawn(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::full(),
        );
        let context = harness.handle.input_context();
        let blurred: Arc<dyn FocusableInput> = Arc::new(FocusedInput(false));
        let focused: Arc<dyn FocusableInput> = Arc::new(FocusedInput(true));
        let _keep_blurred = context.register(&blurred);
        let _keep_focused = context.register(&focused);

        harness
            .keyboard
            .send(KeyboardEvent::WillShow { height: 250.0 })
            .unwrap();
        drain().await;
        assert!(harness.input_scrolls().is_empty());

        tokio::time::sleep(Duration::from_millis(450)).await;
        // No wrapper view attached: page-y reads as zero, leaving the
        // configured extra offset
        assert_eq!(
            harness.input_scrolls(),
            vec![Command::ScrollInputToKeyboard {
                offset_from_top: 75.0,
                animated: true
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_notify_focus_scrolls_input() {
        let harness = Harness::spawn(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::full(),
        );
        let context = harness.handle.input_context();
        let input: Arc<dyn FocusableInput> = Arc::new(FocusedInput(true));
        let _registration = context.register(&input);

        context.notify_focus(Arc::downgrade(&input));
        drain().await;

        assert_eq!(
            harness.input_scrolls(),
            vec![Command::ScrollInputToKeyboard {
                offset_from_top: 75.0,
                animated: true
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_page_y_feeds_focus_scroll() {
        let wrapper: Arc<dyn MeasurableView> = Arc::new(FixedWrapper { page_y: 40.0 });
        let harness = Harness::spawn_with(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::full(),
            Some(wrapper),
        );
        let context = harness.handle.input_context();
        let input: Arc<dyn FocusableInput> = Arc::new(FocusedInput(true));
        let _registration = context.register(&input);

        harness.handle.on_layout(Rect::new(0.0, 0.0, 375.0, 600.0));
        // One settle re-poll interval until the reading repeats
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(harness.handle.snapshot().page_y, Some(40.0));

        context.notify_focus(Arc::downgrade(&input));
        drain().await;

        assert_eq!(
            harness.input_scrolls(),
            vec![Command::ScrollInputToKeyboard {
                offset_from_top: 115.0,
                animated: true
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_scroll_to_keyboard_capability_absent() {
        let capabilities = PlatformCapabilities {
            scroll_to_keyboard: false,
            ..PlatformCapabilities::full()
        };
        let harness = Harness::spawn(KeyboardAwareConfig::default(), capabilities);
        let context = harness.handle.input_context();
        let input: Arc<dyn FocusableInput> = Arc::new(FocusedInput(true));
        let _registration = context.register(&input);

        context.notify_focus(Arc::downgrade(&input));
        harness
            .keyboard
            .send(KeyboardEvent::WillShow { height: 250.0 })
            .unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(harness.input_scrolls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_keyboard_notifications_capability_absent() {
        let harness = Harness::spawn(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::none(),
        );

        // The coordinator drops the receiver at startup; the send may fail
        let _ = harness
            .keyboard
            .send(KeyboardEvent::WillShow { height: 250.0 });
        drain().await;

        assert_eq!(harness.handle.keyboard_height(), 0.0);
        assert!(harness.commands.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_layout_resets_offset_and_tracks_dimensions() {
        let harness = Harness::spawn(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::full(),
        );

        harness.handle.on_scroll(Point::new(0.0, 320.0));
        drain().await;
        assert_eq!(
            harness.handle.snapshot().content_offset,
            Some(Point::new(0.0, 320.0))
        );

        harness.handle.on_layout(Rect::new(0.0, 0.0, 375.0, 600.0));
        drain().await;

        let snapshot = harness.handle.snapshot();
        assert_eq!(snapshot.dimensions, Some(Rect::new(0.0, 0.0, 375.0, 600.0)));
        assert_eq!(snapshot.content_offset, Some(Point::ZERO));
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_content_size_handler() {
        let harness = Harness::spawn(
            KeyboardAwareConfig::default(),
            PlatformCapabilities::full(),
        );

        *harness.content_size.lock().unwrap() = Some(Size::new(375.0, 900.0));
        harness.handle.update_content_size();
        drain().await;

        assert_eq!(
            harness.handle.snapshot().content_size,
            Some(Size::new(375.0, 900.0))
        );
    }
}
