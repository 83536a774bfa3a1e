//! Robot testing harness for the refresh controller.
//!
//! Drives a fully wired [`RefreshController`] the way a host platform
//! would: synthesized pointer sequences go through the capture-phase
//! [`InputRoot`], time advances through `tick`, and assertions read
//! the published signal and a reload counter.
//!
//! # Example
//!
//! ```
//! use pullgate_core::ThresholdPolicy;
//! use pullgate_testing::GestureRobot;
//!
//! let robot = GestureRobot::new(ThresholdPolicy::default());
//! robot.pull(225.0);
//! assert_eq!(robot.reload_count(), 1);
//! ```

use std::cell::Cell;
use std::rc::Rc;
use web_time::{Duration, Instant};

use pullgate_core::{
    InputRoot, OverlayGuard, OverlayId, OverlayRegistry, Point, PointerDevice, PointerEvent,
    PointerEventKind, PointerId, RefreshController, RefreshSignal, ScrollProbe, ThresholdPolicy,
};

const PRIMARY_TOUCH: PointerId = 1;
const SECONDARY_TOUCH: PointerId = 2;
const MOUSE: PointerId = 10;

/// Scroll-position stub standing in for the scrollable root.
#[derive(Default)]
pub struct ScrollStub {
    top: Cell<f32>,
}

impl ScrollStub {
    pub fn set_top(&self, top: f32) {
        self.top.set(top);
    }
}

impl ScrollProbe for ScrollStub {
    fn vertical_offset(&self) -> f32 {
        self.top.get()
    }
}

/// Programmatic control over a wired-up refresh controller.
pub struct GestureRobot {
    root: InputRoot,
    controller: RefreshController,
    overlays: OverlayRegistry,
    scroll: Rc<ScrollStub>,
    reloads: Rc<Cell<usize>>,
    clock_offset: Cell<Duration>,
    last_touch: Cell<Point>,
    last_mouse: Cell<Point>,
}

impl GestureRobot {
    /// Builds and attaches a controller with the given policy. The
    /// reload action increments a counter instead of tearing anything
    /// down.
    pub fn new(policy: ThresholdPolicy) -> Self {
        let overlays = OverlayRegistry::new();
        let scroll = Rc::new(ScrollStub::default());
        let reloads = Rc::new(Cell::new(0));
        let sink = Rc::clone(&reloads);
        let controller = RefreshController::new(
            policy,
            overlays.clone(),
            Rc::clone(&scroll) as Rc<dyn ScrollProbe>,
            move || sink.set(sink.get() + 1),
        );
        let root = InputRoot::new();
        controller.attach(&root);
        Self {
            root,
            controller,
            overlays,
            scroll,
            reloads,
            clock_offset: Cell::new(Duration::ZERO),
            last_touch: Cell::new(Point::default()),
            last_mouse: Cell::new(Point::default()),
        }
    }

    // ------------------------------------------------------------------
    // Environment
    // ------------------------------------------------------------------

    /// Sets the scroll offset reported to the next gesture start.
    pub fn set_scroll_top(&self, top: f32) {
        self.scroll.set_top(top);
    }

    /// Opens a modal overlay; it stays open until the guard drops.
    #[must_use = "the overlay closes as soon as the guard is dropped"]
    pub fn open_overlay(&self) -> OverlayGuard {
        self.overlays.register()
    }

    /// Advances the fake clock and runs the controller's timer tick.
    /// Returns `true` if the long-press trigger fired.
    pub fn advance_ms(&self, millis: u64) -> bool {
        let offset = self.clock_offset.get() + Duration::from_millis(millis);
        self.clock_offset.set(offset);
        self.controller.tick(Instant::now() + offset)
    }

    // ------------------------------------------------------------------
    // Touch input
    // ------------------------------------------------------------------

    pub fn touch_down(&self, x: f32, y: f32) {
        self.touch_down_tagged(x, y, None);
    }

    /// Touch whose hit target sits inside the given overlay.
    pub fn touch_down_inside(&self, x: f32, y: f32, overlay: &OverlayGuard) {
        self.touch_down_tagged(x, y, Some(overlay.id()));
    }

    fn touch_down_tagged(&self, x: f32, y: f32, overlay: Option<OverlayId>) {
        let position = Point::new(x, y);
        self.last_touch.set(position);
        let mut event =
            PointerEvent::new(PRIMARY_TOUCH, PointerEventKind::Down, PointerDevice::Touch, position);
        event.overlay = overlay;
        self.root.dispatch(&event);
    }

    pub fn touch_move(&self, x: f32, y: f32) {
        let position = Point::new(x, y);
        self.last_touch.set(position);
        self.dispatch_touch(PRIMARY_TOUCH, PointerEventKind::Move, position);
    }

    pub fn touch_up(&self) {
        self.dispatch_touch(PRIMARY_TOUCH, PointerEventKind::Up, self.last_touch.get());
    }

    pub fn touch_cancel(&self) {
        self.dispatch_touch(PRIMARY_TOUCH, PointerEventKind::Cancel, self.last_touch.get());
    }

    pub fn second_finger_down(&self, x: f32, y: f32) {
        self.dispatch_touch(SECONDARY_TOUCH, PointerEventKind::Down, Point::new(x, y));
    }

    pub fn second_finger_up(&self) {
        self.dispatch_touch(SECONDARY_TOUCH, PointerEventKind::Up, Point::new(0.0, 0.0));
    }

    /// Full single-finger pull: down at the top, one move by
    /// `delta_y`, release.
    pub fn pull(&self, delta_y: f32) {
        self.touch_down(40.0, 0.0);
        self.touch_move(40.0, delta_y);
        self.touch_up();
    }

    fn dispatch_touch(&self, id: PointerId, kind: PointerEventKind, position: Point) {
        self.root
            .dispatch(&PointerEvent::new(id, kind, PointerDevice::Touch, position));
    }

    // ------------------------------------------------------------------
    // Mouse input
    // ------------------------------------------------------------------

    pub fn mouse_down(&self, x: f32, y: f32) {
        let position = Point::new(x, y);
        self.last_mouse.set(position);
        self.dispatch_mouse(PointerEventKind::Down, position);
    }

    pub fn mouse_move(&self, x: f32, y: f32) {
        let position = Point::new(x, y);
        self.last_mouse.set(position);
        self.dispatch_mouse(PointerEventKind::Move, position);
    }

    pub fn mouse_up(&self) {
        self.dispatch_mouse(PointerEventKind::Up, self.last_mouse.get());
    }

    fn dispatch_mouse(&self, kind: PointerEventKind, position: Point) {
        self.root
            .dispatch(&PointerEvent::new(MOUSE, kind, PointerDevice::Mouse, position));
    }

    // ------------------------------------------------------------------
    // Assertions and access
    // ------------------------------------------------------------------

    pub fn reload_count(&self) -> usize {
        self.reloads.get()
    }

    pub fn pull_distance(&self) -> f32 {
        self.controller.signal().pull_distance()
    }

    pub fn is_refreshing(&self) -> bool {
        self.controller.signal().is_refreshing()
    }

    pub fn signal(&self) -> Rc<RefreshSignal> {
        self.controller.signal()
    }

    pub fn controller(&self) -> &RefreshController {
        &self.controller
    }

    pub fn root(&self) -> &InputRoot {
        &self.root
    }
}
