//! Raw pointer event model consumed by the gesture controller.
//!
//! The host platform translates its native touch/mouse/pen events into
//! [`PointerEvent`]s and feeds them to an [`crate::InputRoot`]. The
//! controller never talks to a windowing system directly.

use crate::overlay::OverlayId;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Input device class that produced an event.
///
/// The pull gesture is device-agnostic; the long-press sub-detector
/// only arms for non-touch devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerDevice {
    Touch,
    Mouse,
    Pen,
}

impl PointerDevice {
    pub fn is_touch(self) -> bool {
        matches!(self, PointerDevice::Touch)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single pointer sample delivered to the capture-phase handlers.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub device: PointerDevice,
    pub position: Point,
    /// Registered overlay ancestor of the hit target, resolved by the
    /// host's hit test. `None` for targets outside any overlay and for
    /// null or foreign targets.
    pub overlay: Option<OverlayId>,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, device: PointerDevice, position: Point) -> Self {
        Self {
            id,
            kind,
            device,
            position,
            overlay: None,
        }
    }

    /// Tags the event with the overlay ancestor of its hit target.
    pub fn with_overlay(mut self, overlay: OverlayId) -> Self {
        self.overlay = Some(overlay);
        self
    }
}
