//! Long-press sub-detector for non-touch pointers.
//!
//! Runs independently of the pull state machine but shares its
//! [`crate::RefreshTrigger`], so a qualifying release racing an
//! expiring hold timer still dispatches a single reload.
//!
//! The timer is a deadline cell advanced by the host calling
//! [`LongPressDetector::tick`], not a background callback. The host
//! uses [`LongPressDetector::deadline`] for wait-until scheduling and
//! otherwise never polls.

use std::cell::Cell;
use std::rc::Rc;
use web_time::{Duration, Instant};

use crate::pointer::{PointerEvent, PointerEventKind, PointerId};
use crate::trigger::RefreshTrigger;

pub struct LongPressDetector {
    hold: Duration,
    trigger: Rc<RefreshTrigger>,
    deadline: Cell<Option<Instant>>,
    pointer: Cell<Option<PointerId>>,
}

impl LongPressDetector {
    pub fn new(hold: Duration, trigger: Rc<RefreshTrigger>) -> Self {
        Self {
            hold,
            trigger,
            deadline: Cell::new(None),
            pointer: Cell::new(None),
        }
    }

    /// Routes one pointer event. Down from a non-touch device arms the
    /// timer; every other event on the armed pointer clears it, so no
    /// exit path can leave a stale deadline behind.
    pub fn on_pointer_event(&self, event: &PointerEvent, now: Instant) {
        match event.kind {
            PointerEventKind::Down => {
                if event.device.is_touch() {
                    return;
                }
                self.deadline.set(Some(now + self.hold));
                self.pointer.set(Some(event.id));
            }
            PointerEventKind::Move | PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.pointer.get() == Some(event.id) {
                    self.clear();
                }
            }
        }
    }

    /// Disarms the timer. Idempotent; also called on detach.
    pub fn clear(&self) {
        self.deadline.set(None);
        self.pointer.set(None);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.get().is_some()
    }

    /// Next wake-up time for the host's wait-until loop.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.get()
    }

    /// Fires the shared trigger if an armed deadline has passed.
    /// Returns `true` when the trigger was invoked.
    pub fn tick(&self, now: Instant) -> bool {
        match self.deadline.get() {
            Some(deadline) if now >= deadline => {
                self.clear();
                self.trigger.fire();
                true
            }
            _ => false,
        }
    }
}
