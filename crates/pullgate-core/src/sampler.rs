//! Converts the raw pointer stream into a clean per-gesture sample
//! stream for the classifier.
//!
//! The sampler enforces the single-session rule: exactly one gesture
//! session may be live, a second concurrent pointer aborts it, and an
//! aborted session swallows every later sample of the same physical
//! gesture.

use smallvec::SmallVec;
use std::rc::Rc;

use crate::classifier::GestureClassifier;
use crate::overlay::OverlayRegistry;
use crate::pointer::{PointerEvent, PointerEventKind, PointerId};
use crate::policy::SuppressionPolicy;
use crate::session::GesturePhase;

/// Reads the current vertical offset of the scrollable root.
///
/// Implemented by the host; queried once per gesture, at start.
pub trait ScrollProbe {
    fn vertical_offset(&self) -> f32;
}

pub struct TouchSampler {
    classifier: GestureClassifier,
    overlays: OverlayRegistry,
    scroll: Rc<dyn ScrollProbe>,
    /// Pointers currently down, in arrival order. Two slots inline:
    /// anything past the second finger is already a multi-touch abort.
    active: SmallVec<[PointerId; 2]>,
    gesture_pointer: Option<PointerId>,
}

impl TouchSampler {
    pub fn new(
        classifier: GestureClassifier,
        overlays: OverlayRegistry,
        scroll: Rc<dyn ScrollProbe>,
    ) -> Self {
        Self {
            classifier,
            overlays,
            scroll,
            active: SmallVec::new(),
            gesture_pointer: None,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.classifier.phase()
    }

    pub fn handle_event(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_up(event),
        }
    }

    /// Drops any in-flight session without firing. Used on detach.
    pub fn reset(&mut self) {
        self.classifier.on_abort();
        self.classifier.on_cancel();
        self.active.clear();
        self.gesture_pointer = None;
    }

    fn on_down(&mut self, event: &PointerEvent) {
        if self.active.contains(&event.id) {
            // Unbalanced stream: a pointer went down twice without
            // lifting. Keep the existing session.
            return;
        }
        self.active.push(event.id);
        if self.active.len() > 1 {
            // Transition to multi-touch disqualifies the gesture; the
            // extra pointer never starts a session of its own.
            log::trace!("multi-touch: aborting gesture session");
            self.classifier.on_abort();
            return;
        }
        self.gesture_pointer = Some(event.id);
        let suppressed = match self.classifier.policy().suppression {
            SuppressionPolicy::Snapshot => {
                self.overlays.is_overlay_open() || self.overlays.is_inside_overlay(event.overlay)
            }
            // Left pending; re-evaluated on every move sample.
            SuppressionPolicy::Live => false,
        };
        self.classifier
            .on_start(event.position.y, self.scroll.vertical_offset(), suppressed);
    }

    fn on_move(&mut self, event: &PointerEvent) {
        if self.gesture_pointer != Some(event.id) || self.active.len() != 1 {
            return;
        }
        let overlay_open = match self.classifier.policy().suppression {
            SuppressionPolicy::Live => self.overlays.is_overlay_open(),
            // Never queried per-sample under the snapshot policy.
            SuppressionPolicy::Snapshot => false,
        };
        self.classifier.on_move(event.position.y, overlay_open);
    }

    fn on_up(&mut self, event: &PointerEvent) {
        self.active.retain(|id| *id != event.id);
        if self.gesture_pointer != Some(event.id) {
            return;
        }
        self.gesture_pointer = None;
        match event.kind {
            PointerEventKind::Cancel => self.classifier.on_cancel(),
            _ => self.classifier.on_end(),
        }
    }
}
