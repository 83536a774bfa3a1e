//! Gesture state machine: consumes the sampler's per-gesture stream,
//! publishes the pull distance, and fires the trigger on a qualifying
//! release.

use std::rc::Rc;

use crate::policy::{SuppressionPolicy, ThresholdPolicy};
use crate::session::{GesturePhase, GestureSession};
use crate::signal::RefreshSignal;
use crate::trigger::RefreshTrigger;

pub struct GestureClassifier {
    policy: ThresholdPolicy,
    signal: Rc<RefreshSignal>,
    trigger: Rc<RefreshTrigger>,
    session: Option<GestureSession>,
}

impl GestureClassifier {
    pub fn new(
        policy: ThresholdPolicy,
        signal: Rc<RefreshSignal>,
        trigger: Rc<RefreshTrigger>,
    ) -> Self {
        Self {
            policy,
            signal,
            trigger,
            session: None,
        }
    }

    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    pub fn phase(&self) -> GesturePhase {
        self.session
            .as_ref()
            .map(|session| session.phase())
            .unwrap_or(GesturePhase::Idle)
    }

    /// Opens a new session. The published distance resets to 0 for
    /// every start, qualifying or not.
    pub fn on_start(&mut self, origin_y: f32, origin_scroll_top: f32, suppressed: bool) {
        if self.session.is_some() {
            // The sampler rejects concurrent starts; a leftover session
            // here means an unbalanced event stream. Drop it.
            log::warn!("gesture start with a session still live; discarding the old session");
        }
        self.signal.set_pull_distance(0.0);
        self.session = Some(GestureSession::new(origin_y, origin_scroll_top, suppressed));
        log::trace!(
            "gesture start: origin_y={origin_y} scroll_top={origin_scroll_top} suppressed={suppressed}"
        );
    }

    /// Feeds one movement sample. `overlay_open` is only consulted
    /// under the live suppression policy.
    pub fn on_move(&mut self, y: f32, overlay_open: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.is_live() {
            return;
        }
        if self.policy.suppression == SuppressionPolicy::Live && overlay_open {
            session.abort();
            self.signal.set_pull_distance(0.0);
            log::trace!("gesture aborted: overlay opened mid-pull");
            return;
        }
        // The pull never engages if the page was not at rest at the top
        // when the gesture began.
        if session.origin_scroll_top() > self.policy.scroll_top_max {
            return;
        }
        let distance = self.policy.effective_distance(y - session.origin_y());
        if distance > 0.0 {
            session.mark_pulling();
        }
        self.signal.set_pull_distance(distance);
    }

    /// Multi-touch (or any other mid-gesture disqualification) kills
    /// the session without a trigger.
    pub fn on_abort(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.abort();
            self.signal.set_pull_distance(0.0);
        }
    }

    pub fn on_end(&mut self) {
        self.finish();
    }

    pub fn on_cancel(&mut self) {
        self.finish();
    }

    /// Closes the session: fires the trigger when the gesture was live,
    /// unsuppressed, and past the threshold; always resets the
    /// published distance.
    fn finish(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        let distance = self.signal.pull_distance();
        if session.is_live() && !session.is_suppressed() && distance >= self.policy.pull_threshold {
            session.mark_released();
            log::trace!("gesture released at distance {distance}; firing trigger");
            self.trigger.fire();
        }
        self.signal.set_pull_distance(0.0);
    }
}
