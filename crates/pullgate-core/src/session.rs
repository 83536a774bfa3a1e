//! Per-gesture session state.

/// Lifecycle of a single gesture session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// A valid pointer is down; no effective pull yet.
    Tracking,
    /// The pull has passed the dead zone and a non-zero distance is
    /// being published.
    Pulling,
    /// Terminal: the gesture qualified on release and the trigger was
    /// invoked.
    Released,
    /// Terminal: the gesture is disqualified and ignores all further
    /// samples until the pointer lifts.
    Aborted,
}

/// State that exists only between gesture start and end/cancel.
///
/// The origin fields are captured once at creation and never change;
/// everything derived (the published distance) is recomputed from them
/// on each sample.
#[derive(Debug)]
pub struct GestureSession {
    origin_y: f32,
    origin_scroll_top: f32,
    suppressed: bool,
    phase: GesturePhase,
}

impl GestureSession {
    pub fn new(origin_y: f32, origin_scroll_top: f32, suppressed: bool) -> Self {
        Self {
            origin_y,
            origin_scroll_top,
            suppressed,
            phase: if suppressed {
                GesturePhase::Aborted
            } else {
                GesturePhase::Tracking
            },
        }
    }

    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    pub fn origin_scroll_top(&self) -> f32 {
        self.origin_scroll_top
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Still consuming samples (neither terminal state reached).
    pub fn is_live(&self) -> bool {
        matches!(self.phase, GesturePhase::Tracking | GesturePhase::Pulling)
    }

    /// Tracking → Pulling, once the first non-zero distance appears.
    pub fn mark_pulling(&mut self) {
        if self.phase == GesturePhase::Tracking {
            self.phase = GesturePhase::Pulling;
        }
    }

    pub fn mark_released(&mut self) {
        self.phase = GesturePhase::Released;
    }

    /// Disqualifies the session. Suppression is one-way: an aborted
    /// session never resumes within the same physical gesture.
    pub fn abort(&mut self) {
        self.suppressed = true;
        self.phase = GesturePhase::Aborted;
    }
}
