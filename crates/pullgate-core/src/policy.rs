//! Tunable thresholds separating deliberate refresh gestures from
//! ordinary scrolling and accidental touches.
//!
//! These values are in logical pixels. For very high-density touch
//! screens, consider scaling by the device's DPI factor before
//! constructing the policy.

use web_time::Duration;

/// Initial downward movement ignored before any effective pull
/// accumulates.
///
/// Large enough to swallow finger jitter and the start of a normal
/// scroll, small enough that an intentional pull engages quickly.
pub const DEFAULT_DEAD_ZONE: f32 = 25.0;

/// Effective pull distance at which a release triggers a reload.
pub const DEFAULT_PULL_THRESHOLD: f32 = 95.0;

/// Maximum scroll offset at which a pull gesture can engage. A page
/// that is not at rest near the top is being scrolled, not pulled.
pub const DEFAULT_SCROLL_TOP_MAX: f32 = 2.0;

/// Scale factor applied to post-dead-zone movement, giving the pull a
/// slight resistance feel.
pub const DEFAULT_SENSITIVITY: f32 = 0.5;

/// Ceiling on the published pull distance.
pub const DEFAULT_DISTANCE_CAP: f32 = 100.0;

/// Hold duration for the long-press variant.
pub const DEFAULT_LONG_PRESS_MS: u64 = 1000;

/// When the overlay-open check that suppresses a gesture is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuppressionPolicy {
    /// Checked once at gesture start and held for the gesture's
    /// lifetime. A gesture that starts clean keeps tracking even if an
    /// overlay opens mid-pull; the trigger's final overlay check still
    /// vetoes the reload itself.
    Snapshot,
    /// Re-checked on every sample; an overlay opening mid-gesture
    /// aborts the in-flight session immediately.
    Live,
}

/// Immutable per-deployment gesture tuning.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdPolicy {
    pub dead_zone: f32,
    pub pull_threshold: f32,
    pub scroll_top_max: f32,
    pub sensitivity: f32,
    pub distance_cap: f32,
    /// Hold duration for the long-press sub-detector; `None` disables
    /// it entirely.
    pub long_press: Option<Duration>,
    pub suppression: SuppressionPolicy,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            pull_threshold: DEFAULT_PULL_THRESHOLD,
            scroll_top_max: DEFAULT_SCROLL_TOP_MAX,
            sensitivity: DEFAULT_SENSITIVITY,
            distance_cap: DEFAULT_DISTANCE_CAP,
            long_press: None,
            suppression: SuppressionPolicy::Snapshot,
        }
    }
}

impl ThresholdPolicy {
    /// Enables the long-press sub-detector with the default hold time.
    pub fn with_long_press(mut self) -> Self {
        self.long_press = Some(Duration::from_millis(DEFAULT_LONG_PRESS_MS));
        self
    }

    /// Effective pull distance for a raw downward movement.
    ///
    /// Movement inside the dead zone yields exactly 0; beyond it the
    /// distance grows linearly with `sensitivity` until it saturates
    /// at `distance_cap`. Never negative.
    pub fn effective_distance(&self, delta_y: f32) -> f32 {
        if delta_y <= self.dead_zone {
            return 0.0;
        }
        ((delta_y - self.dead_zone) * self.sensitivity).min(self.distance_cap)
    }
}
