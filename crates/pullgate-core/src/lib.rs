//! Gesture-driven refresh controller.
//!
//! Watches raw touch/pointer activity on a full-screen surface,
//! separates an intentional "pull down from the top" or "long hold"
//! from ordinary scrolling, tapping, and dialog interaction, and
//! dispatches a full application reload at most once per gesture.
//!
//! The crate owns gesture state only. Everything around it is a
//! collaborator: the host feeds events through an [`InputRoot`],
//! answers scroll position via [`ScrollProbe`], registers open dialogs
//! with the [`OverlayRegistry`], and hands over an opaque reload
//! action. A rendering surface subscribes read-only to the published
//! [`RefreshSignal`].
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use pullgate_core::prelude::*;
//!
//! struct AtTop;
//! impl ScrollProbe for AtTop {
//!     fn vertical_offset(&self) -> f32 {
//!         0.0
//!     }
//! }
//!
//! let overlays = OverlayRegistry::new();
//! let controller = RefreshController::new(
//!     ThresholdPolicy::default(),
//!     overlays.clone(),
//!     Rc::new(AtTop),
//!     || { /* irreversible reload */ },
//! );
//! let root = InputRoot::new();
//! controller.attach(&root);
//!
//! let finger = |kind, y| {
//!     PointerEvent::new(1, kind, PointerDevice::Touch, Point::new(40.0, y))
//! };
//! root.dispatch(&finger(PointerEventKind::Down, 0.0));
//! root.dispatch(&finger(PointerEventKind::Move, 225.0));
//! root.dispatch(&finger(PointerEventKind::Up, 225.0));
//!
//! assert!(controller.signal().is_refreshing());
//! ```

pub mod classifier;
pub mod controller;
pub mod dispatch;
pub mod labels;
pub mod long_press;
pub mod overlay;
pub mod pointer;
pub mod policy;
pub mod sampler;
pub mod session;
pub mod signal;
pub mod trigger;

pub use classifier::GestureClassifier;
pub use controller::RefreshController;
pub use dispatch::{HandlerId, InputRoot};
pub use labels::{EnglishLabels, LabelKey, LabelResolver};
pub use long_press::LongPressDetector;
pub use overlay::{OverlayGuard, OverlayId, OverlayRegistry};
pub use pointer::{Point, PointerDevice, PointerEvent, PointerEventKind, PointerId};
pub use policy::{SuppressionPolicy, ThresholdPolicy};
pub use sampler::{ScrollProbe, TouchSampler};
pub use session::{GesturePhase, GestureSession};
pub use signal::{ListenerId, RefreshSignal};
pub use trigger::RefreshTrigger;

pub mod prelude {
    pub use crate::controller::RefreshController;
    pub use crate::dispatch::InputRoot;
    pub use crate::labels::{LabelKey, LabelResolver};
    pub use crate::overlay::OverlayRegistry;
    pub use crate::pointer::{Point, PointerDevice, PointerEvent, PointerEventKind};
    pub use crate::policy::{SuppressionPolicy, ThresholdPolicy};
    pub use crate::sampler::ScrollProbe;
    pub use crate::signal::RefreshSignal;
}
