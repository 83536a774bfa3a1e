//! Composition root wiring the sampler, classifier, long-press
//! detector, and trigger into one attachable controller.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;
use web_time::Instant;

use crate::classifier::GestureClassifier;
use crate::dispatch::{HandlerId, InputRoot};
use crate::labels::{EnglishLabels, LabelKey, LabelResolver};
use crate::long_press::LongPressDetector;
use crate::overlay::OverlayRegistry;
use crate::policy::ThresholdPolicy;
use crate::sampler::{ScrollProbe, TouchSampler};
use crate::signal::RefreshSignal;
use crate::trigger::RefreshTrigger;

struct Attachment {
    root: InputRoot,
    handler: HandlerId,
}

/// Gesture-driven refresh controller.
///
/// Lifecycle: build, [`attach`](Self::attach) to the host's
/// [`InputRoot`], let the host call [`tick`](Self::tick) when the
/// [`next_deadline`](Self::next_deadline) passes, and
/// [`detach`](Self::detach) on teardown. Both lifecycle calls are
/// idempotent and safe from any state.
///
/// The controller decides *when* to reload, never what or how: the
/// reload action passed at construction is opaque and irreversible,
/// and dispatches at most once per controller lifetime.
pub struct RefreshController {
    policy: ThresholdPolicy,
    signal: Rc<RefreshSignal>,
    sampler: Rc<RefCell<TouchSampler>>,
    long_press: Option<Rc<LongPressDetector>>,
    labels: Rc<dyn LabelResolver>,
    attachment: RefCell<Option<Attachment>>,
}

impl RefreshController {
    pub fn new(
        policy: ThresholdPolicy,
        overlays: OverlayRegistry,
        scroll: Rc<dyn ScrollProbe>,
        reload: impl FnOnce() + 'static,
    ) -> Self {
        let signal = RefreshSignal::new();
        let trigger = RefreshTrigger::new(Rc::clone(&signal), overlays.clone(), reload);
        let classifier = GestureClassifier::new(policy, Rc::clone(&signal), Rc::clone(&trigger));
        let sampler = Rc::new(RefCell::new(TouchSampler::new(classifier, overlays, scroll)));
        let long_press = policy
            .long_press
            .map(|hold| Rc::new(LongPressDetector::new(hold, trigger)));
        Self {
            policy,
            signal,
            sampler,
            long_press,
            labels: Rc::new(EnglishLabels),
            attachment: RefCell::new(None),
        }
    }

    /// Replaces the built-in English strings with a host resolver.
    pub fn with_labels(mut self, labels: Rc<dyn LabelResolver>) -> Self {
        self.labels = labels;
        self
    }

    /// Registers the capture-phase handler. Repeated calls while
    /// attached are ignored.
    pub fn attach(&self, root: &InputRoot) {
        let mut attachment = self.attachment.borrow_mut();
        if attachment.is_some() {
            log::warn!("attach on an already attached refresh controller; ignoring");
            return;
        }
        let sampler = Rc::clone(&self.sampler);
        let long_press = self.long_press.clone();
        let handler = root.add_capture_handler(move |event| {
            if let Some(long_press) = &long_press {
                long_press.on_pointer_event(event, Instant::now());
            }
            sampler.borrow_mut().handle_event(event);
        });
        *attachment = Some(Attachment {
            root: root.clone(),
            handler,
        });
    }

    /// Removes the handler, disarms the hold timer, and drops any
    /// in-flight session without firing. Safe to call repeatedly and
    /// from any state.
    pub fn detach(&self) {
        if let Some(Attachment { root, handler }) = self.attachment.borrow_mut().take() {
            root.remove_handler(handler);
        }
        if let Some(long_press) = &self.long_press {
            long_press.clear();
        }
        self.sampler.borrow_mut().reset();
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.borrow().is_some()
    }

    /// Advances the long-press timer. Returns `true` when the hold
    /// qualified and the trigger was invoked.
    pub fn tick(&self, now: Instant) -> bool {
        self.long_press
            .as_ref()
            .map(|long_press| long_press.tick(now))
            .unwrap_or(false)
    }

    /// Next wake-up the host should schedule, if a hold is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.long_press
            .as_ref()
            .and_then(|long_press| long_press.deadline())
    }

    /// Published read-only state for the rendering surface.
    pub fn signal(&self) -> Rc<RefreshSignal> {
        Rc::clone(&self.signal)
    }

    /// Localised label matching the current signal state.
    pub fn current_label(&self) -> Cow<'static, str> {
        let key = LabelKey::for_state(
            self.signal.pull_distance(),
            self.policy.pull_threshold,
            self.signal.is_refreshing(),
        );
        self.labels.resolve(key)
    }
}

impl Drop for RefreshController {
    fn drop(&mut self) {
        self.detach();
    }
}
