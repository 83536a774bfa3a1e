//! Published gesture state consumed read-only by the rendering layer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type ListenerId = u64;

/// The controller's externally visible state: the current pull
/// distance in `[0, distance_cap]` and the process-wide refresh flag.
///
/// Updated synchronously on every accepted sample and on trigger.
/// The refresh flag is set true exactly once, when a reload actually
/// dispatches, and never resets for the lifetime of the controller.
#[derive(Default)]
pub struct RefreshSignal {
    pull_distance: Cell<f32>,
    is_refreshing: Cell<bool>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn(&RefreshSignal)>)>>,
    next_listener: Cell<ListenerId>,
}

impl RefreshSignal {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pull_distance(&self) -> f32 {
        self.pull_distance.get()
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing.get()
    }

    /// Registers a change listener, invoked synchronously after every
    /// published change. Returns an id for [`Self::unsubscribe`].
    pub fn subscribe(&self, listener: impl Fn(&RefreshSignal) + 'static) -> ListenerId {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(entry, _)| *entry != id);
    }

    pub(crate) fn set_pull_distance(&self, distance: f32) {
        if self.pull_distance.get() == distance {
            return;
        }
        self.pull_distance.set(distance);
        self.notify();
    }

    pub(crate) fn mark_refreshing(&self) {
        if self.is_refreshing.get() {
            return;
        }
        self.is_refreshing.set(true);
        self.notify();
    }

    fn notify(&self) {
        // Snapshot the listener list so a listener may subscribe or
        // unsubscribe from inside its callback.
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let signal = RefreshSignal::new();
        assert_eq!(signal.pull_distance(), 0.0);
        assert!(!signal.is_refreshing());
    }

    #[test]
    fn listeners_observe_distance_changes() {
        let signal = RefreshSignal::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        signal.subscribe(move |signal| sink.borrow_mut().push(signal.pull_distance()));

        signal.set_pull_distance(10.0);
        signal.set_pull_distance(10.0); // unchanged, no notification
        signal.set_pull_distance(0.0);

        assert_eq!(*seen.borrow(), vec![10.0, 0.0]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let signal = RefreshSignal::new();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let id = signal.subscribe(move |_| sink.set(sink.get() + 1));

        signal.set_pull_distance(5.0);
        signal.unsubscribe(id);
        signal.set_pull_distance(15.0);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn refreshing_latches_and_notifies_once() {
        let signal = RefreshSignal::new();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        signal.subscribe(move |_| sink.set(sink.get() + 1));

        signal.mark_refreshing();
        signal.mark_refreshing();

        assert!(signal.is_refreshing());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn listener_may_unsubscribe_itself_during_dispatch() {
        let signal = RefreshSignal::new();
        let signal_for_listener = Rc::clone(&signal);
        let id = Rc::new(Cell::new(0));
        let id_for_listener = Rc::clone(&id);
        id.set(signal.subscribe(move |_| {
            signal_for_listener.unsubscribe(id_for_listener.get());
        }));

        signal.set_pull_distance(1.0);
        signal.set_pull_distance(2.0);
    }
}
