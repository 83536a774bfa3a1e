//! Capture-phase event root.
//!
//! Stands in for "listeners registered at the root of the element
//! tree, in the capture phase": the host funnels every raw pointer
//! event through [`InputRoot::dispatch`] before descendant widgets see
//! it, so gesture detection cannot be starved by a child stopping
//! propagation. Handler registration is scoped through [`HandlerId`]s
//! and released by the controller on detach.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::pointer::PointerEvent;

pub type HandlerId = u64;

type Handler = Rc<dyn Fn(&PointerEvent)>;

/// Shared handle to the capture-phase handler list. Clones observe the
/// same registrations.
#[derive(Clone, Default)]
pub struct InputRoot {
    inner: Rc<RootInner>,
}

#[derive(Default)]
struct RootInner {
    handlers: RefCell<Vec<(HandlerId, Handler)>>,
    next_id: Cell<HandlerId>,
}

impl InputRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_capture_handler(&self, handler: impl Fn(&PointerEvent) + 'static) -> HandlerId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .handlers
            .borrow_mut()
            .push((id, Rc::new(handler)));
        id
    }

    /// Removing an unknown id is a no-op, so teardown paths can call
    /// this unconditionally.
    pub fn remove_handler(&self, id: HandlerId) {
        self.inner.handlers.borrow_mut().retain(|(entry, _)| *entry != id);
    }

    pub fn handler_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }

    /// Delivers one event to every capture handler, synchronously, in
    /// registration order.
    pub fn dispatch(&self, event: &PointerEvent) {
        // Snapshot so a handler may detach itself during delivery.
        let handlers: Vec<Handler> = self
            .inner
            .handlers
            .borrow()
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::{Point, PointerDevice, PointerEventKind};

    fn event() -> PointerEvent {
        PointerEvent::new(1, PointerEventKind::Down, PointerDevice::Touch, Point::new(0.0, 0.0))
    }

    #[test]
    fn dispatch_reaches_handlers_in_registration_order() {
        let root = InputRoot::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&order);
        root.add_capture_handler(move |_| sink.borrow_mut().push("first"));
        let sink = Rc::clone(&order);
        root.add_capture_handler(move |_| sink.borrow_mut().push("second"));

        root.dispatch(&event());
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn removed_handlers_stop_receiving_events() {
        let root = InputRoot::new();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let id = root.add_capture_handler(move |_| sink.set(sink.get() + 1));

        root.dispatch(&event());
        root.remove_handler(id);
        root.dispatch(&event());

        assert_eq!(count.get(), 1);
        assert_eq!(root.handler_count(), 0);
    }

    #[test]
    fn removing_an_unknown_id_is_a_no_op() {
        let root = InputRoot::new();
        root.remove_handler(42);
    }

    #[test]
    fn handler_may_remove_itself_during_dispatch() {
        let root = InputRoot::new();
        let root_for_handler = root.clone();
        let id = Rc::new(Cell::new(0));
        let id_for_handler = Rc::clone(&id);
        id.set(root.add_capture_handler(move |_| {
            root_for_handler.remove_handler(id_for_handler.get());
        }));

        root.dispatch(&event());
        root.dispatch(&event());
        assert_eq!(root.handler_count(), 0);
    }
}
