//! Single-fire guard around the irreversible reload action.

use std::cell::Cell;
use std::rc::Rc;

use crate::overlay::OverlayRegistry;
use crate::signal::RefreshSignal;

/// Funnel for every path that can request a reload.
///
/// The pull classifier and the long-press detector both end here, so a
/// race between a qualifying release and an expiring hold timer can
/// never dispatch two reloads: the refresh flag latches first, and the
/// reload action itself is a `FnOnce` that is consumed on dispatch.
pub struct RefreshTrigger {
    signal: Rc<RefreshSignal>,
    overlays: OverlayRegistry,
    reload: Cell<Option<Box<dyn FnOnce()>>>,
}

impl RefreshTrigger {
    pub fn new(
        signal: Rc<RefreshSignal>,
        overlays: OverlayRegistry,
        reload: impl FnOnce() + 'static,
    ) -> Rc<Self> {
        Rc::new(Self {
            signal,
            overlays,
            reload: Cell::new(Some(Box::new(reload))),
        })
    }

    /// Dispatches the reload, at most once per controller lifetime.
    ///
    /// Silent no-op while a reload is already in flight, and while any
    /// overlay is open: a gesture that started clean must still not
    /// refresh under blocking UI.
    pub fn fire(&self) {
        if self.signal.is_refreshing() {
            return;
        }
        if self.overlays.is_overlay_open() {
            log::debug!("refresh suppressed: overlay open at fire time");
            return;
        }
        self.signal.mark_refreshing();
        if let Some(reload) = self.reload.take() {
            reload();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_trigger() -> (Rc<RefreshTrigger>, Rc<Cell<usize>>, OverlayRegistry) {
        let signal = RefreshSignal::new();
        let overlays = OverlayRegistry::new();
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        let trigger = RefreshTrigger::new(signal, overlays.clone(), move || {
            sink.set(sink.get() + 1);
        });
        (trigger, count, overlays)
    }

    #[test]
    fn fires_exactly_once() {
        let (trigger, count, _overlays) = counting_trigger();
        trigger.fire();
        trigger.fire();
        trigger.fire();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn open_overlay_vetoes_without_consuming_the_action() {
        let (trigger, count, overlays) = counting_trigger();

        let guard = overlays.register();
        trigger.fire();
        assert_eq!(count.get(), 0);

        drop(guard);
        trigger.fire();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn sets_the_refresh_flag_when_dispatching() {
        let signal = RefreshSignal::new();
        let observed = Rc::new(Cell::new(false));
        let sink = Rc::clone(&observed);
        let signal_for_reload = Rc::clone(&signal);
        let trigger = RefreshTrigger::new(
            Rc::clone(&signal),
            OverlayRegistry::new(),
            move || sink.set(signal_for_reload.is_refreshing()),
        );

        trigger.fire();

        // The flag is already up when the reload action runs.
        assert!(observed.get());
        assert!(signal.is_refreshing());
    }
}
