//! Constant-time overlay presence registry.
//!
//! Instead of scanning the element tree for open dialogs on every
//! query, overlay components announce themselves here on activation
//! and withdraw on deactivation. Registration is scoped: dropping the
//! returned [`OverlayGuard`] withdraws the overlay, so a dialog that
//! unwinds early can never leave a stale "blocking UI" flag behind.

use rustc_hash::FxHashSet;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identity of a registered overlay, used to tag pointer events whose
/// hit target lives inside that overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

/// Shared handle to the overlay registry. Cloning is cheap; all clones
/// observe the same set of open overlays.
#[derive(Clone, Default)]
pub struct OverlayRegistry {
    inner: Rc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    open: RefCell<FxHashSet<OverlayId>>,
    next_id: Cell<u64>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announces an overlay. The overlay counts as open until the
    /// returned guard is dropped.
    #[must_use = "the overlay is withdrawn as soon as the guard is dropped"]
    pub fn register(&self) -> OverlayGuard {
        let id = OverlayId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.open.borrow_mut().insert(id);
        OverlayGuard {
            registry: Rc::clone(&self.inner),
            id,
        }
    }

    /// Whether any overlay is currently blocking gestures.
    pub fn is_overlay_open(&self) -> bool {
        !self.inner.open.borrow().is_empty()
    }

    /// Whether a hit target sits inside a still-open overlay.
    ///
    /// `None` (null or foreign targets) and ids whose overlay has
    /// already been withdrawn both resolve to `false`.
    pub fn is_inside_overlay(&self, overlay: Option<OverlayId>) -> bool {
        match overlay {
            Some(id) => self.inner.open.borrow().contains(&id),
            None => false,
        }
    }
}

/// Scoped overlay registration. Withdraws the overlay on drop.
pub struct OverlayGuard {
    registry: Rc<RegistryInner>,
    id: OverlayId,
}

impl OverlayGuard {
    /// Id the host uses to tag pointer events hitting this overlay.
    pub fn id(&self) -> OverlayId {
        self.id
    }
}

impl Drop for OverlayGuard {
    fn drop(&mut self) {
        self.registry.open.borrow_mut().remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_closed() {
        let registry = OverlayRegistry::new();
        assert!(!registry.is_overlay_open());
    }

    #[test]
    fn register_opens_and_drop_closes() {
        let registry = OverlayRegistry::new();
        let guard = registry.register();
        assert!(registry.is_overlay_open());
        drop(guard);
        assert!(!registry.is_overlay_open());
    }

    #[test]
    fn stays_open_while_any_overlay_remains() {
        let registry = OverlayRegistry::new();
        let first = registry.register();
        let second = registry.register();
        drop(first);
        assert!(registry.is_overlay_open());
        drop(second);
        assert!(!registry.is_overlay_open());
    }

    #[test]
    fn inside_overlay_resolves_null_and_stale_targets_to_false() {
        let registry = OverlayRegistry::new();
        assert!(!registry.is_inside_overlay(None));

        let guard = registry.register();
        let id = guard.id();
        assert!(registry.is_inside_overlay(Some(id)));

        drop(guard);
        assert!(!registry.is_inside_overlay(Some(id)));
    }

    #[test]
    fn clones_share_one_open_set() {
        let registry = OverlayRegistry::new();
        let view = registry.clone();
        let _guard = registry.register();
        assert!(view.is_overlay_open());
    }
}
