//! Widget Handle System
//!
//! A [`Widget`] is a cheap, clonable handle to one native renderable prop.
//!
//! # Design Principles
//! - All clones share one allocation through `Arc`; the allocation (and the
//!   handle's reference to the prop) is released when the last clone goes away
//! - The prop itself is owned by the rendering subsystem. Handles reference it,
//!   they never build it
//! - The prop reference is not part of the public handle: geometry builders
//!   and view conversions reach it through [`WidgetAccessor`]
//! - Typed views ([`Widget3D`], [`Widget2D`]) are checked downcasts that
//!   return a NEW handle around the SAME prop. The view and the original have
//!   independent reference counts
//!
//! # Example
//!
//! ```rust,ignore
//! let widget: Widget = build_cube();       // builder attached an Actor
//! let cube = widget.as_widget3d();         // panics if not placeable
//! cube.set_pose(&Affine3f::from_translation(Vec3::X));
//! cube.update_pose(&spin);                 // spin * current
//! ```

mod accessor;
pub mod convert;
pub mod properties;
mod widget2d;
mod widget3d;

#[cfg(feature = "native-access")]
pub use accessor::WidgetAccessor;
#[cfg(not(feature = "native-access"))]
pub(crate) use accessor::WidgetAccessor;

pub use convert::MatrixConverter;
pub use properties::{RenderingProperty, RenderingPropertyKind};
pub use widget2d::Widget2D;
pub use widget3d::Widget3D;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::errors::{Result, VizError};
use crate::native::{Capabilities, Prop, PropRef};

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Shared allocation behind every clone of a [`Widget`].
#[derive(Debug)]
struct WidgetInner {
    id: u64,
    prop: RwLock<Option<PropRef>>,
}

impl WidgetInner {
    fn new() -> Arc<Self> {
        let id = NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed);
        log::trace!("widget #{id} created");
        Arc::new(Self {
            id,
            prop: RwLock::new(None),
        })
    }
}

impl Drop for WidgetInner {
    fn drop(&mut self) {
        log::trace!("widget #{} released", self.id);
    }
}

/// Shared-ownership handle to a renderable prop.
///
/// Cloning increments an atomic count; dropping decrements it. Handles can
/// be cloned and dropped from any thread. Mutating the referenced prop from
/// several threads at once still needs external synchronization.
#[derive(Debug)]
pub struct Widget {
    inner: Arc<WidgetInner>,
}

impl Widget {
    /// Creates a handle with a fresh, empty allocation (no prop attached).
    #[must_use]
    pub fn new() -> Self {
        Self { inner: WidgetInner::new() }
    }

    /// Releases this handle's allocation and replaces it with a fresh, empty
    /// one. Other clones keep the previous allocation and its prop.
    pub fn recreate(&mut self) {
        self.inner = WidgetInner::new();
    }

    /// Diagnostic id of the shared allocation.
    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Number of handles sharing this allocation.
    #[inline]
    #[must_use]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether both handles share one allocation.
    #[inline]
    #[must_use]
    pub fn shares_impl(&self, other: &Widget) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Whether both handles reference the same native prop.
    #[must_use]
    pub fn shares_prop(&self, other: &Widget) -> bool {
        match (
            WidgetAccessor::prop(self),
            WidgetAccessor::prop(other),
        ) {
            (Some(a), Some(b)) => Arc::ptr_eq(&a, &b),
            _ => false,
        }
    }

    #[must_use]
    pub fn has_prop(&self) -> bool {
        self.inner.prop.read().is_some()
    }

    /// Capabilities of the attached prop; empty when none is attached.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        WidgetAccessor::prop(self).map_or_else(Capabilities::empty, |prop| prop.capabilities())
    }

    pub(crate) fn require_prop(&self) -> Result<PropRef> {
        WidgetAccessor::prop(self).ok_or(VizError::NoProp)
    }
}

impl Default for Widget {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Widget {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }

    /// Aliases `source`'s allocation, releasing the current one. A no-op when
    /// both already share an allocation.
    fn clone_from(&mut self, source: &Self) {
        if !self.shares_impl(source) {
            self.inner = Arc::clone(&source.inner);
        }
    }
}

pub(crate) fn capability_mismatch(prop: &PropRef, required: Capabilities) -> VizError {
    VizError::CapabilityMismatch {
        required,
        class: prop.class_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::{Actor, Actor2D, Assembly, TextActor};

    fn attached(prop: PropRef) -> Widget {
        let widget = Widget::new();
        WidgetAccessor::set_prop(&widget, prop);
        widget
    }

    // ========================================================================
    // Reference counting
    // ========================================================================

    #[test]
    fn test_new_widget_is_empty_with_count_one() {
        let widget = Widget::new();
        assert_eq!(widget.ref_count(), 1);
        assert!(!widget.has_prop());
        assert_eq!(widget.capabilities(), Capabilities::empty());
    }

    #[test]
    fn test_clone_shares_allocation() {
        let a = Widget::new();
        let b = a.clone();
        assert!(a.shares_impl(&b));
        assert_eq!(a.ref_count(), 2);

        drop(b);
        assert_eq!(a.ref_count(), 1);
    }

    #[test]
    fn test_allocation_released_after_last_clone() {
        let actor = Actor::shared();
        let a = attached(actor.clone());
        assert_eq!(Arc::strong_count(&actor), 2);

        let b = a.clone();
        let c = b.clone();
        assert_eq!(Arc::strong_count(&actor), 2);

        drop(a);
        drop(c);
        assert_eq!(Arc::strong_count(&actor), 2);

        drop(b);
        assert_eq!(Arc::strong_count(&actor), 1);
    }

    #[test]
    fn test_clone_from_releases_previous_allocation() {
        let first = Actor::shared();
        let second = Actor::shared();
        let mut a = attached(first.clone());
        let b = attached(second.clone());

        a.clone_from(&b);
        assert!(a.shares_impl(&b));
        assert_eq!(b.ref_count(), 2);
        assert_eq!(Arc::strong_count(&first), 1);
        assert_eq!(Arc::strong_count(&second), 2);
    }

    #[test]
    fn test_clone_from_same_allocation_is_noop() {
        let a = attached(Actor::shared());
        let mut b = a.clone();
        b.clone_from(&a);
        assert_eq!(a.ref_count(), 2);
        assert!(a.has_prop());
    }

    #[test]
    fn test_recreate_detaches_only_this_handle() {
        let a = attached(Actor::shared());
        let mut b = a.clone();
        b.recreate();

        assert!(!b.shares_impl(&a));
        assert!(!b.has_prop());
        assert_eq!(b.ref_count(), 1);
        assert_eq!(a.ref_count(), 1);
        assert!(a.has_prop());
    }

    #[test]
    fn test_concurrent_clone_and_drop() {
        let widget = attached(Actor::shared());
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let w = widget.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        let copy = w.clone();
                        drop(copy);
                    }
                })
            })
            .collect();

        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(widget.ref_count(), 1);
    }

    // ========================================================================
    // Accessor
    // ========================================================================

    #[test]
    fn test_set_prop_visible_through_clones() {
        let a = Widget::new();
        let b = a.clone();
        WidgetAccessor::set_prop(&a, Actor2D::shared());

        assert!(b.has_prop());
        assert!(a.shares_prop(&b));
        assert_eq!(b.capabilities(), Capabilities::OVERLAY_2D);
    }

    #[test]
    fn test_set_prop_replaces_previous() {
        let first = Actor::shared();
        let widget = attached(first.clone());
        WidgetAccessor::set_prop(&widget, Assembly::shared());

        assert_eq!(Arc::strong_count(&first), 1);
        assert_eq!(widget.capabilities(), Capabilities::PLACEMENT_3D);
    }

    #[test]
    fn test_get_prop_unset() {
        assert!(WidgetAccessor::prop(&Widget::new()).is_none());
        assert!(matches!(Widget::new().require_prop(), Err(VizError::NoProp)));
    }

    #[test]
    fn test_shares_prop_false_for_distinct_props() {
        let a = attached(TextActor::shared("a"));
        let b = attached(TextActor::shared("a"));
        assert!(!a.shares_prop(&b));
        assert!(!Widget::new().shares_prop(&Widget::new()));
    }
}
