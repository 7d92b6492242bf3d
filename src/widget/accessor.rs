use crate::native::PropRef;

use super::Widget;

/// Privileged access to the native prop behind a [`Widget`].
///
/// Only geometry builders and view conversions should attach or read props;
/// application code goes through the typed views.
pub struct WidgetAccessor;

impl WidgetAccessor {
    /// Prop stored in the widget's shared allocation, if one was attached.
    #[must_use]
    pub fn prop(widget: &Widget) -> Option<PropRef> {
        widget.inner.prop.read().clone()
    }

    /// Stores `prop` in the widget's shared allocation, replacing any previous
    /// one. Every clone sharing the allocation sees the new prop.
    pub fn set_prop(widget: &Widget, prop: PropRef) {
        log::debug!("widget #{} attached to {}", widget.inner.id, prop.class_name());
        *widget.inner.prop.write() = Some(prop);
    }
}
