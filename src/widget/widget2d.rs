use std::ops::Deref;

use crate::color::Color;
use crate::errors::{Result, VizError, precondition};
use crate::native::{Capabilities, Prop};

use super::{Widget, WidgetAccessor, capability_mismatch};

/// Widget whose prop is a screen-space overlay.
#[derive(Debug, Clone, Default)]
pub struct Widget2D {
    widget: Widget,
}

impl Widget2D {
    #[must_use]
    pub fn new() -> Self {
        Self { widget: Widget::new() }
    }

    /// Checked downcast; same aliasing rules as [`Widget3D::from_widget`](super::Widget3D::from_widget).
    #[track_caller]
    #[must_use]
    pub fn from_widget(widget: &Widget) -> Self {
        precondition(Self::try_from_widget(widget))
    }

    pub fn try_from_widget(widget: &Widget) -> Result<Self> {
        let prop = widget.require_prop()?;
        if prop.as_actor2d().is_none() {
            return Err(capability_mismatch(&prop, Capabilities::OVERLAY_2D));
        }

        let view = Self::new();
        log::debug!("widget #{} viewed as Widget2D #{}", widget.id(), view.id());
        WidgetAccessor::set_prop(&view.widget, prop);
        Ok(view)
    }

    /// Sets the overlay color. Only the color changes; overlays have no
    /// lighting model.
    #[track_caller]
    pub fn set_color(&self, color: Color) {
        precondition(self.try_set_color(color));
    }

    pub fn try_set_color(&self, color: Color) -> Result<()> {
        let prop = self.widget.require_prop()?;
        let actor = prop
            .as_actor2d()
            .ok_or_else(|| capability_mismatch(&prop, Capabilities::OVERLAY_2D))?;

        actor.overlay_property().write().color = color.to_rgb();
        actor.modified();
        Ok(())
    }
}

impl Deref for Widget2D {
    type Target = Widget;

    fn deref(&self) -> &Widget {
        &self.widget
    }
}

impl From<Widget2D> for Widget {
    fn from(view: Widget2D) -> Self {
        view.widget
    }
}

impl TryFrom<&Widget> for Widget2D {
    type Error = VizError;

    fn try_from(widget: &Widget) -> Result<Self> {
        Self::try_from_widget(widget)
    }
}

impl Widget {
    /// Checked downcast to a [`Widget2D`]. Panics if the prop is not an overlay.
    #[track_caller]
    #[must_use]
    pub fn as_widget2d(&self) -> Widget2D {
        Widget2D::from_widget(self)
    }

    pub fn try_as_widget2d(&self) -> Result<Widget2D> {
        Widget2D::try_from_widget(self)
    }
}
