//! Rendering properties shared by all widget kinds.
//!
//! | Property             | Surface actor | Overlay | Text overlay |
//! |----------------------|---------------|---------|--------------|
//! | `PointSize`          | ✅            | ✅      | ✅           |
//! | `LineWidth`          | ✅            | ✅      | ✅           |
//! | `Opacity`            | ✅            | ✅      | ✅           |
//! | `Representation`     | ✅            | ❌      | ❌           |
//! | `Shading`            | ✅            | ❌      | ❌           |
//! | `ImmediateRendering` | ✅            | ❌      | ❌           |
//! | `FontSize`           | ❌            | ❌      | ✅           |

use crate::errors::{Result, VizError, precondition};
use crate::native::{Capabilities, Interpolation, Prop, PropRef, Representation, SurfaceActor};

use super::{Widget, capability_mismatch};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderingProperty {
    PointSize(f32),
    LineWidth(f32),
    Opacity(f64),
    FontSize(u32),
    Representation(Representation),
    Shading(Interpolation),
    ImmediateRendering(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderingPropertyKind {
    PointSize,
    LineWidth,
    Opacity,
    FontSize,
    Representation,
    Shading,
    ImmediateRendering,
}

impl RenderingProperty {
    #[must_use]
    pub fn kind(self) -> RenderingPropertyKind {
        match self {
            Self::PointSize(_) => RenderingPropertyKind::PointSize,
            Self::LineWidth(_) => RenderingPropertyKind::LineWidth,
            Self::Opacity(_) => RenderingPropertyKind::Opacity,
            Self::FontSize(_) => RenderingPropertyKind::FontSize,
            Self::Representation(_) => RenderingPropertyKind::Representation,
            Self::Shading(_) => RenderingPropertyKind::Shading,
            Self::ImmediateRendering(_) => RenderingPropertyKind::ImmediateRendering,
        }
    }
}

impl RenderingPropertyKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PointSize => "point_size",
            Self::LineWidth => "line_width",
            Self::Opacity => "opacity",
            Self::FontSize => "font_size",
            Self::Representation => "representation",
            Self::Shading => "shading",
            Self::ImmediateRendering => "immediate_rendering",
        }
    }
}

fn surface(prop: &PropRef) -> Result<&dyn SurfaceActor> {
    prop.as_actor()
        .ok_or_else(|| capability_mismatch(prop, Capabilities::SURFACE))
}

fn unsupported(prop: &PropRef, kind: RenderingPropertyKind) -> VizError {
    VizError::UnsupportedProperty {
        property: kind.name(),
        class: prop.class_name(),
    }
}

impl Widget {
    #[track_caller]
    pub fn set_rendering_property(&self, property: RenderingProperty) {
        precondition(self.try_set_rendering_property(property));
    }

    pub fn try_set_rendering_property(&self, property: RenderingProperty) -> Result<()> {
        let prop = self.require_prop()?;

        match property {
            RenderingProperty::PointSize(size) => {
                if let Some(actor) = prop.as_actor() {
                    actor.property().write().point_size = size;
                } else if let Some(overlay) = prop.as_actor2d() {
                    overlay.overlay_property().write().point_size = size;
                } else {
                    return Err(unsupported(&prop, property.kind()));
                }
            }
            RenderingProperty::LineWidth(width) => {
                if let Some(actor) = prop.as_actor() {
                    actor.property().write().line_width = width;
                } else if let Some(overlay) = prop.as_actor2d() {
                    overlay.overlay_property().write().line_width = width;
                } else {
                    return Err(unsupported(&prop, property.kind()));
                }
            }
            RenderingProperty::Opacity(opacity) => {
                if let Some(actor) = prop.as_actor() {
                    actor.property().write().opacity = opacity;
                } else if let Some(overlay) = prop.as_actor2d() {
                    overlay.overlay_property().write().opacity = opacity;
                } else {
                    return Err(unsupported(&prop, property.kind()));
                }
            }
            RenderingProperty::FontSize(size) => {
                let text = prop
                    .as_text_actor()
                    .ok_or_else(|| capability_mismatch(&prop, Capabilities::TEXT))?;
                text.text_property().write().font_size = size;
            }
            RenderingProperty::Representation(representation) => {
                surface(&prop)?.property().write().representation = representation;
            }
            RenderingProperty::Shading(interpolation) => {
                surface(&prop)?.property().write().interpolation = interpolation;
            }
            RenderingProperty::ImmediateRendering(enabled) => {
                surface(&prop)?.mapper().write().immediate_mode_rendering = enabled;
            }
        }

        prop.modified();
        Ok(())
    }

    #[track_caller]
    #[must_use]
    pub fn rendering_property(&self, kind: RenderingPropertyKind) -> RenderingProperty {
        precondition(self.try_rendering_property(kind))
    }

    pub fn try_rendering_property(&self, kind: RenderingPropertyKind) -> Result<RenderingProperty> {
        let prop = self.require_prop()?;

        let value = match kind {
            RenderingPropertyKind::PointSize => {
                if let Some(actor) = prop.as_actor() {
                    RenderingProperty::PointSize(actor.property().read().point_size)
                } else if let Some(overlay) = prop.as_actor2d() {
                    RenderingProperty::PointSize(overlay.overlay_property().read().point_size)
                } else {
                    return Err(unsupported(&prop, kind));
                }
            }
            RenderingPropertyKind::LineWidth => {
                if let Some(actor) = prop.as_actor() {
                    RenderingProperty::LineWidth(actor.property().read().line_width)
                } else if let Some(overlay) = prop.as_actor2d() {
                    RenderingProperty::LineWidth(overlay.overlay_property().read().line_width)
                } else {
                    return Err(unsupported(&prop, kind));
                }
            }
            RenderingPropertyKind::Opacity => {
                if let Some(actor) = prop.as_actor() {
                    RenderingProperty::Opacity(actor.property().read().opacity)
                } else if let Some(overlay) = prop.as_actor2d() {
                    RenderingProperty::Opacity(overlay.overlay_property().read().opacity)
                } else {
                    return Err(unsupported(&prop, kind));
                }
            }
            RenderingPropertyKind::FontSize => {
                let text = prop
                    .as_text_actor()
                    .ok_or_else(|| capability_mismatch(&prop, Capabilities::TEXT))?;
                RenderingProperty::FontSize(text.text_property().read().font_size)
            }
            RenderingPropertyKind::Representation => {
                RenderingProperty::Representation(surface(&prop)?.property().read().representation)
            }
            RenderingPropertyKind::Shading => {
                RenderingProperty::Shading(surface(&prop)?.property().read().interpolation)
            }
            RenderingPropertyKind::ImmediateRendering => RenderingProperty::ImmediateRendering(
                surface(&prop)?.mapper().read().immediate_mode_rendering,
            ),
        };

        Ok(value)
    }
}
