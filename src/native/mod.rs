//! Native rendering subsystem interface
//!
//! Widgets reference renderable resources ("props") owned by the rendering
//! subsystem. This module defines the narrow contract the widget layer relies
//! on, together with a minimal in-process implementation:
//!
//! - [`Prop`]: any renderable; exposes capability-checked downcasts that
//!   return `None` on mismatch, plus the `modified()` re-render hook
//! - [`Prop3D`]: placeable in 3D through a user matrix
//! - [`SurfaceActor`]: 3D prop with a surface [`Property`] and a [`Mapper`]
//! - [`OverlayActor`]: 2D overlay with a [`Property2D`]
//! - [`TextOverlay`]: 2D overlay rendering a string
//!
//! Concrete props: [`Actor`], [`Assembly`], [`Actor2D`], [`TextActor`].

pub mod actor;
pub mod actor2d;
pub mod matrix;
pub mod timestamp;

pub use actor::{Actor, Assembly, Interpolation, Mapper, Property, Representation};
pub use actor2d::{Actor2D, Property2D, TextActor, TextProperty};
pub use matrix::Matrix4x4;
pub use timestamp::TimeStamp;

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use parking_lot::RwLock;

/// Shared reference to a native prop.
pub type PropRef = Arc<dyn Prop>;

bitflags! {
    /// Operation sets a prop can support.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u32 {
        /// Placeable in 3D through a user matrix.
        const PLACEMENT_3D = 1 << 0;
        /// Carries a surface property block (color, reflectance, lighting).
        const SURFACE      = 1 << 1;
        /// 2D overlay with its own color property.
        const OVERLAY_2D   = 1 << 2;
        /// 2D overlay rendering text.
        const TEXT         = 1 << 3;
    }
}

// ============================================================================
// Prop traits
// ============================================================================

pub trait Prop: Send + Sync + fmt::Debug {
    /// Name of the concrete prop type, used in diagnostics.
    fn class_name(&self) -> &'static str;

    /// Marks the prop as needing re-render.
    fn modified(&self);

    /// Stamp of the last modification.
    fn modified_time(&self) -> u64;

    fn as_prop3d(&self) -> Option<&dyn Prop3D> {
        None
    }

    fn as_actor(&self) -> Option<&dyn SurfaceActor> {
        None
    }

    fn as_actor2d(&self) -> Option<&dyn OverlayActor> {
        None
    }

    fn as_text_actor(&self) -> Option<&dyn TextOverlay> {
        None
    }

    fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::PLACEMENT_3D, self.as_prop3d().is_some());
        caps.set(Capabilities::SURFACE, self.as_actor().is_some());
        caps.set(Capabilities::OVERLAY_2D, self.as_actor2d().is_some());
        caps.set(Capabilities::TEXT, self.as_text_actor().is_some());
        caps
    }
}

pub trait Prop3D: Prop {
    /// Transform applied on top of the prop's own placement, if any.
    fn user_matrix(&self) -> Option<Matrix4x4>;

    fn set_user_matrix(&self, matrix: Option<Matrix4x4>);
}

pub trait SurfaceActor: Prop3D {
    fn property(&self) -> &RwLock<Property>;

    fn mapper(&self) -> &RwLock<Mapper>;
}

pub trait OverlayActor: Prop {
    fn overlay_property(&self) -> &RwLock<Property2D>;
}

pub trait TextOverlay: OverlayActor {
    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn text_property(&self) -> &RwLock<TextProperty>;
}
