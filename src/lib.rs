#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Widget handles for a visualization toolkit.
//!
//! - [`Widget`]: clonable, shared-ownership handle to a native prop
//! - [`Widget3D`] / [`Widget2D`]: checked capability views with pose and color operations
//! - [`Affine3f`]: pose algebra on top of `glam`
//! - [`native`]: the prop interface the handles talk to

pub mod color;
pub mod errors;
pub mod math;
pub mod native;
pub mod settings;
pub mod widget;

pub use color::Color;
pub use errors::{Result, VizError};
pub use math::{Affine3f, Matx44f};
pub use native::{Capabilities, PropRef};
pub use settings::{SurfaceStyle, VizSettings};
pub use widget::{RenderingProperty, RenderingPropertyKind, Widget, Widget2D, Widget3D};
