//! Toolkit math types
//!
//! - [`Matx44f`]: row-major 4x4 `f32` matrix, indexed by `(row, col)`
//! - [`Affine3f`]: rigid pose built on [`Matx44f`], composed through `glam`

pub mod affine;
pub mod matx;

pub use affine::Affine3f;
pub use matx::Matx44f;
