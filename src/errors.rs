//! Error Types
//!
//! This module defines the error types used throughout the widget layer.
//!
//! # Overview
//!
//! Calling a typed-view operation on the wrong kind of widget is a programming
//! error, so the plain operations (`set_pose`, `set_color`, `as_widget3d`, ...)
//! panic through [`precondition`]. Every such operation has a `try_` twin that
//! returns [`Result<T>`] instead, carrying a [`VizError`]:
//! - missing native prop
//! - capability mismatch (wrong widget kind)
//! - pose read before one was installed
//! - rendering property not supported by the prop
//! - settings parsing failures
//!
//! # Usage
//!
//! ```rust,ignore
//! use vizkit::errors::{VizError, Result};
//!
//! fn place(widget: &vizkit::Widget, pose: &vizkit::Affine3f) -> Result<()> {
//!     widget.try_as_widget3d()?.try_set_pose(pose)
//! }
//! ```

use thiserror::Error;

use crate::native::Capabilities;

/// The main error type for the widget layer.
#[derive(Error, Debug)]
pub enum VizError {
    // ========================================================================
    // Handle & Capability Errors
    // ========================================================================
    /// The widget has no native prop attached.
    #[error("widget has no native prop attached")]
    NoProp,

    /// The attached prop does not provide the capability the operation needs.
    #[error("prop `{class}` lacks required capability {required:?}")]
    CapabilityMismatch {
        /// Capability the operation asked for
        required: Capabilities,
        /// Class name of the attached prop
        class: &'static str,
    },

    /// `pose()` was called before any pose was installed.
    #[error("no pose has been installed on this widget")]
    PoseNotSet,

    /// The rendering property cannot be applied to the attached prop.
    #[error("rendering property `{property}` is not supported by prop `{class}`")]
    UnsupportedProperty {
        /// Name of the rendering property
        property: &'static str,
        /// Class name of the attached prop
        class: &'static str,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Settings could not be parsed.
    #[error("settings parse error: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Alias for `Result<T, VizError>`.
pub type Result<T> = std::result::Result<T, VizError>;

/// Unwraps the result of a checked operation, aborting the caller on failure.
///
/// Precondition violations are caller bugs; they are logged and then
/// turned into a panic at the caller's location.
#[track_caller]
pub(crate) fn precondition<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::error!("widget precondition violated: {err}");
            panic!("widget precondition violated: {err}");
        }
    }
}
