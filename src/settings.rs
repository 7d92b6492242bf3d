//! Widget Style Settings
//!
//! [`SurfaceStyle`] holds the surface parameters applied together with a
//! solid color on 3D widgets. Its `Default` matches what
//! [`Widget3D::set_color`](crate::widget::Widget3D::set_color) applies: a
//! flat, unlit look with all reflectance coefficients at `0.8`.
//!
//! Settings can be loaded from JSON; missing fields fall back to defaults.
//!
//! ```rust,ignore
//! use vizkit::settings::VizSettings;
//!
//! let settings = VizSettings::from_json(r#"{ "surface": { "lighting": true } }"#)?;
//! widget3d.set_color_with_style(Color::RED, &settings.surface);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::Result;

// ---------------------------------------------------------------------------
// SurfaceStyle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceStyle {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    /// Whether the lighting model is evaluated. Off gives a flat look.
    pub lighting: bool,
    /// Whether per-vertex scalars keep driving the color.
    pub scalar_visibility: bool,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            ambient: 0.8,
            diffuse: 0.8,
            specular: 0.8,
            lighting: false,
            scalar_visibility: false,
        }
    }
}

impl SurfaceStyle {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ---------------------------------------------------------------------------
// VizSettings
// ---------------------------------------------------------------------------

/// Top-level settings for the widget layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizSettings {
    pub surface: SurfaceStyle,
}

impl VizSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        log::debug!("loaded widget settings: {settings:?}");
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
