use std::sync::Arc;

use parking_lot::RwLock;

use super::{OverlayActor, Prop, TextOverlay, TimeStamp};

/// Appearance of a 2D overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Property2D {
    /// RGB in `[0, 1]`.
    pub color: [f64; 3],
    pub opacity: f64,
    pub point_size: f32,
    pub line_width: f32,
}

impl Default for Property2D {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            opacity: 1.0,
            point_size: 1.0,
            line_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextProperty {
    pub font_size: u32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for TextProperty {
    fn default() -> Self {
        Self {
            font_size: 12,
            bold: false,
            italic: false,
        }
    }
}

// ============================================================================
// Actor2D
// ============================================================================

/// Screen-space overlay.
#[derive(Debug, Default)]
pub struct Actor2D {
    property: RwLock<Property2D>,
    mtime: TimeStamp,
}

impl Actor2D {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Prop for Actor2D {
    fn class_name(&self) -> &'static str {
        "Actor2D"
    }

    fn modified(&self) {
        self.mtime.modified();
    }

    fn modified_time(&self) -> u64 {
        self.mtime.get()
    }

    fn as_actor2d(&self) -> Option<&dyn OverlayActor> {
        Some(self)
    }
}

impl OverlayActor for Actor2D {
    fn overlay_property(&self) -> &RwLock<Property2D> {
        &self.property
    }
}

// ============================================================================
// TextActor
// ============================================================================

/// Screen-space text overlay.
#[derive(Debug, Default)]
pub struct TextActor {
    text: RwLock<String>,
    property: RwLock<Property2D>,
    text_property: RwLock<TextProperty>,
    mtime: TimeStamp,
}

impl TextActor {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: RwLock::new(text.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn shared(text: &str) -> Arc<Self> {
        Arc::new(Self::new(text))
    }
}

impl Prop for TextActor {
    fn class_name(&self) -> &'static str {
        "TextActor"
    }

    fn modified(&self) {
        self.mtime.modified();
    }

    fn modified_time(&self) -> u64 {
        self.mtime.get()
    }

    fn as_actor2d(&self) -> Option<&dyn OverlayActor> {
        Some(self)
    }

    fn as_text_actor(&self) -> Option<&dyn TextOverlay> {
        Some(self)
    }
}

impl OverlayActor for TextActor {
    fn overlay_property(&self) -> &RwLock<Property2D> {
        &self.property
    }
}

impl TextOverlay for TextActor {
    fn text(&self) -> String {
        self.text.read().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.write() = text.to_owned();
        self.modified();
    }

    fn text_property(&self) -> &RwLock<TextProperty> {
        &self.text_property
    }
}
