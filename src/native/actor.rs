use std::sync::Arc;

use parking_lot::RwLock;

use super::{Matrix4x4, Prop, Prop3D, SurfaceActor, TimeStamp};

// ============================================================================
// Surface property & mapper
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    Points,
    Wireframe,
    #[default]
    Surface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    Flat,
    #[default]
    Gouraud,
    Phong,
}

/// Surface appearance of an [`Actor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// RGB in `[0, 1]`.
    pub color: [f64; 3],
    pub edge_color: [f64; 3],
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub lighting: bool,
    pub opacity: f64,
    pub point_size: f32,
    pub line_width: f32,
    pub representation: Representation,
    pub interpolation: Interpolation,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            edge_color: [0.0, 0.0, 0.0],
            ambient: 0.0,
            diffuse: 1.0,
            specular: 0.0,
            lighting: true,
            opacity: 1.0,
            point_size: 1.0,
            line_width: 1.0,
            representation: Representation::Surface,
            interpolation: Interpolation::Gouraud,
        }
    }
}

/// Maps geometry to primitives; only the switches the widget layer touches.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapper {
    /// Per-vertex scalars drive the color when set.
    pub scalar_visibility: bool,
    pub immediate_mode_rendering: bool,
}

impl Default for Mapper {
    fn default() -> Self {
        Self {
            scalar_visibility: true,
            immediate_mode_rendering: false,
        }
    }
}

// ============================================================================
// Actor
// ============================================================================

/// 3D prop with geometry, a surface property and a mapper.
#[derive(Debug, Default)]
pub struct Actor {
    user_matrix: RwLock<Option<Matrix4x4>>,
    property: RwLock<Property>,
    mapper: RwLock<Mapper>,
    mtime: TimeStamp,
}

impl Actor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Prop for Actor {
    fn class_name(&self) -> &'static str {
        "Actor"
    }

    fn modified(&self) {
        self.mtime.modified();
    }

    fn modified_time(&self) -> u64 {
        self.mtime.get()
    }

    fn as_prop3d(&self) -> Option<&dyn Prop3D> {
        Some(self)
    }

    fn as_actor(&self) -> Option<&dyn SurfaceActor> {
        Some(self)
    }
}

impl Prop3D for Actor {
    fn user_matrix(&self) -> Option<Matrix4x4> {
        *self.user_matrix.read()
    }

    fn set_user_matrix(&self, matrix: Option<Matrix4x4>) {
        *self.user_matrix.write() = matrix;
    }
}

impl SurfaceActor for Actor {
    fn property(&self) -> &RwLock<Property> {
        &self.property
    }

    fn mapper(&self) -> &RwLock<Mapper> {
        &self.mapper
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Group of parts placed as one unit. Placeable, but has no surface of its own.
#[derive(Debug, Default)]
pub struct Assembly {
    user_matrix: RwLock<Option<Matrix4x4>>,
    mtime: TimeStamp,
}

impl Assembly {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl Prop for Assembly {
    fn class_name(&self) -> &'static str {
        "Assembly"
    }

    fn modified(&self) {
        self.mtime.modified();
    }

    fn modified_time(&self) -> u64 {
        self.mtime.get()
    }

    fn as_prop3d(&self) -> Option<&dyn Prop3D> {
        Some(self)
    }
}

impl Prop3D for Assembly {
    fn user_matrix(&self) -> Option<Matrix4x4> {
        *self.user_matrix.read()
    }

    fn set_user_matrix(&self, matrix: Option<Matrix4x4>) {
        *self.user_matrix.write() = matrix;
    }
}
