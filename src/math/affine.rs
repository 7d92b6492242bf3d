//! Rigid pose type.
//!
//! [`Affine3f`] is the toolkit's pose: a homogeneous 4x4 matrix with the
//! rotation in the upper-left 3x3 block and the translation in the last
//! column. Composition follows matrix multiplication, so `a * b` applies
//! `b` first and then `a`.
use std::ops::Mul;

use glam::{Mat3, Mat4, Quat, Vec3};

use super::Matx44f;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine3f {
    pub matrix: Matx44f,
}

impl Affine3f {
    pub const IDENTITY: Self = Self { matrix: Matx44f::IDENTITY };

    #[inline]
    #[must_use]
    pub const fn new(matrix: Matx44f) -> Self {
        Self { matrix }
    }

    /// Builds a pose from a rotation matrix and a translation.
    #[must_use]
    pub fn from_rotation_translation(rotation: Mat3, translation: Vec3) -> Self {
        let mut m = Mat4::from_mat3(rotation);
        m.w_axis = translation.extend(1.0);
        Self::from(m)
    }

    #[must_use]
    pub fn from_quat_translation(rotation: Quat, translation: Vec3) -> Self {
        Self::from(Mat4::from_rotation_translation(rotation, translation))
    }

    /// Builds a pose from a rotation vector (axis scaled by angle in radians).
    #[must_use]
    pub fn from_rvec_translation(rvec: Vec3, translation: Vec3) -> Self {
        Self::from_quat_translation(Quat::from_scaled_axis(rvec), translation)
    }

    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self::from(Mat4::from_translation(translation))
    }

    #[must_use]
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_mat4(Mat4::from(self.matrix))
    }

    #[must_use]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// Rotation part as a rotation vector.
    #[must_use]
    pub fn rvec(&self) -> Vec3 {
        Quat::from_mat3(&self.rotation()).to_scaled_axis()
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::from(Mat4::from(self.matrix).inverse())
    }

    /// Rotates the pose in the world frame: `R * self`.
    #[must_use]
    pub fn rotate(&self, rotation: Mat3) -> Self {
        Self::from_rotation_translation(rotation, Vec3::ZERO) * *self
    }

    /// Translates the pose in the world frame: `T(t) * self`.
    #[must_use]
    pub fn translate(&self, translation: Vec3) -> Self {
        Self::from_translation(translation) * *self
    }

    /// Applies `other` after `self`, i.e. returns `other * self`.
    #[must_use]
    pub fn concatenate(&self, other: &Self) -> Self {
        *other * *self
    }

    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        Mat4::from(self.matrix).transform_point3(point)
    }
}

impl Default for Affine3f {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine3f {
    type Output = Affine3f;

    fn mul(self, rhs: Affine3f) -> Affine3f {
        Self::from(Mat4::from(self.matrix) * Mat4::from(rhs.matrix))
    }
}

impl From<Matx44f> for Affine3f {
    fn from(matrix: Matx44f) -> Self {
        Self { matrix }
    }
}

impl From<Mat4> for Affine3f {
    fn from(m: Mat4) -> Self {
        Self { matrix: Matx44f::from(m) }
    }
}

impl From<Affine3f> for Mat4 {
    fn from(pose: Affine3f) -> Self {
        Mat4::from(pose.matrix)
    }
}
