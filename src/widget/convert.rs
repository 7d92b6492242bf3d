//! Conversion between toolkit and native matrices.

use crate::math::Matx44f;
use crate::native::Matrix4x4;

pub struct MatrixConverter;

impl MatrixConverter {
    /// Copies element `(i, k)` of the native matrix into `(i, k)` of the result.
    #[must_use]
    pub fn to_matx(native: &Matrix4x4) -> Matx44f {
        let mut m = Matx44f::ZERO;
        for i in 0..4 {
            for k in 0..4 {
                m[(i, k)] = native.element(i, k) as f32;
            }
        }
        m
    }

    /// Allocates a fresh native matrix holding the same 16 values.
    #[must_use]
    pub fn to_native(m: &Matx44f) -> Matrix4x4 {
        let mut native = Matrix4x4::new();
        for i in 0..4 {
            for k in 0..4 {
                native.set_element(i, k, f64::from(m[(i, k)]));
            }
        }
        native
    }
}
