use std::ops::{Index, IndexMut};

use glam::Mat4;

/// Fixed-size 4x4 single precision matrix.
///
/// Elements are stored row-major and addressed as `m[(row, col)]`.
/// `glam` stores its matrices column-major; the `From` conversions
/// take care of the transpose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matx44f {
    rows: [[f32; 4]; 4],
}

impl Matx44f {
    pub const ZERO: Self = Self { rows: [[0.0; 4]; 4] };

    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    #[must_use]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Builds a matrix from 16 values in row-major order.
    #[must_use]
    pub fn from_row_slice(values: &[f32; 16]) -> Self {
        let mut rows = [[0.0; 4]; 4];
        for (i, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&values[i * 4..i * 4 + 4]);
        }
        Self { rows }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[f32; 4]; 4] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> [f32; 4] {
        self.rows[i]
    }

    #[inline]
    #[must_use]
    pub fn col(&self, k: usize) -> [f32; 4] {
        [self.rows[0][k], self.rows[1][k], self.rows[2][k], self.rows[3][k]]
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..4 {
            for k in 0..4 {
                out.rows[k][i] = self.rows[i][k];
            }
        }
        out
    }
}

impl Default for Matx44f {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<(usize, usize)> for Matx44f {
    type Output = f32;

    #[inline]
    fn index(&self, (i, k): (usize, usize)) -> &f32 {
        &self.rows[i][k]
    }
}

impl IndexMut<(usize, usize)> for Matx44f {
    #[inline]
    fn index_mut(&mut self, (i, k): (usize, usize)) -> &mut f32 {
        &mut self.rows[i][k]
    }
}

impl From<Mat4> for Matx44f {
    fn from(m: Mat4) -> Self {
        Self { rows: m.transpose().to_cols_array_2d() }
    }
}

impl From<Matx44f> for Mat4 {
    fn from(m: Matx44f) -> Self {
        Mat4::from_cols_array_2d(&m.rows).transpose()
    }
}
