/// Native 4x4 transform, double precision, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    elements: [[f64; 4]; 4],
}

impl Matrix4x4 {
    /// New matrices start as identity.
    #[must_use]
    pub fn new() -> Self {
        let mut elements = [[0.0; 4]; 4];
        for (i, row) in elements.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { elements }
    }

    #[inline]
    #[must_use]
    pub fn element(&self, i: usize, k: usize) -> f64 {
        self.elements[i][k]
    }

    #[inline]
    pub fn set_element(&mut self, i: usize, k: usize, value: f64) {
        self.elements[i][k] = value;
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::new()
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::new()
    }
}
