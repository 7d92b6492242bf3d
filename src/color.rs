//! Widget colors.
//!
//! Colors are given in blue/green/red(/alpha) order with channels in
//! `0.0..=255.0`. The native props expect RGB in `0.0..=1.0`; use
//! [`Color::to_rgb`] when forwarding.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    bgra: [f64; 4],
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);
    pub const GRAY: Self = Self::new(128.0, 128.0, 128.0);
    pub const BLUE: Self = Self::new(255.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 255.0, 0.0);
    pub const RED: Self = Self::new(0.0, 0.0, 255.0);
    pub const CYAN: Self = Self::new(255.0, 255.0, 0.0);
    pub const MAGENTA: Self = Self::new(255.0, 0.0, 255.0);
    pub const YELLOW: Self = Self::new(0.0, 255.0, 255.0);

    /// Opaque color from blue, green and red channels.
    #[must_use]
    pub const fn new(blue: f64, green: f64, red: f64) -> Self {
        Self { bgra: [blue, green, red, 255.0] }
    }

    #[must_use]
    pub const fn with_alpha(blue: f64, green: f64, red: f64, alpha: f64) -> Self {
        Self { bgra: [blue, green, red, alpha] }
    }

    #[must_use]
    pub const fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(blue, green, red)
    }

    #[inline]
    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.bgra[0]
    }

    #[inline]
    #[must_use]
    pub const fn green(&self) -> f64 {
        self.bgra[1]
    }

    #[inline]
    #[must_use]
    pub const fn red(&self) -> f64 {
        self.bgra[2]
    }

    #[inline]
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.bgra[3]
    }

    /// Native channel order and range: RGB in `[0, 1]`.
    #[must_use]
    pub fn to_rgb(&self) -> [f64; 3] {
        [self.red() / 255.0, self.green() / 255.0, self.blue() / 255.0]
    }

    /// Alpha mapped to `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.alpha() / 255.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f64; 3]> for Color {
    /// Interprets the array as `[blue, green, red]`.
    fn from(bgr: [f64; 3]) -> Self {
        Self::new(bgr[0], bgr[1], bgr[2])
    }
}

impl From<[f64; 4]> for Color {
    fn from(bgra: [f64; 4]) -> Self {
        Self { bgra }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb_swaps_and_normalizes() {
        assert_eq!(Color::RED.to_rgb(), [1.0, 0.0, 0.0]);
        assert_eq!(Color::BLUE.to_rgb(), [0.0, 0.0, 1.0]);
        let c = Color::new(51.0, 102.0, 255.0);
        assert_eq!(c.to_rgb(), [1.0, 0.4, 0.2]);
    }

    #[test]
    fn test_alpha_defaults_opaque() {
        assert_eq!(Color::GREEN.opacity(), 1.0);
        assert_eq!(Color::with_alpha(0.0, 0.0, 0.0, 0.0).opacity(), 0.0);
        assert_eq!(Color::from([1.0, 2.0, 3.0]).red(), 3.0);
    }
}
