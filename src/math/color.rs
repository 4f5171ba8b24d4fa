use nalgebra::Vector3;

use std::ops::{Add, AddAssign, Div, Mul};

/// Linear RGB radiance. Channels are unbounded; values above 1.0 are legal and
/// only get clamped when quantized for an 8-bit image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RGBColor(pub Vector3<f32>);

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor(Vector3::new(r, g, b))
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);
}

impl RGBColor {
    #[inline(always)]
    pub fn r(&self) -> f32 {
        self.0.x
    }
    #[inline(always)]
    pub fn g(&self) -> f32 {
        self.0.y
    }
    #[inline(always)]
    pub fn b(&self) -> f32 {
        self.0.z
    }

    pub fn lerp(self, other: RGBColor, t: f32) -> RGBColor {
        (1.0 - t) * self + t * other
    }

    pub fn is_black(&self) -> bool {
        self.0 == Vector3::zeros()
    }
}

impl Default for RGBColor {
    fn default() -> Self {
        RGBColor::ZERO
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor(self.0 * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        RGBColor(other.0 * self)
    }
}

impl Div<f32> for RGBColor {
    type Output = RGBColor;
    fn div(self, other: f32) -> RGBColor {
        RGBColor(self.0 / other)
    }
}

// don't implement adding or subtracting floats from RGBColor

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor(self.0 + other.0)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        self.0 += other.0
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(other: [f32; 3]) -> RGBColor {
        RGBColor::new(other[0], other[1], other[2])
    }
}
