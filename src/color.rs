//! Unpremultiplied colors and premultiplied packed pixels

use crate::round_to_int;
use std::ops::{Add, Mul, Sub};

/// Unpremultiplied RGBA color, channels nominally in [0,1]
///
/// Arithmetic is unclamped so colors can act as difference vectors
/// during gradient interpolation. Call [`Color::clamp`] before
/// converting to a pixel if the channels may have left [0,1].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::new(r, g, b, 1.0)
    }
    pub fn white() -> Self {
        Color::rgb(1.0, 1.0, 1.0)
    }
    pub fn black() -> Self {
        Color::rgb(0.0, 0.0, 0.0)
    }
    pub fn transparent() -> Self {
        Color::new(0.0, 0.0, 0.0, 0.0)
    }
    pub fn clamp(self) -> Self {
        fn c01(v: f64) -> f64 {
            v.max(0.0).min(1.0)
        }
        Color::new(c01(self.r), c01(self.g), c01(self.b), c01(self.a))
    }
    /// Premultiply by alpha and pack into a [`Pixel`]
    ///
    /// Each channel becomes round(c * a * 255). Channels must already
    /// be in [0,1].
    pub fn premul(self) -> Pixel {
        let a = self.a;
        Pixel::pack_argb(
            round_to_int(a * 255.0) as u32,
            round_to_int(self.r * a * 255.0) as u32,
            round_to_int(self.g * a * 255.0) as u32,
            round_to_int(self.b * a * 255.0) as u32,
        )
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, o: Color) -> Color {
        Color::new(self.r + o.r, self.g + o.g, self.b + o.b, self.a + o.a)
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, o: Color) -> Color {
        Color::new(self.r - o.r, self.g - o.g, self.b - o.b, self.a - o.a)
    }
}

impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, t: f64) -> Color {
        Color::new(self.r * t, self.g * t, self.b * t, self.a * t)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;
    fn mul(self, c: Color) -> Color {
        c * self
    }
}

/// Premultiplied 8-bit pixel packed as 0xAARRGGBB
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Pixel(pub u32);

impl Pixel {
    pub const ZERO: Pixel = Pixel(0);

    /// Pack four 8-bit channels. Color channels must not exceed alpha,
    /// the invariant of premultiplied storage.
    pub fn pack_argb(a: u32, r: u32, g: u32, b: u32) -> Self {
        debug_assert!(a <= 255 && r <= a && g <= a && b <= a);
        Pixel((a << 24) | (r << 16) | (g << 8) | b)
    }
    pub fn alpha(self) -> u32 {
        self.0 >> 24
    }
    pub fn red(self) -> u32 {
        (self.0 >> 16) & 0xff
    }
    pub fn green(self) -> u32 {
        (self.0 >> 8) & 0xff
    }
    pub fn blue(self) -> u32 {
        self.0 & 0xff
    }
    /// Undo premultiplication, for export to straight-alpha formats
    pub fn unpremul(self) -> [u8; 4] {
        let a = self.alpha();
        if a == 0 {
            return [0, 0, 0, 0];
        }
        let un = |c: u32| ((c * 255 + a / 2) / a).min(255) as u8;
        [un(self.red()), un(self.green()), un(self.blue()), a as u8]
    }
}
