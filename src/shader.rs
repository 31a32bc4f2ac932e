//! Shaders
//!
//! A shader produces one premultiplied source pixel per destination
//! pixel. Before a fill the canvas calls `set_context` with the
//! current transform; the shader inverts it once so `shade_row` can
//! walk device pixels and step through its own space incrementally.

use crate::blend::div255;
use crate::buffer::PixelBuffer;
use crate::color::{Color, Pixel};
use crate::floor_to_int;
use crate::geom::Point;
use crate::transform::AffineTransform;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TileMode {
    Clamp,
    Mirror,
    Repeat,
}

pub trait Shader {
    /// True when every pixel this shader can produce has alpha 255
    fn is_opaque(&self) -> bool;
    /// Capture the device transform; false means the shader cannot
    /// draw (singular transform) and the fill must be skipped
    fn set_context(&mut self, ctm: &AffineTransform) -> bool;
    /// Fill `row` with source pixels for the span starting at (x, y)
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]);
}

impl<'a, S: Shader + ?Sized> Shader for &'a mut S {
    fn is_opaque(&self) -> bool {
        (**self).is_opaque()
    }
    fn set_context(&mut self, ctm: &AffineTransform) -> bool {
        (**self).set_context(ctm)
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        (**self).shade_row(x, y, row)
    }
}

/// Pin a coordinate to [0, dim)
pub fn clamp_coord(v: i64, dim: i64) -> i64 {
    v.max(0).min(dim - 1)
}

/// Reflect a coordinate back and forth across [0, dim)
pub fn mirror_coord(v: i64, dim: i64) -> i64 {
    let m = v.rem_euclid(2 * dim);
    if m >= dim {
        2 * dim - m - 1
    } else {
        m
    }
}

/// Wrap a coordinate modulo dim
pub fn repeat_coord(v: i64, dim: i64) -> i64 {
    v.rem_euclid(dim)
}

fn tile_coord(tile: TileMode, v: i64, dim: i64) -> i64 {
    match tile {
        TileMode::Clamp => clamp_coord(v, dim),
        TileMode::Mirror => mirror_coord(v, dim),
        TileMode::Repeat => repeat_coord(v, dim),
    }
}

/// Samples a bitmap with nearest-neighbor lookup
pub struct BitmapShader {
    bitmap: PixelBuffer,
    local: AffineTransform,
    tile: TileMode,
    inv: AffineTransform,
}

impl BitmapShader {
    pub fn new(bitmap: PixelBuffer, local: AffineTransform, tile: TileMode) -> Self {
        BitmapShader {
            bitmap,
            local,
            tile,
            inv: AffineTransform::new(),
        }
    }
}

impl Shader for BitmapShader {
    fn is_opaque(&self) -> bool {
        self.bitmap.is_opaque()
    }

    fn set_context(&mut self, ctm: &AffineTransform) -> bool {
        match AffineTransform::concat(ctm, &self.local).invert() {
            Some(inv) => {
                self.inv = inv;
                true
            }
            None => false,
        }
    }

    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let w = self.bitmap.width();
        let h = self.bitmap.height();
        let fx = x as f64 + 0.5;
        let fy = y as f64 + 0.5;
        let mut xp = self.inv.sx * fx + self.inv.shx * fy + self.inv.tx;
        let mut yp = self.inv.shy * fx + self.inv.sy * fy + self.inv.ty;
        if self.inv.shy == 0.0 {
            // no y shear: the source row is fixed for the whole span
            let sy = tile_coord(self.tile, floor_to_int(yp), h) as usize;
            for px in row.iter_mut() {
                let sx = tile_coord(self.tile, floor_to_int(xp), w) as usize;
                *px = self.bitmap.get(sx, sy);
                xp += self.inv.sx;
            }
        } else {
            for px in row.iter_mut() {
                let sx = tile_coord(self.tile, floor_to_int(xp), w) as usize;
                let sy = tile_coord(self.tile, floor_to_int(yp), h) as usize;
                *px = self.bitmap.get(sx, sy);
                xp += self.inv.sx;
                yp += self.inv.shy;
            }
        }
    }
}

/// Linear ramp of colors between two points
pub struct LinearGradient {
    colors: Vec<Color>,
    diffs: Vec<Color>,
    local: AffineTransform,
    tile: TileMode,
    inv: AffineTransform,
}

impl LinearGradient {
    /// Gradient from p0 to p1 through `colors`, evenly spaced
    ///
    /// Returns None for an empty color list or coincident points.
    pub fn new(p0: Point, p1: Point, colors: &[Color], tile: TileMode) -> Option<Self> {
        if colors.is_empty() || p0 == p1 {
            return None;
        }
        let count = colors.len();
        let clamped: Vec<Color> = colors.iter().map(|c| c.clamp()).collect();
        // diffs[last] stays zero: a clamp or mirror lookup landing
        // exactly on the right edge interpolates nowhere, and repeat
        // holds the last color across its extra trailing interval
        let mut diffs = Vec::with_capacity(count);
        for i in 0..count {
            if i + 1 < count {
                diffs.push(clamped[i + 1] - clamped[i]);
            } else {
                diffs.push(Color::transparent());
            }
        }
        // basis carrying the unit x-axis onto p0 -> p1
        let d = p1 - p0;
        let local = AffineTransform {
            sx: d.x,
            shx: -d.y,
            tx: p0.x,
            shy: d.y,
            sy: d.x,
            ty: p0.y,
        };
        Some(LinearGradient {
            colors: clamped,
            diffs,
            local,
            tile,
            inv: AffineTransform::new(),
        })
    }
}

impl Shader for LinearGradient {
    fn is_opaque(&self) -> bool {
        false
    }

    fn set_context(&mut self, ctm: &AffineTransform) -> bool {
        match AffineTransform::concat(ctm, &self.local).invert() {
            Some(inv) => {
                self.inv = inv;
                true
            }
            None => false,
        }
    }

    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        if self.colors.len() == 1 {
            let px = self.colors[0].premul();
            for v in row.iter_mut() {
                *v = px;
            }
            return;
        }
        let n = (self.colors.len() - 1) as f64;
        let fx = x as f64 + 0.5;
        let fy = y as f64 + 0.5;
        // gradient coordinate scaled so each color interval is one unit
        let mut gx = (self.inv.sx * fx + self.inv.shx * fy + self.inv.tx) * n;
        let step = self.inv.sx * n;
        for v in row.iter_mut() {
            let t = match self.tile {
                TileMode::Clamp => gx.max(0.0).min(n),
                TileMode::Mirror => {
                    let m = gx.rem_euclid(2.0 * n);
                    if m > n {
                        2.0 * n - m
                    } else {
                        m
                    }
                }
                // repeat's period is one interval longer than the
                // ramp: the last color holds over [n, n + 1) before
                // the pattern restarts
                TileMode::Repeat => gx.rem_euclid(n + 1.0),
            };
            let k = t.floor() as usize;
            let frac = t - k as f64;
            let c = self.colors[k] + self.diffs[k] * frac;
            *v = c.premul();
            gx += step;
        }
    }
}

/// Barycentric blend of three corner colors across a triangle
pub struct TriangleGradient {
    colors: [Color; 3],
    local: AffineTransform,
    inv: AffineTransform,
}

impl TriangleGradient {
    pub fn new(pts: &[Point; 3], colors: &[Color; 3]) -> Self {
        TriangleGradient {
            colors: [colors[0].clamp(), colors[1].clamp(), colors[2].clamp()],
            local: AffineTransform::basis(pts[0], pts[1], pts[2]),
            inv: AffineTransform::new(),
        }
    }
}

impl Shader for TriangleGradient {
    fn is_opaque(&self) -> bool {
        false
    }

    fn set_context(&mut self, ctm: &AffineTransform) -> bool {
        match AffineTransform::concat(ctm, &self.local).invert() {
            Some(inv) => {
                self.inv = inv;
                true
            }
            None => false,
        }
    }

    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let fy = y as f64 + 0.5;
        let mut fx = x as f64 + 0.5;
        for px in row.iter_mut() {
            let p = self.inv.map(Point::new(fx, fy));
            let u = p.x.max(0.0).min(1.0);
            let v = p.y.max(0.0).min(1.0);
            let c = self.colors[1] * u + self.colors[2] * v + self.colors[0] * (1.0 - u - v);
            *px = c.clamp().premul();
            fx += 1.0;
        }
    }
}

/// Prepends an extra transform to an inner shader
///
/// Used for texture mapping: the extra transform carries texture
/// coordinates onto geometry coordinates, so the inner shader gets
/// sampled where the texture says.
pub struct ProxyShader<S> {
    inner: S,
    extra: AffineTransform,
}

impl<S: Shader> ProxyShader<S> {
    pub fn new(inner: S, extra: AffineTransform) -> Self {
        ProxyShader { inner, extra }
    }

    /// Proxy mapping triangle `texs` in the inner shader's space onto
    /// triangle `pts` in geometry space, or None for a degenerate
    /// texture triangle
    pub fn texture(pts: &[Point; 3], texs: &[Point; 3], inner: S) -> Option<Self> {
        let p = AffineTransform::basis(pts[0], pts[1], pts[2]);
        let t = AffineTransform::basis(texs[0], texs[1], texs[2]);
        let t_inv = t.invert()?;
        Some(ProxyShader::new(inner, AffineTransform::concat(&p, &t_inv)))
    }
}

impl<S: Shader> Shader for ProxyShader<S> {
    fn is_opaque(&self) -> bool {
        self.inner.is_opaque()
    }
    fn set_context(&mut self, ctm: &AffineTransform) -> bool {
        self.inner.set_context(&AffineTransform::concat(ctm, &self.extra))
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        self.inner.shade_row(x, y, row)
    }
}

/// Multiplies the output of two shaders channel by channel
pub struct ComposeShader<A, B> {
    a: A,
    b: B,
}

impl<A: Shader, B: Shader> ComposeShader<A, B> {
    pub fn new(a: A, b: B) -> Self {
        ComposeShader { a, b }
    }
}

impl<A: Shader, B: Shader> Shader for ComposeShader<A, B> {
    fn is_opaque(&self) -> bool {
        self.a.is_opaque() && self.b.is_opaque()
    }
    fn set_context(&mut self, ctm: &AffineTransform) -> bool {
        let a = self.a.set_context(ctm);
        let b = self.b.set_context(ctm);
        a && b
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        self.a.shade_row(x, y, row);
        let mut other = vec![Pixel::ZERO; row.len()];
        self.b.shade_row(x, y, &mut other);
        for (pa, pb) in row.iter_mut().zip(other.iter()) {
            *pa = Pixel::pack_argb(
                div255(pa.alpha() * pb.alpha()),
                div255(pa.red() * pb.red()),
                div255(pa.green() * pb.green()),
                div255(pa.blue() * pb.blue()),
            );
        }
    }
}
