//! 2D affine transforms
//!
//! Maps points as
//!    x' = x * sx  + y * shx + tx
//!    y' = x * shy + y * sy  + ty

use crate::geom::Point;
use std::ops::Mul;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform {
    pub sx: f64,
    pub shx: f64,
    pub tx: f64,
    pub shy: f64,
    pub sy: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        AffineTransform::new()
    }
}

impl AffineTransform {
    /// Identity transform
    pub fn new() -> Self {
        AffineTransform {
            sx: 1.0,
            shx: 0.0,
            tx: 0.0,
            shy: 0.0,
            sy: 1.0,
            ty: 0.0,
        }
    }
    pub fn translate(tx: f64, ty: f64) -> Self {
        AffineTransform { tx, ty, ..AffineTransform::new() }
    }
    pub fn scale(sx: f64, sy: f64) -> Self {
        AffineTransform { sx, sy, ..AffineTransform::new() }
    }
    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        AffineTransform {
            sx: cos,
            shx: -sin,
            tx: 0.0,
            shy: sin,
            sy: cos,
            ty: 0.0,
        }
    }
    /// Basis whose unit x-axis lands on b-a and unit y-axis on c-a,
    /// with the origin at a
    pub fn basis(a: Point, b: Point, c: Point) -> Self {
        AffineTransform {
            sx: b.x - a.x,
            shx: c.x - a.x,
            tx: a.x,
            shy: b.y - a.y,
            sy: c.y - a.y,
            ty: a.y,
        }
    }

    /// a * b: apply b first, then a
    pub fn concat(a: &AffineTransform, b: &AffineTransform) -> Self {
        AffineTransform {
            sx: a.sx * b.sx + a.shx * b.shy,
            shy: a.shy * b.sx + a.sy * b.shy,
            shx: a.sx * b.shx + a.shx * b.sy,
            sy: a.shy * b.shx + a.sy * b.sy,
            tx: a.sx * b.tx + a.shx * b.ty + a.tx,
            ty: a.shy * b.tx + a.sy * b.ty + a.ty,
        }
    }

    /// Inverse transform, or None when the matrix is singular
    pub fn invert(&self) -> Option<AffineTransform> {
        let det = self.sx * self.sy - self.shy * self.shx;
        if det == 0.0 {
            return None;
        }
        let inv = 1.0 / det;
        Some(AffineTransform {
            sx: self.sy * inv,
            shy: -self.shy * inv,
            shx: -self.shx * inv,
            sy: self.sx * inv,
            tx: (self.shx * self.ty - self.sy * self.tx) * inv,
            ty: (self.shy * self.tx - self.sx * self.ty) * inv,
        })
    }

    pub fn map(&self, p: Point) -> Point {
        Point::new(
            p.x * self.sx + p.y * self.shx + self.tx,
            p.x * self.shy + p.y * self.sy + self.ty,
        )
    }

    pub fn map_points(&self, pts: &[Point]) -> Vec<Point> {
        pts.iter().map(|&p| self.map(p)).collect()
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;
    fn mul(self, rhs: AffineTransform) -> AffineTransform {
        AffineTransform::concat(&self, &rhs)
    }
}
