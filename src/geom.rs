//! Points and rectangles

use std::ops::{Add, Mul, Sub};

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, t: f64) -> Point {
        Point::new(self.x * t, self.y * t)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, p: Point) -> Point {
        p * self
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect { left, top, right, bottom }
    }
    pub fn from_wh(width: f64, height: f64) -> Self {
        Rect::from_ltrb(0.0, 0.0, width, height)
    }
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect::from_ltrb(x, y, x + width, y + height)
    }
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
    /// Corners in clockwise order starting at the top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }
    /// Grow to cover `p`
    pub fn expand(&mut self, p: Point) {
        self.left = self.left.min(p.x);
        self.top = self.top.min(p.y);
        self.right = self.right.max(p.x);
        self.bottom = self.bottom.max(p.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn point_math() {
        let p = Point::new(1.0, 2.0) + Point::new(3.0, 4.0) * 0.5;
        assert_eq!(p, Point::new(2.5, 4.0));
        assert_eq!(2.0 * Point::new(1.0, -1.0), Point::new(2.0, -2.0));
    }
    #[test]
    fn rect_corners() {
        let r = Rect::from_xywh(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 4.0);
        assert_eq!(r.corners()[2], Point::new(4.0, 6.0));
    }
}
