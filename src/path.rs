//! Path storage
//!
//! A Path is a verb list plus a point list. MoveTo carries one point,
//! LineTo one, QuadTo two, CubicTo three, Close none. Contours are
//! closed implicitly: the edge iterator emits the closing line back to
//! the contour start whether or not Close was recorded.

use crate::geom::{Point, Rect};
use crate::transform::AffineTransform;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathVerb {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
    Close,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PathOrientation {
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Default, Clone)]
pub struct Path {
    verbs: Vec<PathVerb>,
    points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.verbs.push(PathVerb::MoveTo);
        self.points.push(Point::new(x, y));
        self
    }
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.verbs.push(PathVerb::LineTo);
        self.points.push(Point::new(x, y));
        self
    }
    pub fn quad_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.verbs.push(PathVerb::QuadTo);
        self.points.push(Point::new(x1, y1));
        self.points.push(Point::new(x2, y2));
        self
    }
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.verbs.push(PathVerb::CubicTo);
        self.points.push(Point::new(x1, y1));
        self.points.push(Point::new(x2, y2));
        self.points.push(Point::new(x3, y3));
        self
    }
    pub fn close_polygon(&mut self) -> &mut Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    pub fn add_polygon(&mut self, pts: &[Point]) -> &mut Self {
        if pts.is_empty() {
            return self;
        }
        self.move_to(pts[0].x, pts[0].y);
        for p in &pts[1..] {
            self.line_to(p.x, p.y);
        }
        self.close_polygon()
    }

    pub fn add_rect(&mut self, r: Rect, dir: PathOrientation) -> &mut Self {
        let [a, b, c, d] = r.corners();
        match dir {
            PathOrientation::Clockwise => self.add_polygon(&[a, b, c, d]),
            PathOrientation::CounterClockwise => self.add_polygon(&[a, d, c, b]),
        }
    }

    /// Circle approximated by eight quadratic Beziers
    pub fn add_circle(&mut self, center: Point, radius: f64, dir: PathOrientation) -> &mut Self {
        // unit circle control points, every 45 degrees with the
        // off-curve points pushed out to sqrt(2)/2 * tan-corrected k
        let k = std::f64::consts::FRAC_1_SQRT_2;
        let t = (std::f64::consts::PI / 8.0).tan();
        let unit: [Point; 16] = [
            Point::new(1.0, 0.0),
            Point::new(1.0, t),
            Point::new(k, k),
            Point::new(t, 1.0),
            Point::new(0.0, 1.0),
            Point::new(-t, 1.0),
            Point::new(-k, k),
            Point::new(-1.0, t),
            Point::new(-1.0, 0.0),
            Point::new(-1.0, -t),
            Point::new(-k, -k),
            Point::new(-t, -1.0),
            Point::new(0.0, -1.0),
            Point::new(t, -1.0),
            Point::new(k, -k),
            Point::new(1.0, -t),
        ];
        let m = AffineTransform::translate(center.x, center.y)
            * AffineTransform::scale(radius, radius);
        let at = |i: usize| m.map(unit[i % 16]);
        let start = at(0);
        self.move_to(start.x, start.y);
        for q in 0..8 {
            let ctrl = at(q * 2 + 1);
            let end = match dir {
                PathOrientation::Clockwise => at(q * 2 + 2),
                PathOrientation::CounterClockwise => at(16 - (q * 2 + 2)),
            };
            let ctrl = match dir {
                PathOrientation::Clockwise => ctrl,
                PathOrientation::CounterClockwise => at(16 - (q * 2 + 1)),
            };
            self.quad_to(ctrl.x, ctrl.y, end.x, end.y);
        }
        self.close_polygon()
    }

    pub fn transform(&mut self, m: &AffineTransform) {
        for p in self.points.iter_mut() {
            *p = m.map(*p);
        }
    }

    /// Loose bounds: the hull of all on- and off-curve points
    pub fn bounds(&self) -> Rect {
        let mut it = self.points.iter();
        let first = match it.next() {
            Some(p) => *p,
            None => return Rect::default(),
        };
        let mut r = Rect::from_ltrb(first.x, first.y, first.x, first.y);
        for p in it {
            r.expand(*p);
        }
        r
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn edges(&self) -> Edges {
        Edges {
            path: self,
            vi: 0,
            pi: 0,
            start: Point::default(),
            cur: Point::default(),
            drawn: false,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub enum Edge {
    Line(Point, Point),
    Quad(Point, Point, Point),
    Cubic(Point, Point, Point, Point),
}

/// Iterator over a path's edges with implicit contour closing
pub struct Edges<'a> {
    path: &'a Path,
    vi: usize,
    pi: usize,
    start: Point,
    cur: Point,
    drawn: bool,
}

impl<'a> Iterator for Edges<'a> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        loop {
            if self.vi >= self.path.verbs.len() {
                if self.drawn && self.cur != self.start {
                    self.drawn = false;
                    return Some(Edge::Line(self.cur, self.start));
                }
                return None;
            }
            let verb = self.path.verbs[self.vi];
            self.vi += 1;
            match verb {
                PathVerb::MoveTo => {
                    let p = self.path.points[self.pi];
                    self.pi += 1;
                    if self.drawn && self.cur != self.start {
                        let e = Edge::Line(self.cur, self.start);
                        self.start = p;
                        self.cur = p;
                        self.drawn = false;
                        return Some(e);
                    }
                    self.start = p;
                    self.cur = p;
                    self.drawn = false;
                }
                PathVerb::LineTo => {
                    let p = self.path.points[self.pi];
                    self.pi += 1;
                    let e = Edge::Line(self.cur, p);
                    self.cur = p;
                    self.drawn = true;
                    return Some(e);
                }
                PathVerb::QuadTo => {
                    let b = self.path.points[self.pi];
                    let c = self.path.points[self.pi + 1];
                    self.pi += 2;
                    let e = Edge::Quad(self.cur, b, c);
                    self.cur = c;
                    self.drawn = true;
                    return Some(e);
                }
                PathVerb::CubicTo => {
                    let b = self.path.points[self.pi];
                    let c = self.path.points[self.pi + 1];
                    let d = self.path.points[self.pi + 2];
                    self.pi += 3;
                    let e = Edge::Cubic(self.cur, b, c, d);
                    self.cur = d;
                    self.drawn = true;
                    return Some(e);
                }
                PathVerb::Close => {
                    if self.drawn && self.cur != self.start {
                        let e = Edge::Line(self.cur, self.start);
                        self.cur = self.start;
                        self.drawn = false;
                        return Some(e);
                    }
                    self.drawn = false;
                }
            }
        }
    }
}

/// Evaluate a quadratic Bezier at t
pub fn quad_at(a: Point, b: Point, c: Point, t: f64) -> Point {
    let u = 1.0 - t;
    a * (u * u) + b * (2.0 * u * t) + c * (t * t)
}

/// Evaluate a cubic Bezier at t
pub fn cubic_at(a: Point, b: Point, c: Point, d: Point, t: f64) -> Point {
    let u = 1.0 - t;
    a * (u * u * u) + b * (3.0 * u * u * t) + c * (3.0 * u * t * t) + d * (t * t * t)
}

/// Subdivide a quadratic at t into two quadratics sharing dst[2]
pub fn chop_quad_at(src: &[Point; 3], t: f64) -> [Point; 5] {
    let ab = src[0] + (src[1] - src[0]) * t;
    let bc = src[1] + (src[2] - src[1]) * t;
    let abc = ab + (bc - ab) * t;
    [src[0], ab, abc, bc, src[2]]
}

/// Subdivide a cubic at t into two cubics sharing dst[3]
pub fn chop_cubic_at(src: &[Point; 4], t: f64) -> [Point; 7] {
    let ab = src[0] + (src[1] - src[0]) * t;
    let bc = src[1] + (src[2] - src[1]) * t;
    let cd = src[2] + (src[3] - src[2]) * t;
    let abc = ab + (bc - ab) * t;
    let bcd = bc + (cd - bc) * t;
    let abcd = abc + (bcd - abc) * t;
    [src[0], ab, abc, abcd, bcd, cd, src[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_count(p: &Path) -> usize {
        p.edges()
            .filter(|e| matches!(e, Edge::Line(..)))
            .count()
    }

    #[test]
    fn rect_closes_itself() {
        let mut p = Path::new();
        p.add_rect(Rect::from_wh(10.0, 10.0), PathOrientation::Clockwise);
        assert_eq!(line_count(&p), 4);
    }

    #[test]
    fn open_contour_is_closed_at_end() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).line_to(10.0, 0.0).line_to(10.0, 10.0);
        let edges: Vec<Edge> = p.edges().collect();
        assert_eq!(edges.len(), 3);
        match edges[2] {
            Edge::Line(a, b) => {
                assert_eq!(a, Point::new(10.0, 10.0));
                assert_eq!(b, Point::new(0.0, 0.0));
            }
            _ => panic!("expected closing line"),
        }
    }

    #[test]
    fn move_to_closes_previous_contour() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).line_to(5.0, 5.0);
        p.move_to(20.0, 0.0).line_to(25.0, 5.0);
        assert_eq!(line_count(&p), 4);
    }

    #[test]
    fn circle_edge_mix() {
        let mut p = Path::new();
        p.add_circle(Point::new(50.0, 50.0), 10.0, PathOrientation::Clockwise);
        let quads = p.edges().filter(|e| matches!(e, Edge::Quad(..))).count();
        assert_eq!(quads, 8);
        let b = p.bounds();
        assert!(b.left <= 40.0 + 1e-9 && b.right >= 60.0 - 1e-9);
    }

    #[test]
    fn chop_preserves_endpoints() {
        let src = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(10.0, 0.0),
        ];
        let out = chop_quad_at(&src, 0.25);
        assert_eq!(out[0], src[0]);
        assert_eq!(out[4], src[2]);
        let mid = quad_at(src[0], src[1], src[2], 0.25);
        assert!((out[2].x - mid.x).abs() < 1e-12 && (out[2].y - mid.y).abs() < 1e-12);
    }

    #[test]
    fn cubic_endpoints() {
        let (a, b, c, d) = (
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 2.0),
            Point::new(4.0, 0.0),
        );
        assert_eq!(cubic_at(a, b, c, d, 0.0), a);
        assert_eq!(cubic_at(a, b, c, d, 1.0), d);
        let out = chop_cubic_at(&[a, b, c, d], 0.5);
        let mid = cubic_at(a, b, c, d, 0.5);
        assert!((out[3].x - mid.x).abs() < 1e-12);
    }
}
