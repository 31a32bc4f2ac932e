//! Clipping edges to the buffer before scan conversion
//!
//! Every edge of every primitive passes through [`clip_segment`]. The
//! fillers never bounds-check, so whatever comes out of here must have
//! its scanline range inside [0, height) and its x-intercepts inside
//! [0, width]. Portions that run off the left or right edge are
//! replaced by vertical segments pinned to the boundary, which keeps
//! the winding parity of the offscreen geometry.

use crate::geom::Point;
use crate::path::{cubic_at, quad_at};
use crate::round_to_int;
use crate::segment::{insert_segment, Segment};

fn compute_x(p0: Point, p1: Point, y: f64) -> f64 {
    p0.x + (y - p0.y) * (p1.x - p0.x) / (p1.y - p0.y)
}

fn compute_y(p0: Point, p1: Point, x: f64) -> f64 {
    p0.y + (x - p0.x) * (p1.y - p0.y) / (p1.x - p0.x)
}

fn top_point(p0: Point, p1: Point, bound: f64) -> Point {
    if round_to_int(p0.y) as f64 >= bound {
        return p0;
    }
    Point::new(compute_x(p0, p1, bound), bound)
}

fn bottom_point(p0: Point, p1: Point, bound: f64) -> Point {
    if round_to_int(p1.y) as f64 <= bound {
        return p1;
    }
    Point::new(compute_x(p0, p1, bound), bound)
}

fn left_point(p0: Point, p1: Point, bound: f64) -> Point {
    if p0.x >= bound {
        return p0;
    }
    Point::new(bound, compute_y(p0, p1, bound))
}

fn right_point(p0: Point, p1: Point, bound: f64) -> Point {
    if p1.x <= bound {
        return p1;
    }
    Point::new(bound, compute_y(p0, p1, bound))
}

// p0 must be the higher endpoint
fn segment_contained(width: i64, height: i64, p0: Point, p1: Point) -> bool {
    if round_to_int(p0.y) < 0 || round_to_int(p1.y) >= height {
        return false;
    }
    let (lo, hi) = if p0.x <= p1.x { (p0.x, p1.x) } else { (p1.x, p0.x) };
    lo >= 0.0 && hi <= width as f64
}

/// Clip one edge against the width x height buffer
///
/// Appends zero or more segments and reports whether any part of the
/// edge survived. An edge whose endpoints round to the same scanline
/// is dropped entirely.
pub fn clip_segment(
    segments: &mut Vec<Segment>,
    width: i64,
    height: i64,
    mut p0: Point,
    mut p1: Point,
) -> bool {
    if round_to_int(p0.y) == round_to_int(p1.y) {
        return false;
    }
    let mut swapped = false;
    if p0.y > p1.y {
        std::mem::swap(&mut p0, &mut p1);
        swapped = true;
    }
    if round_to_int(p1.y) <= 0 || round_to_int(p0.y) >= height {
        return false;
    }
    if segment_contained(width, height, p0, p1) {
        insert_segment(segments, p0, p1, swapped);
        return true;
    }

    p0 = top_point(p0, p1, 0.0);
    p1 = bottom_point(p0, p1, height as f64);
    // the edge direction, fixed before the x ordering swap below can
    // flip the flag
    let winding = if swapped { -1 } else { 1 };
    if p0.x > p1.x {
        std::mem::swap(&mut p0, &mut p1);
        swapped = !swapped;
    }

    if p0.x >= width as f64 {
        // entirely right of the buffer: project onto the right edge
        insert_segment(
            segments,
            Point::new(width as f64, p0.y),
            Point::new(width as f64, p1.y),
            swapped,
        );
    } else if p1.x <= 0.0 {
        insert_segment(segments, Point::new(0.0, p0.y), Point::new(0.0, p1.y), swapped);
    } else {
        let left = left_point(p0, p1, 0.0);
        let right = right_point(p0, p1, width as f64);
        if round_to_int(left.y) != round_to_int(right.y) {
            insert_segment(segments, left, right, swapped);
        }
        // boundary segments stand in for the clipped-away portions and
        // wind the way the edge does
        if round_to_int(left.y) != round_to_int(p0.y) {
            let seg = Segment::new(left, Point::new(left.x, p0.y));
            segments.push(Segment { winding, ..seg });
        }
        if round_to_int(right.y) != round_to_int(p1.y) {
            let seg = Segment::new(right, Point::new(right.x, p1.y));
            segments.push(Segment { winding, ..seg });
        }
    }
    true
}

/// Clip every edge of a closed polygon
pub fn polygon_to_segments(segments: &mut Vec<Segment>, width: i64, height: i64, pts: &[Point]) {
    for i in 0..pts.len() {
        let next = (i + 1) % pts.len();
        clip_segment(segments, width, height, pts[i], pts[next]);
    }
}

/// Flatten a quadratic Bezier into clipped line segments
///
/// The segment count comes from the curve's maximum deviation from its
/// chord, |a - 2b + c| / 4, targeting quarter-pixel flatness.
pub fn clip_quad(segments: &mut Vec<Segment>, width: i64, height: i64, a: Point, b: Point, c: Point) {
    let ex = (a.x - 2.0 * b.x + c.x) / 4.0;
    let ey = (a.y - 2.0 * b.y + c.y) / 4.0;
    let deviation = (ex * ex + ey * ey).sqrt();
    let count = ((4.0 * deviation).sqrt().ceil() as i64).max(1);
    let dt = 1.0 / count as f64;
    let mut prev = a;
    for i in 1..=count {
        let curr = quad_at(a, b, c, i as f64 * dt);
        clip_segment(segments, width, height, prev, curr);
        prev = curr;
    }
}

/// Flatten a cubic Bezier into clipped line segments
pub fn clip_cubic(
    segments: &mut Vec<Segment>,
    width: i64,
    height: i64,
    a: Point,
    b: Point,
    c: Point,
    d: Point,
) {
    let e0 = a - 2.0 * b + c;
    let e1 = b - 2.0 * c + d;
    let ex = e0.x.abs().max(e1.x.abs());
    let ey = e0.y.abs().max(e1.y.abs());
    let deviation = (ex * ex + ey * ey).sqrt();
    let count = ((3.0 * deviation * 16.0).sqrt().ceil() as i64).max(1);
    let dt = 1.0 / count as f64;
    let mut prev = a;
    for i in 1..=count {
        let curr = cubic_at(a, b, c, d, i as f64 * dt);
        clip_segment(segments, width, height, prev, curr);
        prev = curr;
    }
}
