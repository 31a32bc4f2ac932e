//! Directed edge segments
//!
//! A Segment is the unit the fillers consume: a non-horizontal edge
//! clipped to the buffer, reduced to an integer scanline range, a
//! winding direction, and an incrementally advanced x-intercept.

use crate::geom::Point;
use crate::round_to_int;

#[derive(Debug, Default, Copy, Clone)]
pub struct Segment {
    /// First scanline covered, inclusive
    pub top: i64,
    /// One past the last scanline covered
    pub bottom: i64,
    /// dx/dy of the edge
    pub slope: f64,
    /// x at the center (y + 0.5) of the current scanline
    pub x: f64,
    /// +1 when the edge points downward, -1 upward
    pub winding: i64,
}

impl Segment {
    /// Build a segment from a directed edge
    ///
    /// p0 -> p1 downward gives winding +1, upward -1. The edge must
    /// not be horizontal after rounding, and must start at or below
    /// scanline zero; the clipper establishes both.
    pub fn new(p0: Point, p1: Point) -> Self {
        let (top, bottom, winding) = if p0.y < p1.y {
            (round_to_int(p0.y), round_to_int(p1.y), 1)
        } else {
            (round_to_int(p1.y), round_to_int(p0.y), -1)
        };
        debug_assert!(top >= 0, "segment above the buffer");
        debug_assert!(bottom > top, "horizontal segment");
        let slope = (p1.x - p0.x) / (p1.y - p0.y);
        let b = p0.x - slope * p0.y;
        let x = slope * (top as f64 + 0.5) + b;
        Segment { top, bottom, slope, x, winding }
    }

    pub fn is_inbounds(&self, y: i64) -> bool {
        y >= self.top && y < self.bottom
    }

    /// Rounded x-intercept on the current scanline
    pub fn intersect(&self) -> i64 {
        round_to_int(self.x)
    }

    /// Rounded x-intercept, then step to the next scanline
    ///
    /// Call exactly once per scanline the segment participates in.
    /// The intercept is never recomputed from the endpoints, so a
    /// skipped or doubled advance desynchronizes it.
    pub fn advance(&mut self) -> i64 {
        let cx = round_to_int(self.x);
        self.x += self.slope;
        cx
    }
}

/// Push the clipped edge, restoring the pre-swap direction
pub fn insert_segment(segments: &mut Vec<Segment>, p0: Point, p1: Point, swapped: bool) {
    if swapped {
        segments.push(Segment::new(p1, p0));
    } else {
        segments.push(Segment::new(p0, p1));
    }
}

/// Order for the convex filler: top descending, so the earliest
/// segments sit at the back and can be popped
pub fn sort_by_top(segments: &mut [Segment]) {
    segments.sort_by(|a, b| b.top.cmp(&a.top));
}

/// Order for the path filler: top descending, ties by initial x
/// descending
pub fn sort_by_top_x(segments: &mut [Segment]) {
    segments.sort_by(|a, b| b.top.cmp(&a.top).then(b.x.total_cmp(&a.x)));
}
