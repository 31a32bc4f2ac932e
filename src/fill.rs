//! Scanline fillers
//!
//! Two walkers turn sorted segment lists into horizontal spans. The
//! convex walker keeps exactly two live edges and assumes every
//! scanline is crossed exactly twice. The path walker keeps a window
//! of active edges and closes spans where the nonzero winding count
//! returns to zero. Neither recomputes an intercept: each segment is
//! advanced once per scanline it participates in.

use crate::blend::{blend_row, blend_shader_row, BlendMode};
use crate::buffer::PixelBuffer;
use crate::color::Pixel;
use crate::segment::Segment;
use crate::shader::Shader;

/// Walk a convex polygon's segments, sorted by top descending
fn walk_convex<F>(buf: &mut PixelBuffer, segments: &mut Vec<Segment>, mut emit: F)
where
    F: FnMut(&mut PixelBuffer, i64, i64, i64),
{
    let mut a = match segments.pop() {
        Some(s) => s,
        None => return,
    };
    let mut b = match segments.pop() {
        Some(s) => s,
        None => return,
    };
    // which side each edge is on only changes when an edge expires
    let mut a_is_left = a.x < b.x;
    let top = a.top;
    for y in top..buf.height() {
        if !b.is_inbounds(y) {
            b = match segments.pop() {
                Some(s) => s,
                None => return,
            };
            a_is_left = a.x < b.x;
        }
        if !a.is_inbounds(y) {
            a = match segments.pop() {
                Some(s) => s,
                None => return,
            };
            a_is_left = a.x < b.x;
        }
        let ax = a.advance();
        let bx = b.advance();
        let (start, end) = if a_is_left { (ax, bx) } else { (bx, ax) };
        if start < buf.width() {
            emit(buf, start, y, end - start);
        }
    }
}

/// Walk a path's segments with nonzero winding, sorted by top then x
/// descending
///
/// The back of the list is the active window. Edges become active in
/// sorted order as y reaches their top; expired edges are removed in
/// place. After each scanline the active window is re-sorted by x so
/// crossing edges and newly activated ones land in walk order; the
/// not-yet-active front of the list is never touched.
fn walk_path<F>(buf: &mut PixelBuffer, mut segments: Vec<Segment>, mut emit: F)
where
    F: FnMut(&mut PixelBuffer, i64, i64, i64),
{
    let top = match segments.last() {
        Some(s) => s.top,
        None => return,
    };
    for y in top..buf.height() {
        if segments.is_empty() {
            return;
        }
        let mut i = 0;
        let mut left = 0;
        let mut winding = 0i64;
        while i < segments.len() {
            let idx = segments.len() - 1 - i;
            if !segments[idx].is_inbounds(y) {
                break;
            }
            let x = segments[idx].intersect();
            if winding == 0 {
                left = x;
            }
            winding += segments[idx].winding;
            if winding == 0 && left < buf.width() {
                emit(buf, left, y, x - left);
            }
            if segments[idx].is_inbounds(y + 1) {
                segments[idx].advance();
                i += 1;
            } else {
                segments.remove(idx);
            }
        }
        if segments.is_empty() {
            return;
        }
        // pull in edges that start on the next scanline, then restore
        // x order across the active window
        while i < segments.len() && segments[segments.len() - 1 - i].is_inbounds(y + 1) {
            i += 1;
        }
        let tail = segments.len() - i;
        segments[tail..].sort_by(|a, b| b.x.total_cmp(&a.x));
    }
}

pub fn fill_convex_solid(
    buf: &mut PixelBuffer,
    mut segments: Vec<Segment>,
    src: Pixel,
    mode: BlendMode,
) {
    walk_convex(buf, &mut segments, |buf, x, y, len| {
        blend_row(buf, src, x, y, len, mode);
    });
}

pub fn fill_convex_shaded(
    buf: &mut PixelBuffer,
    mut segments: Vec<Segment>,
    shader: &dyn Shader,
    mode: BlendMode,
) {
    walk_convex(buf, &mut segments, |buf, x, y, len| {
        if len <= 0 {
            return;
        }
        let mut row = vec![Pixel::ZERO; len as usize];
        shader.shade_row(x, y, &mut row);
        blend_shader_row(buf, &row, x, y, mode);
    });
}

pub fn fill_path_solid(
    buf: &mut PixelBuffer,
    segments: Vec<Segment>,
    src: Pixel,
    mode: BlendMode,
) {
    walk_path(buf, segments, |buf, x, y, len| {
        blend_row(buf, src, x, y, len, mode);
    });
}

pub fn fill_path_shaded(
    buf: &mut PixelBuffer,
    segments: Vec<Segment>,
    shader: &dyn Shader,
    mode: BlendMode,
) {
    walk_path(buf, segments, |buf, x, y, len| {
        if len <= 0 {
            return;
        }
        let mut row = vec![Pixel::ZERO; len as usize];
        shader.shade_row(x, y, &mut row);
        blend_shader_row(buf, &row, x, y, mode);
    });
}
