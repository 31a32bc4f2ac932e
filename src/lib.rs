/// How a draw call becomes pixels
///    canvas.draw_*()
///      map points through the top of the transform stack
///      clip::clip_segment / clip_quad / clip_cubic
///        output: Segments (top, bottom, x-intercept, winding)
///      segment sort: top (convex) or top-then-x (path)
///      fill::fill_convex_* / fill_path_*
///        walk scanlines, emit spans
///        blend::blend_row / blend_shader_row
///          shader::Shader::shade_row  -- per-pixel source rows
///          blend::blend_pix           -- Porter-Duff per pixel

pub mod geom;
pub mod color;
pub mod transform;
pub mod path;
pub mod buffer;
pub mod segment;
pub mod clip;
pub mod blend;
pub mod fill;
pub mod shader;
pub mod mesh;
pub mod canvas;
pub mod ppm;

pub use crate::geom::*;
pub use crate::color::*;
pub use crate::transform::*;
pub use crate::path::*;
pub use crate::buffer::*;
pub use crate::segment::*;
pub use crate::clip::*;
pub use crate::blend::*;
pub use crate::fill::*;
pub use crate::shader::*;
pub use crate::mesh::*;
pub use crate::canvas::*;
pub use crate::ppm::*;

/// Round to the nearest integer, halves round up
///
/// Segment bounds, x-intercepts, and color conversion all agree on
/// this convention. `f64::round` rounds halves away from zero and
/// would put -0.5 on the wrong side.
pub fn round_to_int(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Round towards negative infinity
pub fn floor_to_int(v: f64) -> i64 {
    v.floor() as i64
}
