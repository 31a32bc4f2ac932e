//! Canvas: transform stack and draw entry points

use crate::blend::{simplify, simplify_opaque, BlendMode};
use crate::buffer::PixelBuffer;
use crate::clip::{clip_cubic, clip_quad, clip_segment, polygon_to_segments};
use crate::color::Color;
use crate::fill::{fill_convex_shaded, fill_convex_solid, fill_path_shaded, fill_path_solid};
use crate::geom::{Point, Rect};
use crate::mesh::{tessellate_coons, tessellate_quad};
use crate::path::{Edge, Path};
use crate::segment::{sort_by_top, sort_by_top_x, Segment};
use crate::shader::{ComposeShader, ProxyShader, Shader, TriangleGradient};
use crate::transform::AffineTransform;

/// What to draw with: a solid color or a shader, plus a blend mode
pub struct Paint {
    pub color: Color,
    pub mode: BlendMode,
    pub shader: Option<Box<dyn Shader>>,
}

impl Default for Paint {
    fn default() -> Self {
        Paint::new()
    }
}

impl Paint {
    pub fn new() -> Self {
        Paint {
            color: Color::black(),
            mode: BlendMode::SrcOver,
            shader: None,
        }
    }
    pub fn with_color(color: Color) -> Self {
        Paint { color, ..Paint::new() }
    }
    pub fn with_shader(shader: Box<dyn Shader>) -> Self {
        Paint {
            shader: Some(shader),
            ..Paint::new()
        }
    }
    pub fn mode(mut self, mode: BlendMode) -> Self {
        self.mode = mode;
        self
    }
}

pub struct Canvas {
    device: PixelBuffer,
    ctm: Vec<AffineTransform>,
}

impl Canvas {
    pub fn new(device: PixelBuffer) -> Self {
        Canvas {
            device,
            ctm: vec![AffineTransform::new()],
        }
    }

    pub fn device(&self) -> &PixelBuffer {
        &self.device
    }
    pub fn into_device(self) -> PixelBuffer {
        self.device
    }

    fn top(&self) -> AffineTransform {
        self.ctm[self.ctm.len() - 1]
    }

    /// Push a copy of the current transform
    pub fn save(&mut self) {
        let m = self.top();
        self.ctm.push(m);
    }

    /// Pop back to the previous transform; the initial identity never
    /// pops
    pub fn restore(&mut self) {
        if self.ctm.len() > 1 {
            self.ctm.pop();
        }
    }

    pub fn concat(&mut self, m: &AffineTransform) {
        let top = AffineTransform::concat(&self.top(), m);
        let last = self.ctm.len() - 1;
        self.ctm[last] = top;
    }
    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.concat(&AffineTransform::translate(tx, ty));
    }
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.concat(&AffineTransform::scale(sx, sy));
    }
    pub fn rotate(&mut self, radians: f64) {
        self.concat(&AffineTransform::rotate(radians));
    }

    /// Replace every pixel, ignoring the transform and blend modes
    pub fn clear(&mut self, color: Color) {
        self.device.fill(color.premul());
    }

    pub fn draw_rect(&mut self, rect: Rect, paint: &mut Paint) {
        self.draw_convex_polygon(&rect.corners(), paint);
    }

    pub fn draw_convex_polygon(&mut self, pts: &[Point], paint: &mut Paint) {
        if let Some(shader) = paint.shader.as_deref_mut() {
            self.convex_shaded(pts, shader, paint.mode);
        } else {
            self.convex_solid(pts, paint.color, paint.mode);
        }
    }

    pub fn draw_path(&mut self, path: &Path, paint: &mut Paint) {
        let mat = self.top();
        let mut dev = path.clone();
        dev.transform(&mat);
        let w = self.device.width();
        let h = self.device.height();
        let mut segments = Vec::new();
        for edge in dev.edges() {
            match edge {
                Edge::Line(a, b) => {
                    clip_segment(&mut segments, w, h, a, b);
                }
                Edge::Quad(a, b, c) => clip_quad(&mut segments, w, h, a, b, c),
                Edge::Cubic(a, b, c, d) => clip_cubic(&mut segments, w, h, a, b, c, d),
            }
        }
        if segments.len() < 2 {
            return;
        }
        sort_by_top_x(&mut segments);
        if let Some(shader) = paint.shader.as_deref_mut() {
            if !shader.set_context(&mat) {
                return;
            }
            let mode = if shader.is_opaque() {
                simplify_opaque(paint.mode)
            } else {
                paint.mode
            };
            fill_path_shaded(&mut self.device, segments, shader, mode);
        } else {
            let mode = simplify(paint.mode, paint.color.a);
            fill_path_solid(&mut self.device, segments, paint.color.premul(), mode);
        }
    }

    /// Draw triangles from an indexed vertex list
    ///
    /// `colors` blends a gradient across each triangle, `texs` samples
    /// the paint's shader through the texture mapping, and both
    /// together multiply. Texture coordinates without a shader on the
    /// paint fall back to a solid fill.
    pub fn draw_mesh(
        &mut self,
        verts: &[Point],
        colors: Option<&[Color]>,
        texs: Option<&[Point]>,
        indices: &[usize],
        paint: &mut Paint,
    ) {
        for tri in indices.chunks_exact(3) {
            let p = [verts[tri[0]], verts[tri[1]], verts[tri[2]]];
            match (colors, texs) {
                (Some(cols), Some(txs)) => {
                    let c = [cols[tri[0]], cols[tri[1]], cols[tri[2]]];
                    let t = [txs[tri[0]], txs[tri[1]], txs[tri[2]]];
                    let grad = TriangleGradient::new(&p, &c);
                    match paint.shader.as_deref_mut() {
                        Some(inner) => {
                            if let Some(proxy) = ProxyShader::texture(&p, &t, inner) {
                                let mut sh = ComposeShader::new(grad, proxy);
                                self.convex_shaded(&p, &mut sh, paint.mode);
                            }
                        }
                        None => {
                            let mut sh = grad;
                            self.convex_shaded(&p, &mut sh, paint.mode);
                        }
                    }
                }
                (Some(cols), None) => {
                    let c = [cols[tri[0]], cols[tri[1]], cols[tri[2]]];
                    let mut sh = TriangleGradient::new(&p, &c);
                    self.convex_shaded(&p, &mut sh, paint.mode);
                }
                (None, Some(txs)) => {
                    let t = [txs[tri[0]], txs[tri[1]], txs[tri[2]]];
                    match paint.shader.as_deref_mut() {
                        Some(inner) => {
                            if let Some(mut proxy) = ProxyShader::texture(&p, &t, inner) {
                                self.convex_shaded(&p, &mut proxy, paint.mode);
                            }
                        }
                        None => self.convex_solid(&p, paint.color, paint.mode),
                    }
                }
                (None, None) => self.convex_solid(&p, paint.color, paint.mode),
            }
        }
    }

    /// Draw a quad subdivided `level` times, corners in winding order
    pub fn draw_quad(
        &mut self,
        verts: &[Point; 4],
        colors: Option<&[Color; 4]>,
        texs: Option<&[Point; 4]>,
        level: usize,
        paint: &mut Paint,
    ) {
        let m = tessellate_quad(verts, colors, texs, level);
        self.draw_mesh(&m.pts, m.colors.as_deref(), m.texs.as_deref(), &m.indices, paint);
    }

    /// Draw a Coons patch with cubic boundary edges
    pub fn draw_coons_quad(
        &mut self,
        verts: &[Point; 12],
        colors: Option<&[Color; 4]>,
        texs: Option<&[Point; 4]>,
        level: usize,
        paint: &mut Paint,
    ) {
        let m = tessellate_coons(verts, colors, texs, level);
        self.draw_mesh(&m.pts, m.colors.as_deref(), m.texs.as_deref(), &m.indices, paint);
    }

    fn convex_segments(&self, mat: &AffineTransform, pts: &[Point]) -> Vec<Segment> {
        let dst = mat.map_points(pts);
        let mut segments = Vec::new();
        polygon_to_segments(&mut segments, self.device.width(), self.device.height(), &dst);
        sort_by_top(&mut segments);
        segments
    }

    fn convex_solid(&mut self, pts: &[Point], color: Color, mode: BlendMode) {
        if pts.len() < 3 {
            return;
        }
        let mat = self.top();
        let segments = self.convex_segments(&mat, pts);
        if segments.len() < 2 {
            return;
        }
        let mode = simplify(mode, color.a);
        fill_convex_solid(&mut self.device, segments, color.premul(), mode);
    }

    fn convex_shaded(&mut self, pts: &[Point], shader: &mut dyn Shader, mode: BlendMode) {
        if pts.len() < 3 {
            return;
        }
        let mat = self.top();
        let segments = self.convex_segments(&mat, pts);
        if segments.len() < 2 {
            return;
        }
        if !shader.set_context(&mat) {
            return;
        }
        let mode = if shader.is_opaque() {
            simplify_opaque(mode)
        } else {
            mode
        };
        fill_convex_shaded(&mut self.device, segments, shader, mode);
    }
}
