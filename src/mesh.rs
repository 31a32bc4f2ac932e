//! Quad and Coons patch tessellation for mesh drawing

use crate::color::Color;
use crate::geom::Point;
use crate::path::cubic_at;

/// Bilinear blend of four corner points at (u, v)
pub fn bilerp_point(u: f64, v: f64, a: Point, b: Point, c: Point, d: Point) -> Point {
    a * ((1.0 - u) * (1.0 - v)) + b * (u * (1.0 - v)) + c * (u * v) + d * ((1.0 - u) * v)
}

/// Bilinear blend of four corner colors at (u, v)
pub fn bilerp_color(u: f64, v: f64, a: Color, b: Color, c: Color, d: Color) -> Color {
    (a * ((1.0 - u) * (1.0 - v)) + b * (u * (1.0 - v)) + c * (u * v) + d * ((1.0 - u) * v))
        .clamp()
}

/// Coons patch interpolation
///
/// `pts` holds twelve control points: corner A, two controls, corner
/// B, two controls, corner C, two controls, corner D, two controls,
/// winding the boundary. The interior is the sum of the two opposite
/// edge lofts minus the bilinear patch of the corners.
pub fn coons_point(u: f64, v: f64, pts: &[Point; 12]) -> Point {
    let top = [pts[0], pts[1], pts[2], pts[3]];
    let right = [pts[3], pts[4], pts[5], pts[6]];
    let bottom = [pts[9], pts[8], pts[7], pts[6]];
    let left = [pts[0], pts[11], pts[10], pts[9]];
    if v == 0.0 {
        return cubic_at(top[0], top[1], top[2], top[3], u);
    }
    if v == 1.0 {
        return cubic_at(bottom[0], bottom[1], bottom[2], bottom[3], u);
    }
    if u == 0.0 {
        return cubic_at(left[0], left[1], left[2], left[3], v);
    }
    if u == 1.0 {
        return cubic_at(right[0], right[1], right[2], right[3], v);
    }
    let tb = cubic_at(top[0], top[1], top[2], top[3], u) * (1.0 - v)
        + cubic_at(bottom[0], bottom[1], bottom[2], bottom[3], u) * v;
    let lr = cubic_at(left[0], left[1], left[2], left[3], v) * (1.0 - u)
        + cubic_at(right[0], right[1], right[2], right[3], v) * u;
    let corners = bilerp_point(u, v, pts[0], pts[3], pts[6], pts[9]);
    tb + lr - corners
}

/// Triangulated mesh ready for [`crate::canvas::Canvas::draw_mesh`]
#[derive(Debug, Default, Clone)]
pub struct QuadMesh {
    pub pts: Vec<Point>,
    pub colors: Option<Vec<Color>>,
    pub texs: Option<Vec<Point>>,
    pub indices: Vec<usize>,
}

fn grid<P, C, T>(level: usize, point_at: P, color_at: C, tex_at: T) -> QuadMesh
where
    P: Fn(f64, f64) -> Point,
    C: Fn(f64, f64) -> Option<Color>,
    T: Fn(f64, f64) -> Option<Point>,
{
    let cells = level + 1;
    let incr = 1.0 / cells as f64;
    let mut mesh = QuadMesh::default();
    let mut colors = Vec::new();
    let mut texs = Vec::new();
    let mut has_colors = false;
    let mut has_texs = false;
    for row in 0..cells {
        for col in 0..cells {
            let u = col as f64 * incr;
            let v = row as f64 * incr;
            let corner = mesh.pts.len();
            for &(du, dv) in &[(0.0, 0.0), (incr, 0.0), (0.0, incr), (incr, incr)] {
                mesh.pts.push(point_at(u + du, v + dv));
                if let Some(c) = color_at(u + du, v + dv) {
                    colors.push(c);
                    has_colors = true;
                }
                if let Some(t) = tex_at(u + du, v + dv) {
                    texs.push(t);
                    has_texs = true;
                }
            }
            mesh.indices.extend_from_slice(&[
                corner,
                corner + 1,
                corner + 2,
                corner + 1,
                corner + 2,
                corner + 3,
            ]);
        }
    }
    if has_colors {
        mesh.colors = Some(colors);
    }
    if has_texs {
        mesh.texs = Some(texs);
    }
    mesh
}

/// Subdivide a flat quad into 2 * (level + 1)^2 triangles
///
/// Level 0 is the quad itself split along one diagonal.
pub fn tessellate_quad(
    verts: &[Point; 4],
    colors: Option<&[Color; 4]>,
    texs: Option<&[Point; 4]>,
    level: usize,
) -> QuadMesh {
    grid(
        level,
        |u, v| bilerp_point(u, v, verts[0], verts[1], verts[2], verts[3]),
        |u, v| colors.map(|c| bilerp_color(u, v, c[0], c[1], c[2], c[3])),
        |u, v| texs.map(|t| bilerp_point(u, v, t[0], t[1], t[2], t[3])),
    )
}

/// Subdivide a cubic-edged Coons patch
///
/// Corner values (colors, texture coordinates) are interpolated
/// bilinearly; only the geometry follows the cubic boundary.
pub fn tessellate_coons(
    verts: &[Point; 12],
    colors: Option<&[Color; 4]>,
    texs: Option<&[Point; 4]>,
    level: usize,
) -> QuadMesh {
    grid(
        level.max(1),
        |u, v| coons_point(u, v, verts),
        |u, v| colors.map(|c| bilerp_color(u, v, c[0], c[1], c[2], c[3])),
        |u, v| texs.map(|t| bilerp_point(u, v, t[0], t[1], t[2], t[3])),
    )
}
