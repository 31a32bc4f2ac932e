//! Cross-checks the two fillers against each other: for convex
//! polygons the two-edge walker and the winding walker must produce
//! identical pixels.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scanfill::{
    fill_convex_solid, fill_path_solid, polygon_to_segments, sort_by_top, sort_by_top_x, Color,
    PixelBuffer, Point,
};

fn fill_both_ways(size: usize, pts: &[Point]) -> (PixelBuffer, PixelBuffer) {
    let red = Color::rgb(1.0, 0.0, 0.0).premul();
    let mode = scanfill::BlendMode::Src;

    let mut convex = PixelBuffer::new(size, size);
    let mut segs = Vec::new();
    polygon_to_segments(&mut segs, convex.width(), convex.height(), pts);
    sort_by_top(&mut segs);
    fill_convex_solid(&mut convex, segs, red, mode);

    let mut path = PixelBuffer::new(size, size);
    let mut segs = Vec::new();
    polygon_to_segments(&mut segs, path.width(), path.height(), pts);
    sort_by_top_x(&mut segs);
    fill_path_solid(&mut path, segs, red, mode);

    (convex, path)
}

#[test]
fn fixed_convex_polygons_agree() {
    let cases: Vec<Vec<Point>> = vec![
        vec![
            Point::new(3.0, 2.0),
            Point::new(17.0, 5.0),
            Point::new(9.0, 18.0),
        ],
        vec![
            Point::new(2.0, 2.0),
            Point::new(18.0, 2.0),
            Point::new(18.0, 18.0),
            Point::new(2.0, 18.0),
        ],
        vec![
            Point::new(10.0, 1.0),
            Point::new(19.0, 8.0),
            Point::new(15.0, 19.0),
            Point::new(5.0, 19.0),
            Point::new(1.0, 8.0),
        ],
    ];
    for pts in &cases {
        let (convex, path) = fill_both_ways(20, pts);
        assert_eq!(convex.pixels(), path.pixels());
    }
}

#[test]
fn left_clipped_triangle_agrees() {
    // negative-slope hypotenuse leaving through x=0; its boundary
    // stand-in must wind with the edge or the path filler never
    // closes the clipped rows
    let pts = [
        Point::new(4.0, 0.0),
        Point::new(4.0, 8.0),
        Point::new(-6.0, 8.0),
    ];
    let (convex, path) = fill_both_ways(10, &pts);
    assert_eq!(convex.pixels(), path.pixels());
    let red = Color::rgb(1.0, 0.0, 0.0).premul();
    assert_eq!(path.get(0, 5), red);
    assert_eq!(path.get(3, 7), red);
    assert_eq!(path.get(0, 1), scanfill::Pixel::ZERO);
}

#[test]
fn random_convex_polygons_agree() {
    // points on a circle at sorted angles are always convex
    let mut rng = StdRng::seed_from_u64(0x5ca9f111);
    for trial in 0..200 {
        let n = rng.gen_range(3..9);
        let cx = rng.gen_range(8.0..24.0);
        let cy = rng.gen_range(8.0..24.0);
        let r = rng.gen_range(2.0..12.0);
        let mut angles: Vec<f64> = (0..n)
            .map(|_| rng.gen_range(0.0..std::f64::consts::TAU))
            .collect();
        angles.sort_by(|a, b| a.total_cmp(b));
        angles.dedup_by(|a, b| (*a - *b).abs() < 1e-3);
        if angles.len() < 3 {
            continue;
        }
        let pts: Vec<Point> = angles
            .iter()
            .map(|t| Point::new(cx + r * t.cos(), cy + r * t.sin()))
            .collect();
        let (convex, path) = fill_both_ways(32, &pts);
        assert_eq!(convex.pixels(), path.pixels(), "trial {}", trial);
    }
}

#[test]
fn clipped_convex_polygons_agree() {
    // polygons poking over each boundary still match
    let mut rng = StdRng::seed_from_u64(7);
    for trial in 0..200 {
        let cx = rng.gen_range(-8.0..24.0);
        let cy = rng.gen_range(-8.0..24.0);
        let r = rng.gen_range(3.0..15.0);
        let n = rng.gen_range(3..7);
        let phase = rng.gen_range(0.0..std::f64::consts::TAU);
        let pts: Vec<Point> = (0..n)
            .map(|i| {
                let t = phase + i as f64 / n as f64 * std::f64::consts::TAU;
                Point::new(cx + r * t.cos(), cy + r * t.sin())
            })
            .collect();
        let (convex, path) = fill_both_ways(16, &pts);
        assert_eq!(convex.pixels(), path.pixels(), "trial {}", trial);
    }
}
