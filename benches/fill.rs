use criterion::{criterion_group, criterion_main, Criterion};
use scanfill::{
    BlendMode, Canvas, Color, LinearGradient, Paint, Path, PixelBuffer, Point, Rect, TileMode,
};

fn convex_fill(c: &mut Criterion) {
    let mut canvas = Canvas::new(PixelBuffer::new(1024, 768));
    let mut paint = Paint::with_color(Color::rgb(0.8, 0.2, 0.1));
    let pts = [
        Point::new(512.0, 10.0),
        Point::new(1000.0, 380.0),
        Point::new(512.0, 750.0),
        Point::new(20.0, 380.0),
    ];
    c.bench_function("convex quad 1024x768", |b| {
        b.iter(|| canvas.draw_convex_polygon(&pts, &mut paint))
    });
}

fn path_fill(c: &mut Criterion) {
    let mut canvas = Canvas::new(PixelBuffer::new(1024, 768));
    let mut paint = Paint::with_color(Color::rgb(0.1, 0.4, 0.9));
    let mut star = Path::new();
    let (cx, cy) = (512.0, 384.0);
    for i in 0..10 {
        let t = i as f64 / 10.0 * std::f64::consts::TAU;
        let r = if i % 2 == 0 { 360.0 } else { 140.0 };
        let (x, y) = (cx + r * t.cos(), cy + r * t.sin());
        if i == 0 {
            star.move_to(x, y);
        } else {
            star.line_to(x, y);
        }
    }
    star.close_polygon();
    c.bench_function("star path 1024x768", |b| {
        b.iter(|| canvas.draw_path(&star, &mut paint))
    });
}

fn gradient_fill(c: &mut Criterion) {
    let mut canvas = Canvas::new(PixelBuffer::new(1024, 768));
    let grad = LinearGradient::new(
        Point::new(0.0, 0.0),
        Point::new(1024.0, 0.0),
        &[
            Color::rgb(1.0, 0.0, 0.0),
            Color::rgb(0.0, 1.0, 0.0),
            Color::rgb(0.0, 0.0, 1.0),
        ],
        TileMode::Clamp,
    )
    .expect("valid gradient");
    let mut paint = Paint::with_shader(Box::new(grad)).mode(BlendMode::Src);
    let rect = Rect::from_wh(1024.0, 768.0);
    c.bench_function("gradient rect 1024x768", |b| {
        b.iter(|| canvas.draw_rect(rect, &mut paint))
    });
}

criterion_group!(benches, convex_fill, path_fill, gradient_fill);
criterion_main!(benches);
