//! Reading and writing pixel buffers as image files
//!
//! Files store straight (unpremultiplied) RGBA; the buffer stores
//! premultiplied ARGB. Conversion happens at the boundary in both
//! directions.

use crate::blend::div255;
use crate::buffer::PixelBuffer;
use crate::color::Pixel;
use std::path::Path;

/// Read an image file into a premultiplied pixel buffer
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<PixelBuffer, image::ImageError> {
    let img = image::open(filename)?.to_rgba();
    let (width, height) = img.dimensions();
    let raw = img.into_raw();
    let pixels = raw
        .chunks(4)
        .map(|px| {
            let (r, g, b, a) = (px[0] as u32, px[1] as u32, px[2] as u32, px[3] as u32);
            Pixel::pack_argb(a, div255(r * a), div255(g * a), div255(b * a))
        })
        .collect();
    Ok(PixelBuffer::from_pixels(pixels, width as usize, height as usize))
}

/// Write a pixel buffer to an image file, format chosen by extension
pub fn write_file<P: AsRef<Path>>(buf: &PixelBuffer, filename: P) -> Result<(), std::io::Error> {
    let mut bytes = Vec::with_capacity(buf.pixels().len() * 4);
    for px in buf.pixels() {
        bytes.extend_from_slice(&px.unpremul());
    }
    image::save_buffer(
        filename,
        &bytes,
        buf.width() as u32,
        buf.height() as u32,
        image::RGBA(8),
    )
}

/// Compare two image files pixel for pixel
pub fn img_diff<P: AsRef<Path>>(file1: P, file2: P) -> Result<bool, image::ImageError> {
    let a = read_file(file1)?;
    let b = read_file(file2)?;
    if a.width() != b.width() || a.height() != b.height() {
        return Ok(false);
    }
    Ok(a.pixels() == b.pixels())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, Paint};
    use crate::color::Color;
    use crate::geom::Rect;

    #[test]
    fn write_read_roundtrip() {
        let mut canvas = Canvas::new(PixelBuffer::new(16, 16));
        canvas.clear(Color::rgb(0.0, 0.0, 1.0));
        let mut p = Paint::with_color(Color::rgb(1.0, 0.0, 0.0));
        canvas.draw_rect(Rect::from_wh(8.0, 8.0), &mut p);
        let dir = std::env::temp_dir();
        let path = dir.join("scanfill_roundtrip.png");
        write_file(canvas.device(), &path).unwrap();
        let back = read_file(&path).unwrap();
        assert_eq!(back.width(), 16);
        assert_eq!(back.pixels(), canvas.device().pixels());
        let _ = std::fs::remove_file(&path);
    }
}
