//! Rendering buffer of premultiplied pixels

use crate::color::Pixel;

#[derive(Debug, Default, Clone)]
pub struct PixelBuffer {
    data: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Buffer of transparent pixels, panics on zero dimensions
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("cannot create a pixel buffer with 0 width or height");
        }
        PixelBuffer {
            data: vec![Pixel::ZERO; width * height],
            width,
            height,
        }
    }

    pub fn from_pixels(data: Vec<Pixel>, width: usize, height: usize) -> Self {
        assert_eq!(data.len(), width * height);
        PixelBuffer { data, width, height }
    }

    pub fn width(&self) -> i64 {
        self.width as i64
    }
    pub fn height(&self) -> i64 {
        self.height as i64
    }

    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.data[y * self.width + x]
    }
    pub fn set(&mut self, x: usize, y: usize, p: Pixel) {
        self.data[y * self.width + x] = p;
    }

    pub fn row(&self, y: usize) -> &[Pixel] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Mutable span of `len` pixels starting at (x, y)
    ///
    /// The caller guarantees the span lies within the row.
    pub fn span_mut(&mut self, x: i64, y: i64, len: i64) -> &mut [Pixel] {
        debug_assert!(y >= 0 && y < self.height as i64);
        debug_assert!(x >= 0 && len >= 0 && x + len <= self.width as i64);
        let start = y as usize * self.width + x as usize;
        &mut self.data[start..start + len as usize]
    }

    pub fn fill(&mut self, p: Pixel) {
        for v in self.data.iter_mut() {
            *v = p;
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.data.iter().all(|p| p.alpha() == 255)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set() {
        let mut buf = PixelBuffer::new(4, 3);
        buf.set(3, 2, Pixel(0xff00ff00));
        assert_eq!(buf.get(3, 2), Pixel(0xff00ff00));
        assert_eq!(buf.get(0, 0), Pixel::ZERO);
    }
    #[test]
    fn opacity() {
        let mut buf = PixelBuffer::new(2, 2);
        assert!(!buf.is_opaque());
        buf.fill(Pixel(0xff102030));
        assert!(buf.is_opaque());
    }
    #[test]
    #[should_panic]
    fn zero_size() {
        PixelBuffer::new(0, 10);
    }
}
