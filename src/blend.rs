//! Porter-Duff compositing on premultiplied pixels

use crate::buffer::PixelBuffer;
use crate::color::Pixel;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlendMode {
    /// 0
    Clear,
    /// S
    Src,
    /// D
    Dst,
    /// S + (1 - Sa) * D
    SrcOver,
    /// D + (1 - Da) * S
    DstOver,
    /// Da * S
    SrcIn,
    /// Sa * D
    DstIn,
    /// (1 - Da) * S
    SrcOut,
    /// (1 - Sa) * D
    DstOut,
    /// Da * S + (1 - Sa) * D
    SrcATop,
    /// Sa * D + (1 - Da) * S
    DstATop,
    /// (1 - Sa) * D + (1 - Da) * S
    Xor,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::SrcOver
    }
}

/// Divide a 16-bit product by 255 with rounding
///
/// (x + 128) * 257 >> 16 equals round(x / 255) for x in [0, 255*255].
pub fn div255(x: u32) -> u32 {
    (x + 128) * 257 >> 16
}

fn over(src: u32, dst: u32, src_alpha: u32) -> u32 {
    src + div255((255 - src_alpha) * dst)
}

fn scale(src: u32, alpha: u32) -> u32 {
    div255(src * alpha)
}

fn xor_ch(src: u32, dst: u32, src_alpha: u32, dst_alpha: u32) -> u32 {
    div255((255 - src_alpha) * dst + (255 - dst_alpha) * src)
}

fn src_over(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.alpha();
    Pixel::pack_argb(
        over(sa, dst.alpha(), sa),
        over(src.red(), dst.red(), sa),
        over(src.green(), dst.green(), sa),
        over(src.blue(), dst.blue(), sa),
    )
}

fn dst_over(src: Pixel, dst: Pixel) -> Pixel {
    src_over(dst, src)
}

fn src_in(src: Pixel, dst: Pixel) -> Pixel {
    let da = dst.alpha();
    Pixel::pack_argb(
        scale(src.alpha(), da),
        scale(src.red(), da),
        scale(src.green(), da),
        scale(src.blue(), da),
    )
}

fn src_out(src: Pixel, dst: Pixel) -> Pixel {
    src_in(src, Pixel(!dst.0 & 0xff00_0000))
}

fn src_atop(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.alpha();
    let da = dst.alpha();
    Pixel::pack_argb(
        scale(src.alpha(), da) + div255((255 - sa) * dst.alpha()),
        scale(src.red(), da) + div255((255 - sa) * dst.red()),
        scale(src.green(), da) + div255((255 - sa) * dst.green()),
        scale(src.blue(), da) + div255((255 - sa) * dst.blue()),
    )
}

fn xor(src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.alpha();
    let da = dst.alpha();
    // both opaque cancels to nothing
    if sa == 255 && da == 255 {
        return Pixel::ZERO;
    }
    Pixel::pack_argb(
        xor_ch(sa, da, sa, da),
        xor_ch(src.red(), dst.red(), sa, da),
        xor_ch(src.green(), dst.green(), sa, da),
        xor_ch(src.blue(), dst.blue(), sa, da),
    )
}

/// Composite one source pixel onto one destination pixel
pub fn blend_pix(mode: BlendMode, src: Pixel, dst: Pixel) -> Pixel {
    match mode {
        BlendMode::Clear => Pixel::ZERO,
        BlendMode::Src => src,
        BlendMode::Dst => dst,
        BlendMode::SrcOver => src_over(src, dst),
        BlendMode::DstOver => dst_over(src, dst),
        BlendMode::SrcIn => src_in(src, dst),
        BlendMode::DstIn => src_in(dst, src),
        BlendMode::SrcOut => src_out(src, dst),
        BlendMode::DstOut => src_out(dst, src),
        BlendMode::SrcATop => src_atop(src, dst),
        BlendMode::DstATop => src_atop(dst, src),
        BlendMode::Xor => xor(src, dst),
    }
}

/// Collapse a mode given the source alpha of a solid fill
///
/// With alpha exactly 1.0 or 0.0 several operators become cheaper
/// equivalents; anything in between passes through.
pub fn simplify(mode: BlendMode, alpha: f64) -> BlendMode {
    if alpha == 1.0 {
        simplify_opaque(mode)
    } else if alpha == 0.0 {
        match mode {
            BlendMode::Src
            | BlendMode::SrcIn
            | BlendMode::DstIn
            | BlendMode::SrcOut
            | BlendMode::DstATop => BlendMode::Clear,
            BlendMode::SrcOver
            | BlendMode::DstOver
            | BlendMode::DstOut
            | BlendMode::SrcATop
            | BlendMode::Xor => BlendMode::Dst,
            other => other,
        }
    } else {
        mode
    }
}

/// Collapse a mode knowing every source pixel is opaque
pub fn simplify_opaque(mode: BlendMode) -> BlendMode {
    match mode {
        BlendMode::SrcOver => BlendMode::Src,
        BlendMode::DstIn => BlendMode::Dst,
        BlendMode::SrcATop => BlendMode::SrcIn,
        BlendMode::DstOut => BlendMode::Clear,
        BlendMode::Xor => BlendMode::SrcOut,
        other => other,
    }
}

fn clip_span(x: i64, len: i64, width: i64) -> (i64, i64) {
    let x0 = x.max(0);
    let x1 = (x + len).min(width);
    (x0, x1 - x0)
}

/// Blend a constant source across a horizontal span
pub fn blend_row(buf: &mut PixelBuffer, src: Pixel, x: i64, y: i64, len: i64, mode: BlendMode) {
    if y < 0 || y >= buf.height() {
        return;
    }
    let (x0, len) = clip_span(x, len, buf.width());
    if len <= 0 {
        return;
    }
    if mode == BlendMode::Dst {
        return;
    }
    for px in buf.span_mut(x0, y, len) {
        *px = blend_pix(mode, src, *px);
    }
}

/// Blend a shaded source row across a horizontal span
pub fn blend_shader_row(buf: &mut PixelBuffer, row: &[Pixel], x: i64, y: i64, mode: BlendMode) {
    if y < 0 || y >= buf.height() || mode == BlendMode::Dst {
        return;
    }
    let (x0, len) = clip_span(x, row.len() as i64, buf.width());
    if len <= 0 {
        return;
    }
    let off = (x0 - x) as usize;
    let src = &row[off..off + len as usize];
    for (px, &s) in buf.span_mut(x0, y, len).iter_mut().zip(src) {
        *px = blend_pix(mode, s, *px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    const RED: Pixel = Pixel(0xffff0000);
    const BLUE_HALF: Pixel = Pixel(0x80000080);

    #[test]
    fn div255_is_rounded() {
        assert_eq!(div255(0), 0);
        assert_eq!(div255(255 * 255), 255);
        assert_eq!(div255(127), 0);
        assert_eq!(div255(128), 1);
        for x in (0..=255 * 255).step_by(997) {
            let exact = ((x as f64) / 255.0).round() as u32;
            assert_eq!(div255(x), exact, "x = {}", x);
        }
    }

    #[test]
    fn identities() {
        assert_eq!(blend_pix(BlendMode::Src, RED, BLUE_HALF), RED);
        assert_eq!(blend_pix(BlendMode::Dst, RED, BLUE_HALF), BLUE_HALF);
        assert_eq!(blend_pix(BlendMode::Clear, RED, BLUE_HALF), Pixel::ZERO);
    }

    #[test]
    fn src_over_opaque_src_wins() {
        assert_eq!(blend_pix(BlendMode::SrcOver, RED, BLUE_HALF), RED);
    }

    #[test]
    fn src_over_transparent_src_keeps_dst() {
        assert_eq!(blend_pix(BlendMode::SrcOver, Pixel::ZERO, BLUE_HALF), BLUE_HALF);
    }

    #[test]
    fn xor_double_opaque_clears() {
        assert_eq!(blend_pix(BlendMode::Xor, RED, Pixel(0xff00ff00)), Pixel::ZERO);
    }

    #[test]
    fn src_in_scales_by_dst_alpha() {
        let out = blend_pix(BlendMode::SrcIn, RED, BLUE_HALF);
        assert_eq!(out.alpha(), div255(255 * 128));
        assert_eq!(out.red(), div255(255 * 128));
        assert_eq!(out.blue(), 0);
    }

    #[test]
    fn simplify_tables() {
        assert_eq!(simplify(BlendMode::SrcOver, 1.0), BlendMode::Src);
        assert_eq!(simplify(BlendMode::Xor, 1.0), BlendMode::SrcOut);
        assert_eq!(simplify(BlendMode::DstOut, 1.0), BlendMode::Clear);
        assert_eq!(simplify(BlendMode::Src, 0.0), BlendMode::Clear);
        assert_eq!(simplify(BlendMode::Xor, 0.0), BlendMode::Dst);
        assert_eq!(simplify(BlendMode::SrcIn, 0.5), BlendMode::SrcIn);
    }

    #[test]
    fn row_clipping() {
        let mut buf = PixelBuffer::new(4, 2);
        blend_row(&mut buf, RED, -2, 0, 8, BlendMode::Src);
        for x in 0..4 {
            assert_eq!(buf.get(x, 0), RED);
            assert_eq!(buf.get(x, 1), Pixel::ZERO);
        }
        let row = vec![Color::white().premul(); 3];
        blend_shader_row(&mut buf, &row, 2, 1, BlendMode::Src);
        assert_eq!(buf.get(1, 1), Pixel::ZERO);
        assert_eq!(buf.get(2, 1), Pixel(0xffffffff));
        assert_eq!(buf.get(3, 1), Pixel(0xffffffff));
    }
}
