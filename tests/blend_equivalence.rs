//! The mode-simplification tables claim certain operators collapse to
//! cheaper ones at the alpha extremes. Verify the claimed pairs pixel
//! for pixel over random premultiplied inputs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scanfill::{blend_pix, simplify, BlendMode, Pixel};

fn random_premul(rng: &mut StdRng) -> Pixel {
    let a = rng.gen_range(0..=255u32);
    let r = rng.gen_range(0..=a);
    let g = rng.gen_range(0..=a);
    let b = rng.gen_range(0..=a);
    Pixel::pack_argb(a, r, g, b)
}

fn random_opaque(rng: &mut StdRng) -> Pixel {
    Pixel::pack_argb(
        255,
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
    )
}

#[test]
fn opaque_source_collapses() {
    let pairs = [
        (BlendMode::SrcOver, BlendMode::Src),
        (BlendMode::DstIn, BlendMode::Dst),
        (BlendMode::SrcATop, BlendMode::SrcIn),
        (BlendMode::DstOut, BlendMode::Clear),
        (BlendMode::Xor, BlendMode::SrcOut),
    ];
    let mut rng = StdRng::seed_from_u64(0xb1e4d);
    for _ in 0..10_000 {
        let src = random_opaque(&mut rng);
        let dst = random_premul(&mut rng);
        for &(full, collapsed) in &pairs {
            assert_eq!(
                blend_pix(full, src, dst),
                blend_pix(collapsed, src, dst),
                "{:?} vs {:?} on src={:08x} dst={:08x}",
                full,
                collapsed,
                src.0,
                dst.0
            );
            assert_eq!(simplify(full, 1.0), collapsed);
        }
    }
}

#[test]
fn transparent_source_collapses() {
    let pairs = [
        (BlendMode::Src, BlendMode::Clear),
        (BlendMode::SrcIn, BlendMode::Clear),
        (BlendMode::DstIn, BlendMode::Clear),
        (BlendMode::SrcOut, BlendMode::Clear),
        (BlendMode::DstATop, BlendMode::Clear),
        (BlendMode::SrcOver, BlendMode::Dst),
        (BlendMode::DstOver, BlendMode::Dst),
        (BlendMode::DstOut, BlendMode::Dst),
        (BlendMode::SrcATop, BlendMode::Dst),
        (BlendMode::Xor, BlendMode::Dst),
    ];
    let mut rng = StdRng::seed_from_u64(0xd5f);
    let src = Pixel::ZERO;
    for _ in 0..10_000 {
        let dst = random_premul(&mut rng);
        for &(full, collapsed) in &pairs {
            assert_eq!(
                blend_pix(full, src, dst),
                blend_pix(collapsed, src, dst),
                "{:?} vs {:?} on dst={:08x}",
                full,
                collapsed,
                dst.0
            );
            assert_eq!(simplify(full, 0.0), collapsed);
        }
    }
}

#[test]
fn src_is_identity_on_source() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10_000 {
        let src = random_premul(&mut rng);
        let dst = random_premul(&mut rng);
        assert_eq!(blend_pix(BlendMode::Src, src, dst), src);
        assert_eq!(blend_pix(BlendMode::Clear, src, dst), Pixel::ZERO);
        assert_eq!(blend_pix(BlendMode::Dst, src, dst), dst);
    }
}

#[test]
fn results_stay_premultiplied() {
    // no operator may produce a channel above its alpha
    let modes = [
        BlendMode::Clear,
        BlendMode::Src,
        BlendMode::Dst,
        BlendMode::SrcOver,
        BlendMode::DstOver,
        BlendMode::SrcIn,
        BlendMode::DstIn,
        BlendMode::SrcOut,
        BlendMode::DstOut,
        BlendMode::SrcATop,
        BlendMode::DstATop,
        BlendMode::Xor,
    ];
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..2_000 {
        let src = random_premul(&mut rng);
        let dst = random_premul(&mut rng);
        for &mode in &modes {
            let out = blend_pix(mode, src, dst);
            let a = out.alpha();
            assert!(out.red() <= a && out.green() <= a && out.blue() <= a, "{:?}", mode);
        }
    }
}
