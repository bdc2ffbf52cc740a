use crate::foundation::core::Resolution;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::frame::FrameRGBA;

pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel with an extra opacity multiplier.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> MotionResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MotionError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Paint `src` over `dst` (same size) at the given opacity.
pub fn paint_over(dst: &mut FrameRGBA, src: &FrameRGBA, opacity: f32) -> MotionResult<()> {
    if dst.width != src.width || dst.height != src.height {
        return Err(MotionError::render(format!(
            "cannot composite {}x{} over {}x{}",
            src.width, src.height, dst.width, dst.height
        )));
    }
    over_in_place(&mut dst.data, &src.data, opacity)
}

/// Scale `src` into the rectangle at `(x, y)` of size `(w, h)` on a fresh `canvas`-sized buffer.
///
/// Pixels outside the canvas are clipped; an empty rectangle yields a transparent canvas.
pub fn place_scaled(
    src: &FrameRGBA,
    canvas: Resolution,
    x: i64,
    y: i64,
    w: i64,
    h: i64,
) -> MotionResult<FrameRGBA> {
    let mut out = FrameRGBA::transparent(canvas);
    if w <= 0 || h <= 0 {
        return Ok(out);
    }
    let (w, h) = (clamp_dim(w), clamp_dim(h));

    let scaled = if w == src.width && h == src.height {
        src.data.clone()
    } else {
        let img = image::RgbaImage::from_raw(src.width, src.height, src.data.clone())
            .ok_or_else(|| MotionError::render("raster has an invalid buffer size"))?;
        // Filtering premultiplied pixels keeps edges free of color fringes.
        image::imageops::resize(&img, w, h, image::imageops::FilterType::Triangle).into_raw()
    };

    let out_w = i64::from(out.width);
    let out_h = i64::from(out.height);
    for sy in 0..i64::from(h) {
        let dy = y + sy;
        if dy < 0 || dy >= out_h {
            continue;
        }
        let x0 = x.max(0);
        let x1 = (x + i64::from(w)).min(out_w);
        if x0 >= x1 {
            break;
        }
        let sx0 = (x0 - x) as usize;
        let count = (x1 - x0) as usize;
        let src_start = ((sy as usize) * (w as usize) + sx0) * 4;
        let dst_start = ((dy as usize) * (out.width as usize) + x0 as usize) * 4;
        out.data[dst_start..dst_start + count * 4]
            .copy_from_slice(&scaled[src_start..src_start + count * 4]);
    }
    Ok(out)
}

fn clamp_dim(v: i64) -> u32 {
    v.clamp(1, 16_384) as u32
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
