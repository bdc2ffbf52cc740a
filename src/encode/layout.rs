use crate::foundation::core::Rgba8;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::frame::FrameRGBA;

/// Bytes per pixel of the container input layout.
pub const BGR24_BYTES_PER_PIXEL: usize = 3;

/// Convert a premultiplied frame into packed BGR24, rows top-down, flattening alpha over `bg`.
///
/// `dst` is resized to `width * height * 3` bytes.
pub fn premul_rgba8_to_bgr24(dst: &mut Vec<u8>, frame: &FrameRGBA, bg: Rgba8) -> MotionResult<()> {
    let pixels = frame.resolution().pixel_count();
    if frame.data.len() != pixels * 4 {
        return Err(MotionError::render(
            "frame.data size mismatch with width*height*4",
        ));
    }
    dst.resize(pixels * BGR24_BYTES_PER_PIXEL, 0);

    let bg = [u16::from(bg[0]), u16::from(bg[1]), u16::from(bg[2])];
    for (d, s) in dst
        .chunks_exact_mut(BGR24_BYTES_PER_PIXEL)
        .zip(frame.data.chunks_exact(4))
    {
        let inv = 255u16 - u16::from(s[3]);
        let flat = |c: usize| -> u8 {
            if inv == 0 {
                s[c]
            } else {
                (u16::from(s[c]) + mul_div255_u16(bg[c], inv)).min(255) as u8
            }
        };
        d[0] = flat(2);
        d[1] = flat(1);
        d[2] = flat(0);
    }
    Ok(())
}
