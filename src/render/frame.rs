use crate::foundation::core::{Resolution, Rgba8};
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::mul_div255_u16;

/// A rendered buffer as premultiplied RGBA8 pixels, row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Fully transparent buffer of the requested size.
    pub fn transparent(res: Resolution) -> Self {
        Self {
            width: res.width,
            height: res.height,
            data: vec![0u8; res.byte_len()],
        }
    }

    /// Buffer filled with one straight-alpha color.
    pub fn filled(res: Resolution, rgba: Rgba8) -> Self {
        let px = crate::foundation::core::premul_rgba8(rgba);
        Self {
            width: res.width,
            height: res.height,
            data: px.repeat(res.pixel_count()),
        }
    }

    pub fn from_premul_bytes(res: Resolution, data: Vec<u8>) -> MotionResult<Self> {
        if data.len() != res.byte_len() {
            return Err(MotionError::render(format!(
                "buffer size mismatch: got {} bytes, expected {} for {}x{}",
                data.len(),
                res.byte_len(),
                res.width,
                res.height
            )));
        }
        Ok(Self {
            width: res.width,
            height: res.height,
            data,
        })
    }

    pub fn resolution(&self) -> Resolution {
        Resolution {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Flatten over an opaque background so every pixel ends with alpha 255.
    pub fn flatten_over(&mut self, bg_rgba: Rgba8) {
        flatten_premul_over_bg_in_place(&mut self.data, bg_rgba);
    }
}

/// Composite premultiplied pixels over `bg_rgba` (straight alpha, treated as opaque).
pub(crate) fn flatten_premul_over_bg_in_place(data: &mut [u8], bg_rgba: Rgba8) {
    let bg_r = u16::from(bg_rgba[0]);
    let bg_g = u16::from(bg_rgba[1]);
    let bg_b = u16::from(bg_rgba[2]);

    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        let inv = 255u16 - a;
        px[0] = (u16::from(px[0]) + mul_div255_u16(bg_r, inv)).min(255) as u8;
        px[1] = (u16::from(px[1]) + mul_div255_u16(bg_g, inv)).min(255) as u8;
        px[2] = (u16::from(px[2]) + mul_div255_u16(bg_b, inv)).min(255) as u8;
        px[3] = 255;
    }
}

/// Undo premultiplication (straight alpha out).
pub(crate) fn unpremultiply_rgba8_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

pub(crate) fn premultiply_rgba8_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = mul_div255_u16(u16::from(*c), a) as u8;
        }
    }
}
