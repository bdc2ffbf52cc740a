use crate::animation::property::Property;
use crate::foundation::error::MotionResult;
use crate::render::blur::gaussian_blur;
use crate::render::frame::{FrameRGBA, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};

/// Post-processing step applied to a drawable's rendered buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Modifier {
    /// Per-frame on/off switch; disabled modifiers pass the buffer through.
    pub enabled: Property<bool>,
    pub kind: ModifierKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModifierKind {
    /// Mirror horizontally (`x`) and/or vertically (`y`).
    Flip { x: Property<bool>, y: Property<bool> },
    /// Hue shift in turns; saturation, value and alpha multipliers.
    Hsva {
        h: Property<f64>,
        s: Property<f64>,
        v: Property<f64>,
        a: Property<f64>,
    },
    GaussianBlur { radius: Property<i64> },
}

impl Modifier {
    pub fn new(kind: ModifierKind) -> Self {
        Self {
            enabled: Property::new(true),
            kind,
        }
    }

    pub fn flip(x: bool, y: bool) -> Self {
        Self::new(ModifierKind::Flip {
            x: Property::new(x),
            y: Property::new(y),
        })
    }

    pub fn hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self::new(ModifierKind::Hsva {
            h: Property::new(h),
            s: Property::new(s),
            v: Property::new(v),
            a: Property::new(a),
        })
    }

    pub fn gaussian_blur(radius: i64) -> Self {
        Self::new(ModifierKind::GaussianBlur {
            radius: Property::new(radius),
        })
    }

    pub fn enabled_at(&self, frame: i64) -> bool {
        self.enabled.evaluate(frame)
    }

    /// Transform `buf` as of `frame`. The enabled flag is checked by the caller.
    pub fn apply(&self, buf: FrameRGBA, frame: i64) -> MotionResult<FrameRGBA> {
        match &self.kind {
            ModifierKind::Flip { x, y } => Ok(flip(buf, x.evaluate(frame), y.evaluate(frame))),
            ModifierKind::Hsva { h, s, v, a } => Ok(adjust_hsva(
                buf,
                h.evaluate(frame),
                s.evaluate(frame),
                v.evaluate(frame),
                a.evaluate(frame),
            )),
            ModifierKind::GaussianBlur { radius } => {
                let r = radius.evaluate(frame).clamp(0, i64::from(u16::MAX)) as u32;
                gaussian_blur(&buf, r)
            }
        }
    }
}

fn flip(mut buf: FrameRGBA, x: bool, y: bool) -> FrameRGBA {
    let w = buf.width as usize;
    let row = w * 4;
    if x {
        for line in buf.data.chunks_exact_mut(row) {
            for i in 0..w / 2 {
                let (a, b) = (i * 4, (w - 1 - i) * 4);
                for c in 0..4 {
                    line.swap(a + c, b + c);
                }
            }
        }
    }
    if y {
        let h = buf.height as usize;
        for r in 0..h / 2 {
            let (top, bottom) = buf.data.split_at_mut((h - 1 - r) * row);
            top[r * row..(r + 1) * row].swap_with_slice(&mut bottom[..row]);
        }
    }
    buf
}

fn adjust_hsva(mut buf: FrameRGBA, h: f64, s: f64, v: f64, a: f64) -> FrameRGBA {
    unpremultiply_rgba8_in_place(&mut buf.data);
    for px in buf.data.chunks_exact_mut(4) {
        if px[3] == 0 {
            continue;
        }
        let (hue, sat, val) = rgb_to_hsv(px[0], px[1], px[2]);
        let hue = (hue + h).rem_euclid(1.0);
        let sat = (sat * s).clamp(0.0, 1.0);
        let val = (val * v).clamp(0.0, 1.0);
        let [r, g, b] = hsv_to_rgb(hue, sat, val);
        px[0] = r;
        px[1] = g;
        px[2] = b;
        px[3] = (f64::from(px[3]) * a).round().clamp(0.0, 255.0) as u8;
    }
    premultiply_rgba8_in_place(&mut buf.data);
    buf
}

fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (r, g, b) = (
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    );
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if max == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let s = delta / max;
    if delta == 0.0 {
        return (0.0, s, max);
    }
    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (h / 6.0, s, max)
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let sector = h * 6.0;
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (i as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    let to_u8 = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b)]
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/modifier.rs"]
mod tests;
