//! Frame ranges, background and motion-blur compositing for a list of drawables.

use tracing::debug;

use crate::animation::vector::ColorProperty;
use crate::config::{EngineConfig, MotionBlurConfig};
use crate::drawable::Drawable;
use crate::foundation::core::Resolution;
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::composite::paint_over;
use crate::render::frame::FrameRGBA;

/// Hold time before and after the animated range, in frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pause {
    pub before: i64,
    pub after: i64,
}

/// A timed sequence of drawables rendered to opaque frames.
#[derive(Clone, Debug)]
pub struct Scene {
    start: i64,
    end: i64,
    step: i64,
    pause: Pause,
    pub background: ColorProperty,
    pub motion_blur: bool,
    drawables: Vec<Drawable>,
    blur: MotionBlurConfig,
}

impl Scene {
    /// `frames()` covers `start..end + before + after` in increments of `step`.
    pub fn new(start: i64, end: i64, step: i64, pause: Pause) -> MotionResult<Self> {
        if step < 1 {
            return Err(MotionError::validation("scene step must be >= 1"));
        }
        if end < start {
            return Err(MotionError::validation(format!(
                "scene end ({end}) must not precede start ({start})"
            )));
        }
        if pause.before < 0 || pause.after < 0 {
            return Err(MotionError::validation("scene pauses must be non-negative"));
        }
        Ok(Self {
            start,
            end,
            step,
            pause,
            background: ColorProperty::from_rgba8([0, 0, 0, 255]),
            motion_blur: false,
            drawables: Vec::new(),
            blur: MotionBlurConfig::default(),
        })
    }

    /// Scene whose motion-blur tunables come from `config`.
    pub fn with_config(
        start: i64,
        end: i64,
        step: i64,
        pause: Pause,
        config: &EngineConfig,
    ) -> MotionResult<Self> {
        config.validate()?;
        let mut scene = Self::new(start, end, step, pause)?;
        scene.blur = config.motion_blur;
        Ok(scene)
    }

    pub fn with_motion_blur(mut self, enabled: bool) -> Self {
        self.motion_blur = enabled;
        self
    }

    pub fn add(&mut self, drawable: impl Into<Drawable>) -> &mut Self {
        self.drawables.push(drawable.into());
        self
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn drawables_mut(&mut self) -> &mut [Drawable] {
        &mut self.drawables
    }

    pub fn pause(&self) -> Pause {
        self.pause
    }

    pub fn blur_config(&self) -> MotionBlurConfig {
        self.blur
    }

    /// Logical frames to render, in order. Each call starts over.
    pub fn frames(&self) -> impl Iterator<Item = i64> + Clone + use<> {
        let stop = self.end + self.pause.before + self.pause.after;
        (self.start..stop).step_by(self.step as usize)
    }

    pub fn frame_count(&self) -> usize {
        self.frames().count()
    }

    /// Timeline frame sampled for logical frame `frame`.
    pub fn playback_frame(&self, frame: i64) -> i64 {
        frame - self.pause.before
    }

    /// Render logical frame `frame` to an opaque buffer.
    pub fn render(&self, res: Resolution, frame: i64) -> MotionResult<FrameRGBA> {
        let p = self.playback_frame(frame);
        let mut out = if self.motion_blur {
            self.render_blurred(res, p)?
        } else {
            self.composite(res, p)?
        };
        out.flatten_over(self.background.evaluate_rgba8(p));
        debug!(frame, playback = p, "scene frame rendered");
        Ok(out)
    }

    fn composite(&self, res: Resolution, p: i64) -> MotionResult<FrameRGBA> {
        let mut canvas = FrameRGBA::transparent(res);
        for d in &self.drawables {
            if !d.visible_at(p) {
                continue;
            }
            let layer = d.render(res, p)?;
            paint_over(&mut canvas, &layer, 1.0)?;
        }
        Ok(canvas)
    }

    fn render_blurred(&self, res: Resolution, p: i64) -> MotionResult<FrameRGBA> {
        let mut acc = FrameRGBA::transparent(res);
        for (offset, opacity) in blur_samples(self.blur) {
            let sample = self.composite(res, p + offset)?;
            paint_over(&mut acc, &sample, opacity)?;
        }
        Ok(acc)
    }
}

/// `(frame offset, opacity)` pairs in paint order: farthest first, center last at full opacity.
pub fn blur_samples(cfg: MotionBlurConfig) -> Vec<(i64, f32)> {
    let k = i64::from(cfg.samples);
    let mut out = Vec::with_capacity((2 * k + 1) as usize);
    for i in (1..=k).rev() {
        let opacity = (k + 1 - i) as f32 / (k + 1) as f32;
        out.push((-i * cfg.step, opacity));
        out.push((i * cfg.step, opacity));
    }
    out.push((0, 1.0));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/scene.rs"]
mod tests;
