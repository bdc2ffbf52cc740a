use crate::foundation::core::{Fps, FrameIndex, Resolution};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub resolution: Resolution,
    pub fps: Fps,
    /// Color that transparent pixels are flattened over (straight alpha).
    pub bg_rgba: [u8; 4],
}

/// Sink contract for consuming rendered frames in output order.
///
/// `push_frame` is called with strictly increasing [`FrameIndex`] values. A sink is either
/// finalized with `end` or discarded with `abort`, never both.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> MotionResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MotionResult<()>;
    /// Finalize the output.
    fn end(&mut self) -> MotionResult<()>;
    /// Discard any partial output. Must be safe to call at any point, including before `begin`.
    fn abort(&mut self);
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finalized: bool,
    aborted: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> MotionResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finalized = false;
        self.aborted = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> MotionResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| MotionError::export_io("in-memory sink not started"))?;
        if frame.resolution() != cfg.resolution {
            return Err(MotionError::render(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.resolution.width, cfg.resolution.height
            )));
        }
        if let Some((last, _)) = self.frames.last()
            && idx.0 <= last.0
        {
            return Err(MotionError::export_io(
                "in-memory sink received out-of-order frame index",
            ));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> MotionResult<()> {
        if self.cfg.is_none() {
            return Err(MotionError::export_io("in-memory sink not started"));
        }
        self.finalized = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.frames.clear();
        self.aborted = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
