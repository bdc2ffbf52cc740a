use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::export::cancel::CancelToken;
use crate::export::progress::ProgressReporter;
use crate::export::{multi, single};
use crate::foundation::core::{Fps, Resolution};
use crate::foundation::error::{MotionError, MotionResult};
use crate::scene::Scene;

/// Container extension accepted for output files.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// How frames are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Render and encode on the calling thread.
    #[default]
    Single,
    /// Render scene partitions on `workers` threads through a temp directory of images.
    Multi { workers: usize },
}

/// Best-effort completion hook (desktop notification, chat message, ...).
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str) -> anyhow::Result<()>;
}

#[derive(Clone, Default)]
pub struct ExportOptions {
    pub strategy: Strategy,
    pub show_progress: bool,
    pub cancel: CancelToken,
    pub notifier: Option<Arc<dyn Notifier>>,
    pub config: EngineConfig,
}

impl fmt::Debug for ExportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportOptions")
            .field("strategy", &self.strategy)
            .field("show_progress", &self.show_progress)
            .field("cancel", &self.cancel)
            .field("notifier", &self.notifier.is_some())
            .field("config", &self.config)
            .finish()
    }
}

/// Summary of a finished export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub frames_total: u64,
    pub frames_written: u64,
    pub frames_skipped: u64,
    pub scenes: usize,
}

/// One export call: scenes in order, encoded into a single output.
pub struct ExportJob<'a> {
    pub(crate) scenes: Vec<&'a Scene>,
    pub(crate) resolution: Resolution,
    pub(crate) fps: Fps,
    output: PathBuf,
    pub(crate) options: ExportOptions,
}

impl<'a> ExportJob<'a> {
    pub fn new(
        scenes: impl IntoIterator<Item = &'a Scene>,
        resolution: Resolution,
        fps: Fps,
        output: impl Into<PathBuf>,
        options: ExportOptions,
    ) -> Self {
        Self {
            scenes: scenes.into_iter().collect(),
            resolution,
            fps,
            output: output.into(),
            options,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Check every argument before any frame is rendered.
    pub fn validate(&self) -> MotionResult<()> {
        if self.scenes.is_empty() {
            return Err(MotionError::validation("export needs at least one scene"));
        }
        let Resolution { width, height } = self.resolution;
        if width == 0 || height == 0 {
            return Err(MotionError::validation("resolution must be non-zero"));
        }
        if !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(MotionError::validation(format!(
                "resolution {width}x{height} must be even (required for yuv420p mp4 output)"
            )));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(MotionError::validation("fps must be non-zero"));
        }
        let ext_ok = self
            .output
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(OUTPUT_EXTENSION));
        if !ext_ok {
            return Err(MotionError::validation(format!(
                "output '{}' must have a .{OUTPUT_EXTENSION} extension",
                self.output.display()
            )));
        }
        if let Strategy::Multi { workers } = self.options.strategy
            && workers == 0
        {
            return Err(MotionError::validation("workers must be >= 1"));
        }
        self.options.config.validate()
    }

    pub fn frames_total(&self) -> u64 {
        self.scenes.iter().map(|s| s.frame_count() as u64).sum()
    }

    /// Encode to the output path with the system `ffmpeg`.
    pub fn run(&self) -> MotionResult<ExportStats> {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&self.output));
        self.run_with_sink(&mut sink)
    }

    /// Drive all scenes into `sink`. On any error or cancellation the sink is aborted.
    #[tracing::instrument(
        skip_all,
        fields(
            out = %self.output.display(),
            scenes = self.scenes.len(),
            strategy = ?self.options.strategy
        )
    )]
    pub fn run_with_sink(&self, sink: &mut dyn FrameSink) -> MotionResult<ExportStats> {
        self.validate()?;

        let total = self.frames_total();
        info!(total, "export started");
        let mut progress =
            ProgressReporter::new(total, self.scenes.len(), self.options.show_progress);
        let mut guard = SinkGuard::new(sink);
        let result = self
            .drive(&mut guard, &mut progress)
            .map_err(|e| self.cancellation_or(e));
        drop(guard);

        match result {
            Ok(stats) => {
                progress.finish();
                info!(
                    written = stats.frames_written,
                    skipped = stats.frames_skipped,
                    "export done"
                );
                self.notify_done(&stats);
                Ok(stats)
            }
            Err(e) => {
                progress.abandon();
                if e.is_cancelled() {
                    info!(done = progress.done(), "export cancelled");
                } else {
                    error!("export failed: {e}");
                }
                Err(e)
            }
        }
    }

    fn drive(
        &self,
        guard: &mut SinkGuard<'_>,
        progress: &mut ProgressReporter,
    ) -> MotionResult<ExportStats> {
        guard.sink.begin(SinkConfig {
            resolution: self.resolution,
            fps: self.fps,
            bg_rgba: [0, 0, 0, 255],
        })?;
        let stats = match self.options.strategy {
            Strategy::Single => single::run(self, &mut *guard.sink, progress)?,
            Strategy::Multi { workers } => multi::run(self, &mut *guard.sink, progress, workers)?,
        };
        guard.finish()?;
        Ok(stats)
    }

    /// Any failure observed after cancellation was requested is a consequence of it.
    fn cancellation_or(&self, e: MotionError) -> MotionError {
        if self.options.cancel.is_cancelled() && !e.is_cancelled() {
            debug!("treating '{e}' as cancellation");
            MotionError::Cancelled
        } else {
            e
        }
    }

    fn notify_done(&self, stats: &ExportStats) {
        let Some(notifier) = &self.options.notifier else {
            return;
        };
        let body = format!(
            "{} frames written to {}",
            stats.frames_written,
            self.output.display()
        );
        if let Err(e) = notifier.notify("Export finished", &body) {
            warn!("notifier failed: {e:#}");
        }
    }
}

/// Aborts the sink on drop unless it was finalized.
struct SinkGuard<'s> {
    sink: &'s mut dyn FrameSink,
    finished: bool,
}

impl<'s> SinkGuard<'s> {
    fn new(sink: &'s mut dyn FrameSink) -> Self {
        Self {
            sink,
            finished: false,
        }
    }

    fn finish(&mut self) -> MotionResult<()> {
        self.sink.end()?;
        self.finished = true;
        Ok(())
    }
}

impl Drop for SinkGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.sink.abort();
        }
    }
}

/// Export `scenes` to `output` with the system `ffmpeg`.
pub fn export<'a>(
    scenes: impl IntoIterator<Item = &'a Scene>,
    resolution: Resolution,
    fps: Fps,
    output: impl Into<PathBuf>,
    options: ExportOptions,
) -> MotionResult<ExportStats> {
    ExportJob::new(scenes, resolution, fps, output, options).run()
}

#[cfg(test)]
#[path = "../../tests/unit/export/job.rs"]
mod tests;
