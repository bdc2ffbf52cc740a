use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// One progress report, emitted after every completed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressUpdate {
    /// Zero-based scene index.
    pub scene: usize,
    pub scenes: usize,
    /// Frames of the current scene done so far.
    pub scene_done: u64,
    pub scene_frames: u64,
    pub done: u64,
    pub total: u64,
    pub eta_secs: Option<f64>,
}

/// Remaining time, extrapolated from the average time per completed frame.
pub fn eta_secs(elapsed: Duration, done: u64, total: u64) -> Option<f64> {
    if done == 0 {
        return None;
    }
    let per_frame = elapsed.as_secs_f64() / done as f64;
    Some(per_frame * total.saturating_sub(done) as f64)
}

/// Single-line terminal status plus `tracing` debug events.
pub struct ProgressReporter {
    bar: ProgressBar,
    started: Instant,
    scenes: usize,
    done: u64,
    total: u64,
}

impl ProgressReporter {
    pub fn new(total: u64, scenes: usize, visible: bool) -> Self {
        let bar = if visible {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };
        Self {
            bar,
            started: Instant::now(),
            scenes,
            done: 0,
            total,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn done(&self) -> u64 {
        self.done
    }

    pub fn frame_done(
        &mut self,
        scene: usize,
        scene_done: u64,
        scene_frames: u64,
    ) -> ProgressUpdate {
        self.done += 1;
        let update = ProgressUpdate {
            scene,
            scenes: self.scenes,
            scene_done,
            scene_frames,
            done: self.done,
            total: self.total,
            eta_secs: eta_secs(self.started.elapsed(), self.done, self.total),
        };
        self.bar.set_position(self.done);
        self.bar.set_message(format!(
            "scene {}/{} frame {}/{} eta {:.1}s",
            scene + 1,
            self.scenes,
            scene_done,
            scene_frames,
            update.eta_secs.unwrap_or(0.0)
        ));
        debug!(
            scene,
            scene_done,
            scene_frames,
            done = self.done,
            total = self.total,
            eta_secs = update.eta_secs,
            "export progress"
        );
        update
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }

    pub fn abandon(&self) {
        self.bar.abandon_with_message("stopped");
    }
}
