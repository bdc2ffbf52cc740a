use tracing::{debug, info};

use crate::encode::sink::FrameSink;
use crate::export::job::{ExportJob, ExportStats};
use crate::export::progress::ProgressReporter;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::MotionResult;

/// Render every frame on the calling thread, straight into the sink.
pub(crate) fn run(
    job: &ExportJob<'_>,
    sink: &mut dyn FrameSink,
    progress: &mut ProgressReporter,
) -> MotionResult<ExportStats> {
    let mut stats = ExportStats {
        frames_total: progress.total(),
        scenes: job.scenes.len(),
        ..ExportStats::default()
    };
    let cancel = &job.options.cancel;
    let mut pos = 0u64;

    for (si, scene) in job.scenes.iter().enumerate() {
        let scene_frames = scene.frame_count() as u64;
        info!(scene = si, frames = scene_frames, "scene started");

        for (fi, frame) in scene.frames().enumerate() {
            cancel.check()?;
            let buf = scene.render(job.resolution, frame)?;
            sink.push_frame(FrameIndex(pos), &buf)?;
            debug!(scene = si, frame, pos, "frame encoded");
            pos += 1;
            stats.frames_written += 1;
            progress.frame_done(si, fi as u64 + 1, scene_frames);
        }

        info!(scene = si, "scene finished");
    }
    Ok(stats)
}
