use std::ops::Range;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};

use tracing::{debug, info, warn};

use crate::config::MissingFramePolicy;
use crate::encode::sink::FrameSink;
use crate::export::job::{ExportJob, ExportStats};
use crate::export::progress::ProgressReporter;
use crate::export::tempdir::TempDirGuard;
use crate::foundation::core::{FrameIndex, Resolution};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::frame::{FrameRGBA, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};
use crate::scene::Scene;

/// Split `0..n` into `min(workers, n)` contiguous chunks; the last chunk takes the remainder.
pub fn partition(n: usize, workers: usize) -> Vec<Range<usize>> {
    if n == 0 {
        return Vec::new();
    }
    let k = workers.clamp(1, n);
    let size = n / k;
    (0..k)
        .map(|i| {
            let start = i * size;
            let end = if i + 1 == k { n } else { start + size };
            start..end
        })
        .collect()
}

enum WorkerMsg {
    FrameDone,
    Finished {
        worker: usize,
        result: MotionResult<()>,
    },
}

/// Render each scene on worker threads into a temp directory, then feed the images to the sink.
pub(crate) fn run(
    job: &ExportJob<'_>,
    sink: &mut dyn FrameSink,
    progress: &mut ProgressReporter,
    workers: usize,
) -> MotionResult<ExportStats> {
    let cfg = &job.options.config;
    let mut stats = ExportStats {
        frames_total: progress.total(),
        scenes: job.scenes.len(),
        ..ExportStats::default()
    };
    let mut pos = 0u64;

    for (si, scene) in job.scenes.iter().enumerate() {
        let frames: Vec<i64> = scene.frames().collect();
        info!(scene = si, frames = frames.len(), workers, "scene started");
        if frames.is_empty() {
            continue;
        }

        let dir = TempDirGuard::create(&cfg.temp_root(), cfg.max_temp_dir_attempts)?;
        render_scene(job, scene, si, &frames, &dir, workers, progress)?;

        consume_scene(job, sink, &dir, frames.len() as u64, &mut pos, &mut stats)?;

        drop(dir);
        info!(scene = si, "scene finished");
    }
    Ok(stats)
}

/// Push the scene's images to the sink in order, applying the missing-frame policy.
fn consume_scene(
    job: &ExportJob<'_>,
    sink: &mut dyn FrameSink,
    dir: &TempDirGuard,
    count: u64,
    pos: &mut u64,
    stats: &mut ExportStats,
) -> MotionResult<()> {
    let policy = job.options.config.missing_frame_policy;
    for local in 0..count {
        job.options.cancel.check()?;
        let path = dir.frame_path(local);
        match read_frame(&path, job.resolution) {
            Ok(frame) => {
                sink.push_frame(FrameIndex(*pos), &frame)?;
                *pos += 1;
                stats.frames_written += 1;
            }
            Err(e) => match policy {
                MissingFramePolicy::Abort => {
                    return Err(MotionError::export_io(format!(
                        "frame image '{}' unusable: {e}",
                        path.display()
                    )));
                }
                MissingFramePolicy::Skip => {
                    warn!(pos = local, "skipping frame image: {e}");
                    stats.frames_skipped += 1;
                }
            },
        }
    }
    Ok(())
}

/// Render one scene's frames in parallel. Returns after every worker has been joined.
fn render_scene(
    job: &ExportJob<'_>,
    scene: &Scene,
    scene_index: usize,
    frames: &[i64],
    dir: &TempDirGuard,
    workers: usize,
    progress: &mut ProgressReporter,
) -> MotionResult<()> {
    let chunks = partition(frames.len(), workers);
    let cancel = &job.options.cancel;
    let poll = job.options.config.poll_interval();
    let stop = AtomicBool::new(false);
    let scene_frames = frames.len() as u64;

    std::thread::scope(|scope| -> MotionResult<()> {
        let (tx, rx) = mpsc::channel::<WorkerMsg>();
        let mut handles = Vec::with_capacity(chunks.len());

        for (worker, range) in chunks.iter().cloned().enumerate() {
            let tx = tx.clone();
            let stop = &stop;
            let chunk = &frames[range.clone()];
            handles.push(scope.spawn(move || {
                debug!(worker, start = range.start, end = range.end, "worker started");
                let result = render_chunk(job, scene, chunk, range.start, dir, stop, &tx);
                if result.is_err() {
                    stop.store(true, Ordering::SeqCst);
                }
                let _ = tx.send(WorkerMsg::Finished { worker, result });
            }));
        }
        drop(tx);

        let mut running = handles.len();
        let mut scene_done = 0u64;
        let mut first_err: Option<MotionError> = None;
        while running > 0 {
            match rx.recv_timeout(poll) {
                Ok(WorkerMsg::FrameDone) => {
                    scene_done += 1;
                    progress.frame_done(scene_index, scene_done, scene_frames);
                }
                Ok(WorkerMsg::Finished { worker, result }) => {
                    running -= 1;
                    debug!(worker, ok = result.is_ok(), "worker exited");
                    if let Err(e) = result
                        && first_err.is_none()
                    {
                        first_err = Some(e);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
            if cancel.is_cancelled() {
                stop.store(true, Ordering::SeqCst);
            }
        }

        for handle in handles {
            if handle.join().is_err() && first_err.is_none() {
                first_err = Some(MotionError::render("render worker panicked"));
            }
        }

        cancel.check()?;
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    })
}

fn render_chunk(
    job: &ExportJob<'_>,
    scene: &Scene,
    chunk: &[i64],
    first_pos: usize,
    dir: &TempDirGuard,
    stop: &AtomicBool,
    tx: &mpsc::Sender<WorkerMsg>,
) -> MotionResult<()> {
    for (i, &frame) in chunk.iter().enumerate() {
        job.options.cancel.check()?;
        if stop.load(Ordering::SeqCst) {
            return Ok(());
        }
        let buf = scene.render(job.resolution, frame)?;
        write_frame(&dir.frame_path((first_pos + i) as u64), &buf)?;
        let _ = tx.send(WorkerMsg::FrameDone);
    }
    Ok(())
}

fn write_frame(path: &Path, frame: &FrameRGBA) -> MotionResult<()> {
    let mut rgba = frame.data.clone();
    unpremultiply_rgba8_in_place(&mut rgba);
    image::save_buffer(
        path,
        &rgba,
        frame.width,
        frame.height,
        image::ExtendedColorType::Rgba8,
    )
    .map_err(|e| MotionError::export_io(format!("failed to write '{}': {e}", path.display())))
}

fn read_frame(path: &Path, expected: Resolution) -> MotionResult<FrameRGBA> {
    use anyhow::Context as _;
    let img = image::open(path)
        .with_context(|| format!("read '{}'", path.display()))?
        .to_rgba8();
    if img.dimensions() != (expected.width, expected.height) {
        return Err(MotionError::export_io(format!(
            "'{}' is {}x{}, expected {}x{}",
            path.display(),
            img.width(),
            img.height(),
            expected.width,
            expected.height
        )));
    }
    let mut data = img.into_raw();
    premultiply_rgba8_in_place(&mut data);
    FrameRGBA::from_premul_bytes(expected, data)
}

#[cfg(test)]
#[path = "../../tests/unit/export/multi.rs"]
mod tests;
