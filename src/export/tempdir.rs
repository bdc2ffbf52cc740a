use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::Fnv1a64;

/// Private directory for intermediate frame images, removed (with contents) on drop.
#[derive(Debug)]
pub struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    /// Create a fresh directory under `root`, retrying name collisions up to `max_attempts` times.
    pub fn create(root: &Path, max_attempts: u32) -> MotionResult<Self> {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let pid = std::process::id();
        Self::create_named(root, max_attempts, |attempt| {
            candidate_name(nanos, pid, attempt)
        })
    }

    pub(crate) fn create_named(
        root: &Path,
        max_attempts: u32,
        mut name: impl FnMut(u32) -> String,
    ) -> MotionResult<Self> {
        std::fs::create_dir_all(root).map_err(|e| {
            MotionError::export_io(format!(
                "failed to create temp root '{}': {e}",
                root.display()
            ))
        })?;

        for attempt in 0..max_attempts {
            let path = root.join(name(attempt));
            match std::fs::create_dir(&path) {
                Ok(()) => {
                    debug!(dir = %path.display(), attempt, "created export temp dir");
                    return Ok(Self { path });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(MotionError::export_io(format!(
                        "failed to create temp dir '{}': {e}",
                        path.display()
                    )));
                }
            }
        }
        Err(MotionError::export_io(format!(
            "no free temp dir name under '{}' after {max_attempts} attempts",
            root.display()
        )))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Image path for output position `pos` within the directory.
    pub fn frame_path(&self, pos: u64) -> PathBuf {
        self.path.join(format!("{pos:08}.png"))
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => debug!(dir = %self.path.display(), "removed export temp dir"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("failed to remove temp dir '{}': {e}", self.path.display()),
        }
    }
}

fn candidate_name(nanos: u128, pid: u32, attempt: u32) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_u128(nanos);
    h.write_u32(pid);
    h.write_u32(attempt);
    format!("motioncraft-{:016x}", h.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/export/tempdir.rs"]
mod tests;
