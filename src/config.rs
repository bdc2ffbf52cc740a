//! Engine-wide tunables, passed explicitly to scenes and exports.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{MotionError, MotionResult};

/// Temporal supersampling parameters used by scenes with motion blur enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionBlurConfig {
    /// Samples on each side of the rendered frame (`K`); `2K + 1` renders per frame.
    pub samples: u32,
    /// Frame distance between neighbouring samples (`s`).
    pub step: i64,
}

impl Default for MotionBlurConfig {
    fn default() -> Self {
        Self {
            samples: 6,
            step: 1,
        }
    }
}

/// What the multi-worker export does when a rendered frame image cannot be read back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFramePolicy {
    /// Fail the export with an I/O error.
    #[default]
    Abort,
    /// Log a warning and continue without the frame.
    Skip,
}

/// Explicit engine configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub motion_blur: MotionBlurConfig,
    /// Named colors resolvable through [`EngineConfig::color`].
    pub color_palette: BTreeMap<String, Rgba8>,
    /// Font family handed to text raster sources when a text element names none.
    pub default_font: String,
    /// How often the export coordinator wakes up to check cancellation and progress.
    pub poll_interval_ms: u64,
    pub missing_frame_policy: MissingFramePolicy,
    /// Parent directory for export temp directories (`None` = OS temp dir).
    pub temp_root: Option<PathBuf>,
    pub max_temp_dir_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            motion_blur: MotionBlurConfig::default(),
            color_palette: BTreeMap::new(),
            default_font: "ubuntu".to_string(),
            poll_interval_ms: 50,
            missing_frame_policy: MissingFramePolicy::Abort,
            temp_root: None,
            max_temp_dir_attempts: 16,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| MotionError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        use anyhow::Context as _;
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read engine config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_string(&self) -> MotionResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MotionError::serde(e.to_string()))
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.motion_blur.step < 1 {
            return Err(MotionError::validation("motion_blur.step must be >= 1"));
        }
        if self.poll_interval_ms == 0 {
            return Err(MotionError::validation("poll_interval_ms must be > 0"));
        }
        if self.max_temp_dir_attempts == 0 {
            return Err(MotionError::validation(
                "max_temp_dir_attempts must be >= 1",
            ));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn temp_root(&self) -> PathBuf {
        self.temp_root.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Resolve a color argument: a palette name, or 3/4 channel values.
    ///
    /// Three channels are promoted to opaque RGBA.
    pub fn color(&self, spec: ColorSpec<'_>) -> MotionResult<Rgba8> {
        match spec {
            ColorSpec::Named(name) => self
                .color_palette
                .get(name)
                .copied()
                .ok_or_else(|| MotionError::validation(format!("unknown palette color '{name}'"))),
            ColorSpec::Channels(ch) => rgba_from_channels(ch),
        }
    }
}

/// Color argument accepted by [`EngineConfig::color`].
#[derive(Clone, Copy, Debug)]
pub enum ColorSpec<'a> {
    Named(&'a str),
    Channels(&'a [u8]),
}

/// Promote a 3- or 4-channel color to RGBA.
pub fn rgba_from_channels(ch: &[u8]) -> MotionResult<Rgba8> {
    match *ch {
        [r, g, b] => Ok([r, g, b, 255]),
        [r, g, b, a] => Ok([r, g, b, a]),
        _ => Err(MotionError::validation(format!(
            "color must have 3 or 4 channels, got {}",
            ch.len()
        ))),
    }
}
