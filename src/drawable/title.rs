use crate::animation::interp::Interp;
use crate::config::EngineConfig;
use crate::drawable::group::Group;
use crate::drawable::media::{SharedRasterSource, Text};
use crate::foundation::core::Rgba8;
use crate::foundation::error::MotionResult;

/// Slide-in margin outside the title box, in pixels.
const OFFSCREEN: i64 = 100;
/// Half the distance each line drifts while it holds near the center.
const DRIFT: i64 = 75;

/// Two-line title: the first line slides in from the left and the second from the right,
/// they drift past each other through the middle third, then leave on the opposite side.
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalTitle {
    pub frame_start: i64,
    pub frame_len: i64,
    /// Top-left corner of the title box.
    pub loc: [i64; 2],
    pub size: [i64; 2],
    pub lines: [String; 2],
    pub font_sizes: [i64; 2],
    /// `None` uses the configured default font.
    pub font: Option<String>,
    pub color: Rgba8,
}

impl Default for HorizontalTitle {
    fn default() -> Self {
        Self {
            frame_start: 0,
            frame_len: 120,
            loc: [0, 0],
            size: [1920, 1080],
            lines: ["Text 1".to_string(), "Text 2".to_string()],
            font_sizes: [36, 36],
            font: None,
            color: [255, 255, 255, 255],
        }
    }
}

impl HorizontalTitle {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            lines: [line1.into(), line2.into()],
            ..Self::default()
        }
    }

    /// Build the animated [`Group`]; both lines are rasterized by `source`.
    pub fn build(
        &self,
        source: &SharedRasterSource,
        config: &EngineConfig,
    ) -> MotionResult<Group> {
        let [x0, y0] = self.loc;
        let [w, h] = self.size;
        let (start, len) = (self.frame_start, self.frame_len);
        let keys = [start, start + len / 3, start + len * 2 / 3, start + len];
        let xs = [-OFFSCREEN, w / 2 - DRIFT, w / 2 + DRIFT, w + OFFSCREEN];

        let mut group = Group::new();
        for (i, line) in self.lines.iter().enumerate() {
            let mut text = Text::new(source.clone(), line.as_str(), [x0, y0], self.color, config);
            text.size.keyframe(self.font_sizes[i], start);
            if let Some(font) = &self.font {
                text.font.keyframe(font.clone(), start);
            }
            let y = if i == 0 { h / 3 } else { h * 2 / 3 };
            for (k, &frame) in keys.iter().enumerate() {
                // Second line mirrors the first.
                let x = if i == 0 { xs[k] } else { xs[xs.len() - 1 - k] };
                text.loc.keyframe_with([x0 + x, y0 + y], frame, Interp::Linear)?;
            }
            group.push(text);
        }
        Ok(group)
    }
}
