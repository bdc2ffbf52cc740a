use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::animation::property::Property;
use crate::animation::vector::{ColorProperty, Vec2Property};
use crate::config::EngineConfig;
use crate::foundation::core::{Resolution, Rgba8};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::composite::place_scaled;
use crate::render::frame::{FrameRGBA, premultiply_rgba8_in_place};

/// Decoded straight-alpha RGBA8 raster.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgba8: Vec<u8>,
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl RasterImage {
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> MotionResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if rgba8.len() != expected {
            return Err(MotionError::validation(format!(
                "raster of {width}x{height} needs {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8,
        })
    }

    /// Decode an image file (any format the `image` crate reads).
    pub fn open(path: impl AsRef<Path>) -> MotionResult<Self> {
        use anyhow::Context as _;
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("decode image '{}'", path.display()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            rgba8: img.into_raw(),
        })
    }

    /// Premultiplied copy, or `None` for an empty raster.
    fn to_frame(&self) -> MotionResult<Option<FrameRGBA>> {
        let Ok(res) = Resolution::new(self.width, self.height) else {
            return Ok(None);
        };
        let mut data = self.rgba8.clone();
        premultiply_rgba8_in_place(&mut data);
        FrameRGBA::from_premul_bytes(res, data).map(Some)
    }
}

/// What a [`RasterSource`] is asked to produce.
#[derive(Clone, Debug, PartialEq)]
pub enum RasterRequest<'a> {
    Text {
        text: &'a str,
        font: &'a str,
        size: i64,
        color: Rgba8,
    },
    /// Zero-based frame of the source video.
    VideoFrame { frame: i64 },
}

/// External rasterizer for content the engine does not draw itself (text, decoded video).
///
/// `Ok(None)` means there is nothing to draw for this request.
pub trait RasterSource: Send + Sync {
    fn rasterize(&self, request: &RasterRequest<'_>) -> MotionResult<Option<RasterImage>>;
}

/// Shared handle to a raster source.
pub type SharedRasterSource = Arc<dyn RasterSource>;

/// Single line of text centered on `loc`.
#[derive(Clone)]
pub struct Text {
    pub loc: Vec2Property,
    pub text: Property<String>,
    pub font: Property<String>,
    pub size: Property<i64>,
    pub color: ColorProperty,
    source: SharedRasterSource,
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("loc", &self.loc)
            .field("text", &self.text)
            .field("font", &self.font)
            .field("size", &self.size)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Text {
    /// Text in the configured default font at size 36.
    pub fn new(
        source: SharedRasterSource,
        text: impl Into<String>,
        loc: [i64; 2],
        color: Rgba8,
        config: &EngineConfig,
    ) -> Self {
        Self {
            loc: Vec2Property::new(loc),
            text: Property::new(text.into()),
            font: Property::new(config.default_font.clone()),
            size: Property::new(36),
            color: ColorProperty::from_rgba8(color),
            source,
        }
    }

    pub(crate) fn render(&self, res: Resolution, frame: i64) -> MotionResult<FrameRGBA> {
        let text = self.text.evaluate(frame);
        let font = self.font.evaluate(frame);
        let request = RasterRequest::Text {
            text: &text,
            font: &font,
            size: self.size.evaluate(frame),
            color: self.color.evaluate_rgba8(frame),
        };
        let Some(raster) = self.source.rasterize(&request)? else {
            return Ok(FrameRGBA::transparent(res));
        };
        let Some(img) = raster.to_frame()? else {
            return Ok(FrameRGBA::transparent(res));
        };
        let [cx, cy] = self.loc.evaluate(frame);
        let (w, h) = (i64::from(img.width), i64::from(img.height));
        place_scaled(&img, res, cx - w / 2, cy - h / 2, w, h)
    }
}

/// Still image scaled into `loc`/`size`.
#[derive(Clone, Debug)]
pub struct Image {
    pub loc: Vec2Property,
    pub size: Vec2Property,
    raster: Arc<RasterImage>,
}

impl Image {
    pub fn new(raster: impl Into<Arc<RasterImage>>, loc: [i64; 2], size: [i64; 2]) -> Self {
        Self {
            loc: Vec2Property::new(loc),
            size: Vec2Property::new(size),
            raster: raster.into(),
        }
    }

    pub fn open(path: impl AsRef<Path>, loc: [i64; 2], size: [i64; 2]) -> MotionResult<Self> {
        Ok(Self::new(RasterImage::open(path)?, loc, size))
    }

    pub(crate) fn render(&self, res: Resolution, frame: i64) -> MotionResult<FrameRGBA> {
        let Some(img) = self.raster.to_frame()? else {
            return Ok(FrameRGBA::transparent(res));
        };
        let [x, y] = self.loc.evaluate(frame);
        let [w, h] = self.size.evaluate(frame);
        place_scaled(&img, res, x, y, w, h)
    }
}

/// Video whose frames come from a [`RasterSource`].
///
/// Scene frame `f` shows source frame `floor(f * speed - offset)`; negative source frames are
/// blank.
#[derive(Clone)]
pub struct Video {
    pub loc: Vec2Property,
    pub size: Vec2Property,
    pub speed: f64,
    pub offset: f64,
    source: SharedRasterSource,
}

impl fmt::Debug for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Video")
            .field("loc", &self.loc)
            .field("size", &self.size)
            .field("speed", &self.speed)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl Video {
    pub fn new(source: SharedRasterSource, loc: [i64; 2], size: [i64; 2]) -> Self {
        Self {
            loc: Vec2Property::new(loc),
            size: Vec2Property::new(size),
            speed: 1.0,
            offset: 0.0,
            source,
        }
    }

    pub fn with_timing(mut self, speed: f64, offset: f64) -> MotionResult<Self> {
        if !speed.is_finite() || !offset.is_finite() {
            return Err(MotionError::validation("video speed/offset must be finite"));
        }
        self.speed = speed;
        self.offset = offset;
        Ok(self)
    }

    pub fn source_frame(&self, frame: i64) -> i64 {
        ((frame as f64) * self.speed - self.offset).floor() as i64
    }

    pub(crate) fn render(&self, res: Resolution, frame: i64) -> MotionResult<FrameRGBA> {
        let source_frame = self.source_frame(frame);
        if source_frame < 0 {
            return Ok(FrameRGBA::transparent(res));
        }
        let raster = self.source.rasterize(&RasterRequest::VideoFrame {
            frame: source_frame,
        })?;
        let Some(img) = raster.map(|r| r.to_frame()).transpose()?.flatten() else {
            return Ok(FrameRGBA::transparent(res));
        };
        let [x, y] = self.loc.evaluate(frame);
        let [w, h] = self.size.evaluate(frame);
        place_scaled(&img, res, x, y, w, h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/drawable/media.rs"]
mod tests;
