//! motioncraft is a programmatic 2D animation engine.
//!
//! Build a [`Scene`] from keyframed drawables, then export one or more scenes to MP4:
//!
//! - Animate values with [`Property`] keyframes and easing ([`Interp`])
//! - Compose shapes, media and [`Group`]s, each with optional [`Modifier`]s
//! - Render frames to premultiplied RGBA8 ([`FrameRGBA`]), optionally motion-blurred
//! - Stream frames into a [`FrameSink`] with [`export`] or an [`ExportJob`], on one thread or many
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod drawable;
pub mod encode;
pub mod export;
pub mod foundation;
pub mod render;
pub mod scene;

pub use crate::animation::interp::Interp;
pub use crate::animation::property::{Keyframe, Property};
pub use crate::animation::vector::{ColorProperty, Vec2Property, VectorProperty};
pub use crate::config::{EngineConfig, MissingFramePolicy, MotionBlurConfig};
pub use crate::drawable::{
    Arrow, BarGraph, Circle, CircularArc, Drawable, DrawableKind, Ellipse, Group, HorizontalTitle,
    Image, Line, Modifier, ModifierKind, Outline, Placement, Polygon, RasterImage, RasterRequest,
    RasterSource, Rect, SharedRasterSource, Text, Video,
};
pub use crate::encode::{FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, SinkConfig};
pub use crate::export::{
    CancelToken, ExportJob, ExportOptions, ExportStats, Notifier, Strategy, export,
};
pub use crate::foundation::core::{Fps, FrameIndex, Resolution, Rgba8};
pub use crate::foundation::error::{MotionError, MotionResult};
pub use crate::render::FrameRGBA;
pub use crate::scene::{Pause, Scene};
