//! Encoding sinks.
//!
//! Sinks consume rendered frames in output order; the export pipeline drives them.

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Conversion from engine buffers to the container pixel layout.
pub mod layout;
/// Generic frame sink trait and built-in sinks.
pub mod sink;

pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use sink::{FrameSink, InMemorySink, SinkConfig};
