//! Driving scenes through a [`FrameSink`](crate::encode::FrameSink), on one thread or many.

pub mod cancel;
pub mod job;
pub mod multi;
pub mod progress;
mod single;
pub mod tempdir;

pub use cancel::CancelToken;
pub use job::{
    ExportJob, ExportOptions, ExportStats, Notifier, OUTPUT_EXTENSION, Strategy, export,
};
pub use multi::partition;
pub use progress::{ProgressReporter, ProgressUpdate};
pub use tempdir::TempDirGuard;
