/// Convenience result type used across motioncraft.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Invalid caller input, raised before any frame is rendered.
    #[error("validation error: {0}")]
    Validation(String),

    /// A drawable, modifier or raster source failed to produce a buffer.
    #[error("render error: {0}")]
    Render(String),

    /// Temp directory, disk or encoder I/O failure during export.
    #[error("export io error: {0}")]
    ExportIo(String),

    /// The export was interrupted by its cancel token.
    #[error("export cancelled")]
    Cancelled,

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MotionError::ExportIo`] value.
    pub fn export_io(msg: impl Into<String>) -> Self {
        Self::ExportIo(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for [`MotionError::Cancelled`].
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
