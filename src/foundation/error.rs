/// Crate-wide result type.
pub type ArclightResult<T> = Result<T, ArclightError>;

#[derive(thiserror::Error, Debug)]
/// Errors surfaced at the edges of the filter core (parsing, config, raster IO).
///
/// The interactive paths (range mapping, compositing, URL rewriting, gestures)
/// never return these; they clamp or report an outcome instead.
pub enum ArclightError {
    /// Input failed validation (unknown filter id, bad config value, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// A gesture event could not be interpreted.
    #[error("gesture error: {0}")]
    Gesture(String),

    /// Reference rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ArclightError {
    /// Build a [`ArclightError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ArclightError::Gesture`].
    pub fn gesture(msg: impl Into<String>) -> Self {
        Self::Gesture(msg.into())
    }

    /// Build a [`ArclightError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ArclightError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
