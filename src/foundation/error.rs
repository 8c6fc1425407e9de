/// Crate-wide result alias.
pub type TextcardResult<T> = Result<T, TextcardError>;

/// Errors produced by the rendering pipeline.
///
/// Every failure is scoped to a single render call; nothing here is fatal to
/// the surrounding process. Rendering is deterministic, so a failing input
/// fails identically until it changes.
#[derive(thiserror::Error, Debug)]
pub enum TextcardError {
    /// The caller-supplied configuration was rejected before rendering began.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Compositing failed mid-render.
    #[error("render error: {0}")]
    Render(String),

    /// The composited surface could not be serialized.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Wrapped error from an underlying library.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextcardError {
    /// Construct an [`InvalidInput`](TextcardError::InvalidInput) error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Construct a [`Render`](TextcardError::Render) error.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Construct an [`Encoding`](TextcardError::Encoding) error.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
