//! Error types for outline extraction.
//!
//! Library code returns [`OutlineError`]; the CLI layer wraps it in
//! `anyhow` with added context.

/// Result type alias for outline operations.
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Errors that can occur while rendering, extracting or exporting an outline.
#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    /// The renderer could not produce markup from the input.
    #[error("render failed: {0}")]
    Render(String),

    /// A heading level outside 1..=6 was requested.
    #[error("invalid heading level: {0} (expected 1..=6)")]
    InvalidLevel(u8),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
