//! Error types for the edges of the editor store.
//!
//! The store's mutation operations never fail; errors only arise when
//! loading configuration or parsing element kinds from strings.

use thiserror::Error;

/// Errors that can occur while loading or validating editor configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// History must keep at least one state
    #[error("Invalid history limit: {0} (must be at least 1)")]
    InvalidHistoryLimit(usize),

    /// Canvas must have a non-zero area
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },
}

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An element kind string other than `"text"` or `"sticker"`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown element kind: {0:?}")]
pub struct ParseElementKindError(pub String);
