use thiserror::Error;

use crate::writer::WriteError;

/// Geometry could not be produced for the requested cardinality.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("cannot fit {count} items into {available:.2}in with {gap:.2}in gaps")]
    Degenerate { count: usize, available: f64, gap: f64 },
}

/// Failure inside a single slide builder, before dispatch adds its context.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlideError {
    #[error("{0}")]
    MalformedTable(String),

    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("parameter {index} ({name}): {reason}")]
    InvalidParam { index: usize, name: &'static str, reason: String },

    #[error("expected {expected} parameters, got {got}")]
    Arity { expected: String, got: usize },

    #[error("slide kind '{0}' is not available for this brand")]
    UnsupportedKind(&'static str),
}

/// Errors surfaced by presentation generation. Every per-instruction variant
/// names the offending method and its position in the request.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Unknown presentation type: {0}")]
    UnknownPresentationType(String),

    #[error("Unknown slide method '{method}' at index {index}")]
    UnknownSlideMethod { index: usize, method: String },

    #[error("Malformed table in '{method}' at index {index}: {detail}")]
    MalformedTable {
        index: usize,
        method: String,
        detail: String,
    },

    #[error("Failed to render '{method}' at index {index}: {cause}")]
    SlideRender {
        index: usize,
        method: String,
        cause: SlideError,
    },

    #[error("Invalid presentation config: {0}")]
    InvalidConfig(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] WriteError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl GenerationError {
    /// Attach instruction context to a builder failure.
    pub fn from_slide(index: usize, method: &str, err: SlideError) -> Self {
        match err {
            SlideError::MalformedTable(detail) => GenerationError::MalformedTable {
                index,
                method: method.to_string(),
                detail,
            },
            cause => GenerationError::SlideRender {
                index,
                method: method.to_string(),
                cause,
            },
        }
    }

    /// Stable machine-readable name for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::UnknownPresentationType(_) => "UnknownPresentationType",
            GenerationError::UnknownSlideMethod { .. } => "UnknownSlideMethod",
            GenerationError::MalformedTable { .. } => "MalformedTable",
            GenerationError::SlideRender { .. } => "SlideRenderError",
            GenerationError::InvalidConfig(_) => "InvalidConfig",
            GenerationError::Serialization(_) => "SerializationError",
            GenerationError::Storage(_) => "StorageError",
        }
    }

    /// Whether the caller caused the failure (as opposed to the server).
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            GenerationError::Serialization(_) | GenerationError::Storage(_)
        )
    }
}
