//! Error handling for StructKit
//!
//! Layout, projection and take-off are total functions and never fail. Errors
//! only arise at the edges: reading and writing saved designs and decoding
//! their JSON. All error types use `thiserror`.

use thiserror::Error;

/// Saved-design error type
///
/// Raised when exporting or importing a design snapshot.
#[derive(Error, Debug, Clone)]
pub enum DesignError {
    /// The design payload could not be decoded
    #[error("Invalid design data: {reason}")]
    InvalidData {
        /// Why decoding failed.
        reason: String,
    },

    /// The design was written by a newer, incompatible format
    #[error("Unsupported design format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the payload.
        found: String,
        /// Version this build understands.
        expected: String,
    },

    /// No design exists with the requested id
    #[error("Design not found: {id}")]
    NotFound {
        /// The missing design id.
        id: String,
    },
}

/// Main error type for StructKit
#[derive(Error, Debug)]
pub enum Error {
    /// Saved-design error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a saved-design error
    pub fn is_design_error(&self) -> bool {
        matches!(self, Error::Design(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
