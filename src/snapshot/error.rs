//! Snapshot error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while exporting or restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot contents could not be turned back into a calculator
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(#[from] BuildError),
}
