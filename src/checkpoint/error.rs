//! Checkpoint error types.

use crate::machine::FsmError;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint was taken from a machine with another starting state
    #[error("Checkpoint starts in '{found}' but the machine starts in '{expected}'")]
    StartingStateMismatch { expected: String, found: String },

    #[error(transparent)]
    Machine(#[from] FsmError),
}
