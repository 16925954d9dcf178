//! Checkpoint error types.

use crate::rental::RentalStatus;
use thiserror::Error;

/// Wire format a checkpoint was being encoded to or decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Binary,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Could not encode checkpoint as {format}: {message}")]
    Encode { format: Format, message: String },

    #[error("Could not decode {format} checkpoint: {message}")]
    Decode { format: Format, message: String },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("History ends at '{history}' but snapshot is '{snapshot}'")]
    HistoryMismatch {
        history: RentalStatus,
        snapshot: RentalStatus,
    },
}
