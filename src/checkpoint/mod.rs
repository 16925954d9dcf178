//! Versioned checkpoints of a rental snapshot and its history.
//!
//! Hosts cache or ship snapshots between processes. A checkpoint bundles
//! the snapshot with the transitions applied to it and can be encoded as
//! JSON or compact binary.

use crate::core::StateHistory;
use crate::rental::{RentalSnapshot, RentalStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, Format};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a rental.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub captured_at: DateTime<Utc>,

    pub snapshot: RentalSnapshot,

    /// Transitions applied since the rental was created or last checkpointed
    pub history: StateHistory<RentalStatus>,
}

impl SnapshotCheckpoint {
    pub fn new(
        snapshot: RentalSnapshot,
        history: StateHistory<RentalStatus>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            captured_at,
            snapshot,
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Encode {
            format: Format::Json,
            message: e.to_string(),
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(raw).map_err(|e| CheckpointError::Decode {
            format: Format::Json,
            message: e.to_string(),
        })?;
        checkpoint.validate()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode {
            format: Format::Binary,
            message: e.to_string(),
        })
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(raw).map_err(|e| CheckpointError::Decode {
            format: Format::Binary,
            message: e.to_string(),
        })?;
        checkpoint.validate()
    }

    fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if let Some(&history) = self.history.current() {
            if history != self.snapshot.status {
                return Err(CheckpointError::HistoryMismatch {
                    history,
                    snapshot: self.snapshot.status,
                });
            }
        }

        Ok(self)
    }
}
