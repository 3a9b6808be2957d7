//! Checkpoint and resume of the active stack.
//!
//! A checkpoint records the current stack contents only. Transition history
//! is not kept, and states and transitions are not serialized. Entries are
//! stored as registry positions: the host re-registers states in the same
//! order before restoring, and each position is rebound to the restoring
//! machine's own [`StateId`].

use crate::core::{State, StateId, StateRegistry, StateStack};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StackCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// Name of the machine the checkpoint was taken from
    pub machine: String,

    /// When checkpoint was created
    pub taken_at: DateTime<Utc>,

    /// Registry positions of the stack entries, bottom first
    pub stack: Vec<usize>,
}

impl StackCheckpoint {
    pub fn capture(machine: &str, stack: &StateStack) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            machine: machine.to_string(),
            taken_at: Utc::now(),
            stack: stack.bottom_up().iter().map(|id| id.index()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check this checkpoint against a machine and rebuild its stack.
    ///
    /// Every unregistered position is reported, not just the first.
    pub fn validate<S: State>(
        &self,
        machine: &str,
        registry: &StateRegistry<S>,
    ) -> Result<StateStack, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if self.machine != machine {
            return Err(CheckpointError::MachineMismatch {
                found: self.machine.clone(),
                expected: machine.to_string(),
            });
        }

        let checks: Vec<Validation<StateId, NonEmptyVec<usize>>> = self
            .stack
            .iter()
            .map(|&index| match registry.id_at(index) {
                Some(id) => Validation::success(id),
                None => Validation::fail(index),
            })
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(ids) => Ok(StateStack::from_bottom_up(ids)),
            Validation::Failure(unknown) => {
                let ids: Vec<String> = unknown.iter().map(|index| format!("#{index}")).collect();
                Err(CheckpointError::ValidationFailed(format!(
                    "unregistered states: {}",
                    ids.join(", ")
                )))
            }
        }
    }
}
