//! Checkpoint and resume for running machines.
//!
//! A checkpoint captures where a machine is, never how it is wired: the
//! transition table, guards and actions are code and must be rebuilt by
//! the host before a checkpoint is restored into it.

use crate::core::{Key, StateHistory};
use crate::machine::{FsmError, Machine, ResetPolicy};
use chrono::{DateTime, Utc};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's runtime position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint<S, T> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub starting_state: S,

    pub current_state: S,

    /// Retained transition history
    pub history: StateHistory<S, T>,
}

impl<S, T> Checkpoint<S, T>
where
    S: Serialize + DeserializeOwned,
    T: Serialize + DeserializeOwned,
{
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<S: Key, T: Key> Machine<S, T> {
    /// Snapshot the current state and history.
    ///
    /// Like [`Machine::current_state`], this observes the machine and so
    /// closes the configuration phase.
    pub fn checkpoint(&self) -> Checkpoint<S, T> {
        let current_state = self.current_state().clone();
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            starting_state: self.starting.clone(),
            current_state,
            history: self.history.clone(),
        }
    }

    /// Move the machine to the position recorded in `checkpoint`.
    ///
    /// The checkpoint must use the current format and come from a machine
    /// with the same starting state. Under [`ResetPolicy::Strict`] its
    /// current state must be one a run of this machine can reach: the
    /// starting state or the source or destination of a configured edge.
    /// No hooks run and the configuration phase is left as it is. History records beyond this machine's limit are
    /// dropped oldest first.
    pub fn restore(&mut self, checkpoint: Checkpoint<S, T>) -> Result<(), CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if checkpoint.starting_state != self.starting {
            return Err(CheckpointError::StartingStateMismatch {
                expected: self.starting.label(),
                found: checkpoint.starting_state.label(),
            });
        }
        self.check_resumable(&checkpoint.current_state)?;

        let mut history = StateHistory::with_limit(self.config.history_limit);
        for record in checkpoint.history.into_records() {
            history.record(record);
        }

        debug!(
            "restored checkpoint {} at {}",
            checkpoint.id,
            checkpoint.current_state.label()
        );
        self.current = checkpoint.current_state;
        self.history = history;
        Ok(())
    }

    fn check_resumable(&self, state: &S) -> Result<(), FsmError> {
        let reachable = *state == self.starting || self.table.mentions(state);
        match self.config.reset_policy {
            ResetPolicy::Strict if !reachable => Err(FsmError::UnknownState {
                state: state.label(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::MachineConfig;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Order {
        Placed,
        Paid,
        Shipped,
        Lost,
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Event {
        Pay,
        Ship,
        Refund,
    }

    fn orders(config: MachineConfig) -> Machine<Order, Event> {
        let mut machine = Machine::with_config(Order::Placed, config);
        machine
            .tr(Order::Placed, Event::Pay, Order::Paid)
            .unwrap()
            .tr(Order::Paid, Event::Ship, Order::Shipped)
            .unwrap()
            .tr(Order::Paid, Event::Refund, Order::Placed)
            .unwrap();
        machine
    }

    #[test]
    fn checkpoint_captures_position_and_locks() {
        let mut machine = orders(MachineConfig::default());
        machine.fire(Event::Pay).unwrap();

        let checkpoint = machine.checkpoint();
        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.starting_state, Order::Placed);
        assert_eq!(checkpoint.current_state, Order::Paid);
        assert_eq!(checkpoint.history.len(), 1);

        let fresh = orders(MachineConfig::default());
        let _ = fresh.checkpoint();
        assert!(!fresh.is_configuring());
    }

    #[test]
    fn json_checkpoint_resumes_in_fresh_machine() {
        let mut machine = orders(MachineConfig::default());
        machine.fire(Event::Pay).unwrap();
        let json = machine.checkpoint().to_json().unwrap();

        let mut resumed = orders(MachineConfig::default());
        resumed.restore(Checkpoint::from_json(&json).unwrap()).unwrap();

        assert_eq!(resumed.current_state(), &Order::Paid);
        assert_eq!(resumed.history().len(), 1);
        resumed.fire(Event::Ship).unwrap();
        assert_eq!(resumed.current_state(), &Order::Shipped);
    }

    #[test]
    fn binary_checkpoint_roundtrip() {
        let mut machine = orders(MachineConfig::default());
        machine.fire(Event::Pay).unwrap();
        machine.fire(Event::Refund).unwrap();
        let checkpoint = machine.checkpoint();

        let decoded: Checkpoint<Order, Event> =
            Checkpoint::from_bytes(&checkpoint.to_bytes().unwrap()).unwrap();

        assert_eq!(decoded.id, checkpoint.id);
        assert_eq!(decoded.current_state, Order::Placed);
        assert_eq!(
            decoded.history.get_path(),
            vec![&Order::Placed, &Order::Paid, &Order::Placed]
        );
    }

    #[test]
    fn restore_rejects_other_versions() {
        let mut machine = orders(MachineConfig::default());
        let mut checkpoint = machine.checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        assert!(matches!(
            machine.restore(checkpoint),
            Err(CheckpointError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn restore_rejects_other_starting_state() {
        let mut machine = orders(MachineConfig::default());
        let mut checkpoint = machine.checkpoint();
        checkpoint.starting_state = Order::Paid;

        assert!(matches!(
            machine.restore(checkpoint),
            Err(CheckpointError::StartingStateMismatch { .. })
        ));
    }

    #[test]
    fn restore_applies_reset_policy() {
        let mut strict = orders(MachineConfig::default());
        let mut checkpoint = strict.checkpoint();
        checkpoint.current_state = Order::Lost;

        match strict.restore(checkpoint.clone()) {
            Err(CheckpointError::Machine(FsmError::UnknownState { state })) => {
                assert_eq!(state, "Lost")
            }
            other => panic!("expected UnknownState, got {:?}", other),
        }
        assert_eq!(strict.current_state(), &Order::Placed);

        let mut lenient = orders(MachineConfig::default().reset_policy(ResetPolicy::Lenient));
        lenient.restore(checkpoint).unwrap();
        assert_eq!(lenient.current_state(), &Order::Lost);
    }

    #[test]
    fn checkpoint_at_terminal_state_resumes() {
        let mut machine = orders(MachineConfig::default());
        machine.fire(Event::Pay).unwrap();
        machine.fire(Event::Ship).unwrap();
        let json = machine.checkpoint().to_json().unwrap();

        let mut resumed = orders(MachineConfig::default());
        resumed.restore(Checkpoint::from_json(&json).unwrap()).unwrap();
        assert_eq!(resumed.current_state(), &Order::Shipped);
        assert_eq!(resumed.history().len(), 2);

        machine.restore(Checkpoint::from_json(&json).unwrap()).unwrap();
        assert_eq!(machine.current_state(), &Order::Shipped);

        assert!(matches!(
            resumed.reset_to(Order::Shipped),
            Err(FsmError::UnknownState { .. })
        ));
    }

    #[test]
    fn restore_trims_history_to_local_limit() {
        let mut machine = orders(MachineConfig::default().history_limit(None));
        for _ in 0..3 {
            machine.fire(Event::Pay).unwrap();
            machine.fire(Event::Refund).unwrap();
        }
        let checkpoint = machine.checkpoint();
        assert_eq!(checkpoint.history.len(), 6);

        let mut small = orders(MachineConfig::default().history_limit(Some(2)));
        small.restore(checkpoint).unwrap();
        assert_eq!(small.history().len(), 2);
        assert_eq!(small.history().limit(), Some(2));
    }

    #[test]
    fn corrupt_input_is_reported() {
        assert!(matches!(
            Checkpoint::<Order, Event>::from_json("{not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::<Order, Event>::from_bytes(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }
}
