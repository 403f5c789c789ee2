//! Transition history tracking.
//!
//! The machine appends one record per committed transition. Guard
//! rejections, failed fires and resets are never recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use turnkey::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "idle",
///     trigger: "start",
///     to: "running",
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "running");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord<S, T> {
    /// The state being transitioned from
    pub from: S,
    /// The trigger that was fired
    pub trigger: T,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded history of committed transitions.
///
/// When a limit is set and reached, the oldest record is dropped to make
/// room for the new one.
///
/// # Example
///
/// ```rust
/// use turnkey::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(Some(2));
/// for (from, to) in [(1, 2), (2, 3), (3, 4)] {
///     history.record(TransitionRecord { from, trigger: 'n', to, timestamp: Utc::now() });
/// }
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path(), vec![&2, &3, &4]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, T> {
    records: VecDeque<TransitionRecord<S, T>>,
    limit: Option<usize>,
}

impl<S, T> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> StateHistory<S, T> {
    /// Create an unbounded, empty history.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create an empty history that keeps at most `limit` records.
    ///
    /// `Some(0)` turns recording off entirely.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            records: VecDeque::new(),
            limit,
        }
    }

    /// Append a record, evicting the oldest one if the limit is reached.
    pub fn record(&mut self, record: TransitionRecord<S, T>) {
        match self.limit {
            Some(0) => return,
            Some(limit) => {
                while self.records.len() >= limit {
                    self.records.pop_front();
                }
            }
            None => {}
        }
        self.records.push_back(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` of the oldest retained record followed by the
    /// `to` of every record, in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Time between the oldest and newest retained record.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.front(), self.records.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Iterate over retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord<S, T>> {
        self.records.iter()
    }

    /// Most recent record, if any.
    pub fn last(&self) -> Option<&TransitionRecord<S, T>> {
        self.records.back()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of retained records; `None` means unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub(crate) fn into_records(self) -> impl Iterator<Item = TransitionRecord<S, T>> {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn record(from: TestState, to: TestState) -> TransitionRecord<TestState, &'static str> {
        TransitionRecord {
            from,
            trigger: "next",
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState, &str> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(record(TestState::Initial, TestState::Processing));
        history.record(record(TestState::Processing, TestState::Complete));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
    }

    #[test]
    fn limit_evicts_oldest_first() {
        let mut history = StateHistory::with_limit(Some(2));
        history.record(record(TestState::Initial, TestState::Processing));
        history.record(record(TestState::Processing, TestState::Complete));
        history.record(record(TestState::Complete, TestState::Initial));

        assert_eq!(history.len(), 2);
        let froms: Vec<_> = history.records().map(|r| r.from.clone()).collect();
        assert_eq!(froms, vec![TestState::Processing, TestState::Complete]);
    }

    #[test]
    fn zero_limit_disables_recording() {
        let mut history = StateHistory::with_limit(Some(0));
        history.record(record(TestState::Initial, TestState::Processing));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let mut history = StateHistory::new();
        history.record(TransitionRecord {
            from: TestState::Initial,
            trigger: "next",
            to: TestState::Processing,
            timestamp: start,
        });
        history.record(TransitionRecord {
            from: TestState::Processing,
            trigger: "next",
            to: TestState::Complete,
            timestamp: start + chrono::Duration::milliseconds(25),
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_limit(Some(8));
        history.record(record(TestState::Initial, TestState::Processing));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.limit(), Some(8));
        assert_eq!(deserialized.last().unwrap().trigger, "next");
    }
}
