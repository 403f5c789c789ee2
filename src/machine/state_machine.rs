//! The machine value: construction, fluent configuration and state queries.

use crate::core::{Action, Guard, Key, StateHistory};
use crate::machine::config::MachineConfig;
use crate::machine::error::FsmError;
use crate::table::{TransitionEntry, TransitionTable};
use log::{debug, trace};
use std::cell::Cell;

/// Whether the transition table may still be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Configuring,
    Running,
}

/// A finite-state machine driven by a transition table.
///
/// A machine starts in its configuration phase, during which edges, guards
/// and actions are registered through the chainable `tr`/`guard`/`on`
/// methods. The phase ends for good the first time the machine is fired or
/// its current state is read; from then on every configuration call fails
/// with [`FsmError::ConfigurationLocked`].
///
/// # Example
///
/// ```rust
/// use turnkey::machine::{FsmError, Machine};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door { Opened, Closed }
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Trigger { Open, Close }
///
/// # fn main() -> Result<(), FsmError> {
/// let mut door = Machine::new(Door::Closed);
/// door.tr(Door::Closed, Trigger::Open, Door::Opened)?
///     .tr(Door::Opened, Trigger::Close, Door::Closed)?;
///
/// door.fire(Trigger::Open)?;
/// assert!(door.is_in_state(&Door::Opened));
///
/// // Reading the state closed the configuration phase.
/// assert_eq!(
///     door.tr(Door::Opened, Trigger::Open, Door::Opened).err(),
///     Some(FsmError::ConfigurationLocked)
/// );
/// # Ok(())
/// # }
/// ```
pub struct Machine<S: Key, T: Key> {
    pub(crate) table: TransitionTable<S, T>,
    pub(crate) current: S,
    pub(crate) starting: S,
    pub(crate) phase: Cell<Phase>,
    pub(crate) cursor: Option<usize>,
    pub(crate) on_any: Option<Action<S, T>>,
    pub(crate) config: MachineConfig,
    pub(crate) history: StateHistory<S, T>,
}

impl<S: Key, T: Key> Machine<S, T> {
    /// Create a machine in `starting` with the default configuration.
    pub fn new(starting: S) -> Self {
        Self::with_config(starting, MachineConfig::default())
    }

    /// Create a machine in `starting` with an explicit configuration.
    pub fn with_config(starting: S, config: MachineConfig) -> Self {
        Self {
            table: TransitionTable::new(),
            current: starting.clone(),
            starting,
            phase: Cell::new(Phase::Configuring),
            cursor: None,
            on_any: None,
            history: StateHistory::with_limit(config.history_limit),
            config,
        }
    }

    /// Register the edge `from --trigger--> to` and make it the target of
    /// subsequent `guard`/`on` calls.
    pub fn tr(&mut self, from: S, trigger: T, to: S) -> Result<&mut Self, FsmError> {
        self.ensure_configuring()?;
        trace!(
            "configuring {} --{}--> {}",
            from.label(),
            trigger.label(),
            to.label()
        );
        let position = self.table.insert(from, trigger, to)?;
        self.cursor = Some(position);
        Ok(self)
    }

    /// Attach a guard that ignores the transition arguments to the last
    /// configured edge.
    pub fn guard<F>(&mut self, predicate: F) -> Result<&mut Self, FsmError>
    where
        F: Fn() -> bool + Send + 'static,
    {
        self.cursor_entry()?.set_guard(Guard::from_fn(predicate))?;
        Ok(self)
    }

    /// Attach a guard over `(from, trigger, to)` to the last configured edge.
    pub fn guard_with<F>(&mut self, predicate: F) -> Result<&mut Self, FsmError>
    where
        F: Fn(&S, &T, &S) -> bool + Send + 'static,
    {
        self.cursor_entry()?.set_guard(Guard::new(predicate))?;
        Ok(self)
    }

    /// Attach an action that ignores the transition arguments to the last
    /// configured edge.
    pub fn on<F>(&mut self, action: F) -> Result<&mut Self, FsmError>
    where
        F: FnMut() + Send + 'static,
    {
        self.cursor_entry()?.set_action(Action::from_fn(action))?;
        Ok(self)
    }

    /// Attach an action over `(from, trigger, to)` to the last configured edge.
    pub fn on_with<F>(&mut self, action: F) -> Result<&mut Self, FsmError>
    where
        F: FnMut(&S, &T, &S) + Send + 'static,
    {
        self.cursor_entry()?.set_action(Action::new(action))?;
        Ok(self)
    }

    /// Replace the hook run after every committed transition.
    pub fn on_any<F>(&mut self, action: F) -> Result<&mut Self, FsmError>
    where
        F: FnMut() + Send + 'static,
    {
        self.set_on_any(Action::from_fn(action))
    }

    /// Replace the hook run after every committed transition with one over
    /// `(from, trigger, to)`.
    pub fn on_any_with<F>(&mut self, action: F) -> Result<&mut Self, FsmError>
    where
        F: FnMut(&S, &T, &S) + Send + 'static,
    {
        self.set_on_any(Action::new(action))
    }

    /// Current state.
    ///
    /// This is not a pure read: it permanently closes the configuration
    /// phase, exactly like [`Machine::fire`].
    pub fn current_state(&self) -> &S {
        self.lock();
        &self.current
    }

    /// Whether the machine is in `candidate`. Closes the configuration phase.
    pub fn is_in_state(&self, candidate: &S) -> bool {
        self.current_state() == candidate
    }

    /// The state the machine was constructed with.
    pub fn starting_state(&self) -> &S {
        &self.starting
    }

    /// True until the first fire or state read.
    pub fn is_configuring(&self) -> bool {
        self.phase.get() == Phase::Configuring
    }

    /// Committed transitions, oldest first. Does not close configuration.
    pub fn history(&self) -> &StateHistory<S, T> {
        &self.history
    }

    /// Configuration fixed at construction.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Read-only view of the configured edges.
    pub fn table(&self) -> &TransitionTable<S, T> {
        &self.table
    }

    /// States with at least one outgoing edge, in configuration order.
    pub fn states(&self) -> Vec<&S> {
        self.table.states()
    }

    /// Triggers configured from `state`, in configuration order.
    pub fn triggers_from(&self, state: &S) -> Vec<&T> {
        self.table.triggers_from(state)
    }

    /// Number of configured edges.
    pub fn edge_count(&self) -> usize {
        self.table.len()
    }

    pub(crate) fn lock(&self) {
        if self.phase.replace(Phase::Running) == Phase::Configuring {
            debug!(
                "configuration closed with {} edge(s), starting in {}",
                self.table.len(),
                self.starting.label()
            );
        }
    }

    fn ensure_configuring(&self) -> Result<(), FsmError> {
        match self.phase.get() {
            Phase::Configuring => Ok(()),
            Phase::Running => Err(FsmError::ConfigurationLocked),
        }
    }

    fn cursor_entry(&mut self) -> Result<&mut TransitionEntry<S, T>, FsmError> {
        self.ensure_configuring()?;
        let position = self.cursor.ok_or(FsmError::NoTransitionConfigured)?;
        Ok(self.table.entry_mut(position))
    }

    fn set_on_any(&mut self, action: Action<S, T>) -> Result<&mut Self, FsmError> {
        self.ensure_configuring()?;
        if self.on_any.replace(action).is_some() {
            trace!("replacing on_any hook");
        }
        Ok(self)
    }
}

impl<S: Key, T: Key> std::fmt::Debug for Machine<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("starting", &self.starting)
            .field("phase", &self.phase.get())
            .field("edges", &self.table.len())
            .field("config", &self.config)
            .finish()
    }
}
