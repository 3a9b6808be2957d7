//! Pushdown machine that owns the registry, table, and active stack.

use crate::audit::{AuditResult, TableAudit};
use crate::checkpoint::{CheckpointError, StackCheckpoint};
use crate::config::MachineConfig;
use crate::core::{
    Endpoint, MachineError, State, StateId, StateRegistry, StateStack, Transition, TransitionTable,
};
use crate::engine::observer::{Completed, ObserverId, TransitionObservers};
use crate::engine::resolution::{self, Unresolved};
use std::collections::BTreeSet;

const EMPTY_STACK: &str = "<empty>";

/// Deterministic pushdown state machine.
///
/// States are registered first, then transitions between them, then
/// [`PushdownMachine::transition`] is called repeatedly. A call either
/// applies exactly one transition or fails with the stack untouched.
///
/// # Example
///
/// ```rust
/// use mindstack::engine::PushdownMachine;
/// use mindstack::core::{State, Transition};
///
/// #[derive(Debug)]
/// struct Screen(&'static str);
///
/// impl State for Screen {
///     fn name(&self) -> &str {
///         self.0
///     }
/// }
///
/// let mut machine = PushdownMachine::new();
/// let root = machine.add_state(Screen("root"));
/// let menu = machine.add_state(Screen("menu"));
/// machine.add_transition(Transition::push(root, "open", menu)).unwrap();
/// machine.add_transition(Transition::pop(menu, "close", root)).unwrap();
///
/// machine.start(root).unwrap();
/// machine.transition("open").unwrap();
/// assert_eq!(machine.current_state(), Some(menu));
///
/// machine.transition("close").unwrap();
/// assert_eq!(machine.stack().top_down(), vec![root]);
/// ```
#[derive(Debug)]
pub struct PushdownMachine<S: State> {
    config: MachineConfig,
    registry: StateRegistry<S>,
    table: TransitionTable,
    stack: StateStack,
    observers: TransitionObservers,
}

impl<S: State> Default for PushdownMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> PushdownMachine<S> {
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            config,
            registry: StateRegistry::new(),
            table: TransitionTable::new(),
            stack: StateStack::new(),
            observers: TransitionObservers::new(),
        }
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Register a state. Equal values registered twice are distinct states.
    pub fn add_state(&mut self, state: S) -> StateId {
        self.registry.add(state)
    }

    /// Register a transition whose endpoints are already registered.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), MachineError> {
        let token = transition.token.clone();
        self.table
            .add(transition, &self.registry)
            .inspect_err(|e| {
                tracing::debug!(
                    machine = %self.config.name,
                    token = %token,
                    error = %e,
                    "transition rejected"
                );
            })
    }

    /// Distinct tokens across all registered transitions.
    pub fn tokens(&self) -> BTreeSet<&str> {
        self.table.tokens()
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.table
    }

    pub fn registry(&self) -> &StateRegistry<S> {
        &self.registry
    }

    pub fn state(&self, id: StateId) -> Option<&S> {
        self.registry.get(id)
    }

    pub fn state_mut(&mut self, id: StateId) -> Option<&mut S> {
        self.registry.get_mut(id)
    }

    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    /// Id of the current state, or `None` when the stack is empty.
    pub fn current_state(&self) -> Option<StateId> {
        self.stack.current()
    }

    /// The current state itself.
    pub fn current(&self) -> Option<&S> {
        self.stack.current().and_then(|id| self.registry.get(id))
    }

    /// Check if the current state is final (pure). An empty stack is not.
    pub fn is_final(&self) -> bool {
        self.current().is_some_and(|s| s.is_final())
    }

    /// Seed an empty stack with `state`.
    ///
    /// This is not a transition: observers are not notified. The state's
    /// `enter()` hook runs when `enter_on_start` is configured.
    pub fn start(&mut self, state: StateId) -> Result<(), MachineError> {
        if let Some(current) = self.stack.current() {
            return Err(MachineError::AlreadyStarted {
                state: self.registry.name_of(current),
            });
        }

        let target = self
            .registry
            .get_mut(state)
            .ok_or(MachineError::InvalidReference {
                side: Endpoint::To,
                state,
                token: String::new(),
            })?;
        if self.config.enter_on_start {
            target.enter();
        }

        self.stack.push(state);
        tracing::debug!(
            machine = %self.config.name,
            state = %self.registry.name_of(state),
            "machine started"
        );
        Ok(())
    }

    /// Fire `token` and apply exactly one matching transition.
    ///
    /// Returns the applied transition, which is the first table entry for
    /// the current state and token. On error the stack is unchanged and no
    /// hook or observer runs.
    pub fn transition(&mut self, token: &str) -> Result<Transition, MachineError> {
        let resolved = resolution::resolve(&self.table, &self.stack, token);
        let resolved = match resolved {
            Ok(resolved) => resolved,
            Err(unresolved) => {
                let error = self.unresolved_error(unresolved, token);
                tracing::debug!(
                    machine = %self.config.name,
                    token,
                    error = %error,
                    "transition failed"
                );
                return Err(error);
            }
        };

        let applied = resolved.transition.clone();
        let effect = resolved.effect;
        effect.apply(&mut self.stack);

        if let Some(top) = self.stack.current() {
            if let Some(state) = self.registry.get_mut(top) {
                state.enter();
            }
        }

        tracing::debug!(
            machine = %self.config.name,
            token,
            mode = %applied.mode,
            ?effect,
            depth = self.stack.len(),
            "transition applied"
        );

        self.observers.notify(&Completed {
            transition: &applied,
            stack: &self.stack,
        });

        Ok(applied)
    }

    fn unresolved_error(&self, unresolved: Unresolved, token: &str) -> MachineError {
        match unresolved {
            Unresolved::UnknownToken => MachineError::UnknownToken {
                token: token.to_string(),
            },
            Unresolved::NoMatch { stale } => {
                if stale > 0 {
                    tracing::trace!(token, stale, "all pop candidates were stale");
                }
                MachineError::NoMatchingTransition {
                    state: self
                        .stack
                        .current()
                        .map(|id| self.registry.name_of(id))
                        .unwrap_or_else(|| EMPTY_STACK.to_string()),
                    token: token.to_string(),
                }
            }
        }
    }

    /// Subscribe to transition-completed notifications.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&Completed<'_>) + Send + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Snapshot the current stack.
    pub fn checkpoint(&self) -> StackCheckpoint {
        StackCheckpoint::capture(&self.config.name, &self.stack)
    }

    /// Replace the stack with a checkpoint's contents.
    ///
    /// No `enter()` hooks or observers run. On error the stack is unchanged.
    pub fn restore(&mut self, checkpoint: &StackCheckpoint) -> Result<(), CheckpointError> {
        let stack = checkpoint
            .validate(&self.config.name, &self.registry)
            .inspect_err(|e| {
                tracing::debug!(
                    machine = %self.config.name,
                    checkpoint = %checkpoint.id,
                    error = %e,
                    "restore rejected"
                );
            })?;

        self.stack = stack;
        tracing::info!(
            machine = %self.config.name,
            checkpoint = %checkpoint.id,
            depth = self.stack.len(),
            "stack restored from checkpoint"
        );
        Ok(())
    }

    /// Audit the transition table with every check enabled.
    pub fn audit(&self) -> AuditResult {
        TableAudit::default().run(&self.table, &self.registry)
    }
}
