//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Mode, StateId, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// `from` and `to` are optional: leaving `from` unset makes an entry point
/// from the empty stack.
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    from: Option<StateId>,
    to: Option<StateId>,
    token: Option<String>,
    mode: Option<Mode>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state.
    pub fn from(mut self, state: StateId) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state.
    pub fn to(mut self, state: StateId) -> Self {
        self.to = Some(state);
        self
    }

    /// Set the token that fires the transition (required).
    pub fn on(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the stack mode (required).
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn push(self) -> Self {
        self.mode(Mode::Push)
    }

    pub fn pop(self) -> Self {
        self.mode(Mode::Pop)
    }

    pub fn replace(self) -> Self {
        self.mode(Mode::Replace)
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let token = self.token.ok_or(BuildError::MissingToken)?;
        let mode = self.mode.ok_or(BuildError::MissingMode)?;

        Ok(Transition::new(self.from, token, self.to, mode))
    }
}
