//! Errors raised while configuring or driving a pushdown machine.

use super::state::StateId;
use std::fmt;
use thiserror::Error;

/// Which end of a transition an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    From,
    To,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::From => f.write_str("from"),
            Endpoint::To => f.write_str("to"),
        }
    }
}

/// Errors from the pushdown machine.
///
/// None of these leave the machine partially mutated: a failing call
/// returns with the registry, table and stack exactly as they were.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("transition '{token}' references unregistered {side} state {state}")]
    InvalidReference {
        side: Endpoint,
        state: StateId,
        token: String,
    },

    #[error("unknown token '{token}'")]
    UnknownToken { token: String },

    #[error("no transition for token '{token}' from state '{state}'")]
    NoMatchingTransition { state: String, token: String },

    #[error("machine already started in state '{state}'")]
    AlreadyStarted { state: String },
}

impl MachineError {
    /// Returns a stable error code for this error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            MachineError::InvalidReference { .. } => "INVALID_REFERENCE",
            MachineError::UnknownToken { .. } => "UNKNOWN_TOKEN",
            MachineError::NoMatchingTransition { .. } => "NO_MATCHING_TRANSITION",
            MachineError::AlreadyStarted { .. } => "ALREADY_STARTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_reference_names_the_side() {
        let err = MachineError::InvalidReference {
            side: Endpoint::To,
            state: StateId::detached(4),
            token: "open".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "transition 'open' references unregistered to state #4"
        );
        assert_eq!(err.error_code(), "INVALID_REFERENCE");
    }

    #[test]
    fn no_matching_transition_message() {
        let err = MachineError::NoMatchingTransition {
            state: "<empty>".to_string(),
            token: "back".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no transition for token 'back' from state '<empty>'"
        );
        assert_eq!(err.error_code(), "NO_MATCHING_TRANSITION");
    }
}
