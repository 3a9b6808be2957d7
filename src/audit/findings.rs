//! Audit findings.

use crate::core::StateId;
use std::fmt;
use thiserror::Error;

/// Something about a transition table worth a host's attention.
///
/// None of these are errors to the engine: ambiguous edges are resolved by
/// the pop-cost tie-break and dead edges are simply never applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditFinding {
    #[error("{count} transitions leave {from} on '{token}'")]
    AmbiguousEdge {
        from: Origin,
        token: String,
        count: usize,
    },

    #[error("pop transition from {from} on '{token}' has no target and can never apply")]
    PopWithoutTarget { from: Origin, token: String },

    #[error("state {state} is not used by any transition")]
    UnusedState { state: StateId },
}

/// Source of an edge: a registered state or the empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Origin(pub Option<StateId>);

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(state) => write!(f, "{state}"),
            None => f.write_str("<empty>"),
        }
    }
}
