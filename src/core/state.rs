//! Core State trait and state identity.
//!
//! States are owned by the machine's registry and referred to by
//! [`StateId`]. Two states are the same state only if they share an id,
//! regardless of whether their values compare equal.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for pushdown machine states.
///
/// The only behaviour the engine needs is [`State::enter`], which is called
/// whenever the state becomes the top of the stack through a transition.
///
/// # Example
///
/// ```rust
/// use mindstack::core::State;
///
/// #[derive(Debug)]
/// struct Dialogue {
///     line: &'static str,
///     visits: usize,
/// }
///
/// impl State for Dialogue {
///     fn name(&self) -> &str {
///         self.line
///     }
///
///     fn enter(&mut self) {
///         self.visits += 1;
///     }
/// }
///
/// let mut greeting = Dialogue { line: "hello", visits: 0 };
/// greeting.enter();
/// assert_eq!(greeting.visits, 1);
/// ```
pub trait State: Debug {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Activation hook, invoked when the state becomes current.
    ///
    /// Default implementation does nothing.
    fn enter(&mut self) {}

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Identity of a registered state.
///
/// Ids are handed out by a registry in registration order and are never
/// reused, since states cannot be unregistered. Each id also carries the
/// tag of the registry that issued it, so an id from one machine is never
/// valid in another even when the positions line up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId {
    pub(crate) registry: u64,
    pub(crate) index: usize,
}

impl StateId {
    /// Position of the state in its registry.
    pub fn index(self) -> usize {
        self.index
    }

    /// An id owned by no registry.
    #[cfg(test)]
    pub(crate) fn detached(index: usize) -> Self {
        Self { registry: 0, index }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}
