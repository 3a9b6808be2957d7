//! Transition edges and their stack-mutation modes.

use super::state::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a transition mutates the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Push the target on top of the current state.
    Push,
    /// Unwind the stack down to the nearest occurrence of the target.
    Pop,
    /// Swap the current state for the target.
    Replace,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Push => f.write_str("push"),
            Mode::Pop => f.write_str("pop"),
            Mode::Replace => f.write_str("replace"),
        }
    }
}

/// An immutable edge `(from, token, to, mode)`.
///
/// An unset `from` is a state-less entry point: it matches only while the
/// stack is empty. An unset `to` means nothing is pushed, so a `Replace`
/// with no target acts as an exit from the current state.
///
/// # Example
///
/// ```rust
/// use mindstack::core::{Mode, StateRegistry, Transition, State};
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
/// let mut registry = StateRegistry::new();
/// let root = registry.add(Screen("root"));
/// let menu = registry.add(Screen("menu"));
///
/// let open = Transition::push(root, "open", menu);
/// assert_eq!(open.mode, Mode::Push);
/// assert!(open.matches(Some(root), "open"));
/// assert!(!open.matches(Some(menu), "open"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: Option<StateId>,
    pub to: Option<StateId>,
    pub token: String,
    pub mode: Mode,
}

impl Transition {
    pub fn new(
        from: Option<StateId>,
        token: impl Into<String>,
        to: Option<StateId>,
        mode: Mode,
    ) -> Self {
        Self {
            from,
            to,
            token: token.into(),
            mode,
        }
    }

    pub fn push(from: StateId, token: impl Into<String>, to: StateId) -> Self {
        Self::new(Some(from), token, Some(to), Mode::Push)
    }

    pub fn pop(from: StateId, token: impl Into<String>, to: StateId) -> Self {
        Self::new(Some(from), token, Some(to), Mode::Pop)
    }

    pub fn replace(from: StateId, token: impl Into<String>, to: StateId) -> Self {
        Self::new(Some(from), token, Some(to), Mode::Replace)
    }

    /// Whether this edge leaves `current` on `token` (pure).
    pub fn matches(&self, current: Option<StateId>, token: &str) -> bool {
        self.from == current && self.token == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_requires_both_state_and_token() {
        let t = Transition::push(StateId::detached(0), "open", StateId::detached(1));

        assert!(t.matches(Some(StateId::detached(0)), "open"));
        assert!(!t.matches(Some(StateId::detached(1)), "open"));
        assert!(!t.matches(Some(StateId::detached(0)), "close"));
        assert!(!t.matches(None, "open"));
    }

    #[test]
    fn entry_point_matches_empty_stack_only() {
        let t = Transition::new(None, "boot", Some(StateId::detached(0)), Mode::Push);

        assert!(t.matches(None, "boot"));
        assert!(!t.matches(Some(StateId::detached(0)), "boot"));
    }

    #[test]
    fn constructors_set_mode() {
        assert_eq!(Transition::push(StateId::detached(0), "a", StateId::detached(1)).mode, Mode::Push);
        assert_eq!(Transition::pop(StateId::detached(0), "a", StateId::detached(1)).mode, Mode::Pop);
        assert_eq!(
            Transition::replace(StateId::detached(0), "a", StateId::detached(1)).mode,
            Mode::Replace
        );
    }

    #[test]
    fn mode_display() {
        assert_eq!(Mode::Push.to_string(), "push");
        assert_eq!(Mode::Pop.to_string(), "pop");
        assert_eq!(Mode::Replace.to_string(), "replace");
    }
}
