//! The stack of active states.

use super::state::StateId;

/// Ordered active states, current state on top.
///
/// Traversal is top-first: [`StateStack::iter`] yields the current state
/// first and the oldest ancestor last. Only the engine mutates the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateStack {
    // bottom first, top last
    entries: Vec<StateId>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from entries listed bottom first.
    pub fn from_bottom_up(entries: Vec<StateId>) -> Self {
        Self { entries }
    }

    /// The current state, or `None` for an empty stack.
    pub fn current(&self) -> Option<StateId> {
        self.entries.last().copied()
    }

    /// Distance from the top to the nearest entry identical to `state`.
    ///
    /// Zero means `state` is already current.
    pub fn depth_of(&self, state: StateId) -> Option<usize> {
        self.iter().position(|s| s == state)
    }

    /// Entries top first.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.entries.iter().rev().copied()
    }

    /// Entries top first, collected.
    pub fn top_down(&self) -> Vec<StateId> {
        self.iter().collect()
    }

    /// Entries bottom first.
    pub fn bottom_up(&self) -> &[StateId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, state: StateId) {
        self.entries.push(state);
    }

    /// Remove the top `count` entries.
    pub(crate) fn truncate_top(&mut self, count: usize) {
        let keep = self.entries.len().saturating_sub(count);
        self.entries.truncate(keep);
    }

    /// Remove the current state if there is one, then push `state`.
    pub(crate) fn replace_top(&mut self, state: Option<StateId>) {
        self.entries.pop();
        if let Some(state) = state {
            self.entries.push(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<StateId> {
        raw.iter().copied().map(StateId::detached).collect()
    }

    #[test]
    fn empty_stack_has_no_current_state() {
        let stack = StateStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.current(), None);
    }

    #[test]
    fn iteration_is_top_first() {
        let stack = StateStack::from_bottom_up(ids(&[2, 1, 0]));

        assert_eq!(stack.current(), Some(StateId::detached(0)));
        assert_eq!(stack.top_down(), ids(&[0, 1, 2]));
        assert_eq!(stack.bottom_up(), ids(&[2, 1, 0]).as_slice());
    }

    #[test]
    fn depth_of_finds_nearest_occurrence() {
        let stack = StateStack::from_bottom_up(ids(&[1, 2, 1, 0]));

        assert_eq!(stack.depth_of(StateId::detached(0)), Some(0));
        assert_eq!(stack.depth_of(StateId::detached(1)), Some(1));
        assert_eq!(stack.depth_of(StateId::detached(2)), Some(2));
        assert_eq!(stack.depth_of(StateId::detached(7)), None);
    }

    #[test]
    fn truncate_top_discards_intermediates() {
        let mut stack = StateStack::from_bottom_up(ids(&[2, 1, 0]));
        stack.truncate_top(2);
        assert_eq!(stack.top_down(), ids(&[2]));

        stack.truncate_top(0);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn replace_top_on_empty_stack_grows() {
        let mut stack = StateStack::new();
        stack.replace_top(Some(StateId::detached(4)));
        assert_eq!(stack.top_down(), ids(&[4]));

        stack.replace_top(Some(StateId::detached(5)));
        assert_eq!(stack.top_down(), ids(&[5]));

        stack.replace_top(None);
        assert!(stack.is_empty());
    }
}
