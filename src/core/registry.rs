//! Flat registry of the states a machine may use.

use super::state::{State, StateId};
use std::sync::atomic::{AtomicU64, Ordering};

// Tag 0 is never issued.
static REGISTRY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Registered states, addressed by [`StateId`].
///
/// Registration never de-duplicates: adding an equal value twice yields two
/// distinct states. There is no removal.
#[derive(Debug)]
pub struct StateRegistry<S: State> {
    tag: u64,
    states: Vec<S>,
}

impl<S: State> Default for StateRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateRegistry<S> {
    pub fn new() -> Self {
        Self {
            tag: REGISTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
            states: Vec::new(),
        }
    }

    fn id(&self, index: usize) -> StateId {
        StateId {
            registry: self.tag,
            index,
        }
    }

    /// Register a state and return its identity.
    pub fn add(&mut self, state: S) -> StateId {
        let id = self.id(self.states.len());
        self.states.push(state);
        id
    }

    /// Whether `id` was issued by this registry.
    pub fn contains(&self, id: StateId) -> bool {
        id.registry == self.tag && id.index < self.states.len()
    }

    pub fn get(&self, id: StateId) -> Option<&S> {
        if id.registry != self.tag {
            return None;
        }
        self.states.get(id.index)
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut S> {
        if id.registry != self.tag {
            return None;
        }
        self.states.get_mut(id.index)
    }

    /// The id registered at `index`, if any.
    pub fn id_at(&self, index: usize) -> Option<StateId> {
        (index < self.states.len()).then(|| self.id(index))
    }

    /// Ids of all registered states, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.states.len()).map(|index| self.id(index))
    }

    /// Display name for an id, falling back to the id itself.
    pub fn name_of(&self, id: StateId) -> String {
        self.get(id)
            .map(|s| s.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
