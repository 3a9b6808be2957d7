//! Transition table: an insertion-ordered multiset of edges.

use super::error::{Endpoint, MachineError};
use super::registry::StateRegistry;
use super::state::{State, StateId};
use super::transition::Transition;
use std::collections::BTreeSet;

/// All transitions registered with a machine.
///
/// Duplicate `(from, token)` edges are accepted; the engine's tie-break
/// decides between them. Insertion order is significant.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition after checking both endpoints are registered.
    ///
    /// The table is unchanged when this fails.
    pub fn add<S: State>(
        &mut self,
        transition: Transition,
        registry: &StateRegistry<S>,
    ) -> Result<(), MachineError> {
        for (side, endpoint) in [(Endpoint::To, transition.to), (Endpoint::From, transition.from)] {
            if let Some(state) = endpoint {
                if !registry.contains(state) {
                    return Err(MachineError::InvalidReference {
                        side,
                        state,
                        token: transition.token.clone(),
                    });
                }
            }
        }

        self.transitions.push(transition);
        Ok(())
    }

    /// Distinct tokens across all transitions, derived on every call.
    pub fn tokens(&self) -> BTreeSet<&str> {
        self.transitions.iter().map(|t| t.token.as_str()).collect()
    }

    pub fn has_token(&self, token: &str) -> bool {
        self.transitions.iter().any(|t| t.token == token)
    }

    /// Edges leaving `current` on `token`, in insertion order.
    pub fn candidates<'a>(
        &'a self,
        current: Option<StateId>,
        token: &'a str,
    ) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions
            .iter()
            .filter(move |t| t.matches(current, token))
    }

    /// The first literal table entry for `(current, token)`.
    ///
    /// This is the edge that is applied and reported, whichever candidate
    /// won the cost comparison.
    pub fn canonical(&self, current: Option<StateId>, token: &str) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.matches(current, token))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;

    #[derive(Debug)]
    struct Named(&'static str);

    impl State for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn registry() -> (StateRegistry<Named>, StateId, StateId) {
        let mut registry = StateRegistry::new();
        let a = registry.add(Named("A"));
        let b = registry.add(Named("B"));
        (registry, a, b)
    }

    #[test]
    fn add_accepts_registered_endpoints() {
        let (registry, a, b) = registry();
        let mut table = TransitionTable::new();

        table.add(Transition::push(a, "go", b), &registry).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn add_rejects_unregistered_to() {
        let (registry, a, _) = registry();
        let mut table = TransitionTable::new();

        let err = table
            .add(Transition::push(a, "go", StateId::detached(9)), &registry)
            .unwrap_err();

        assert!(matches!(
            err,
            MachineError::InvalidReference {
                side: Endpoint::To,
                ..
            }
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn add_rejects_unregistered_from() {
        let (registry, _, b) = registry();
        let mut table = TransitionTable::new();

        let err = table
            .add(Transition::push(StateId::detached(9), "go", b), &registry)
            .unwrap_err();

        assert!(matches!(
            err,
            MachineError::InvalidReference {
                side: Endpoint::From,
                ..
            }
        ));
        assert!(table.is_empty());
        assert!(table.tokens().is_empty());
    }

    #[test]
    fn unset_endpoints_skip_validation() {
        let (registry, a, _) = registry();
        let mut table = TransitionTable::new();

        table
            .add(Transition::new(None, "boot", Some(a), Mode::Push), &registry)
            .unwrap();
        table
            .add(Transition::new(Some(a), "quit", None, Mode::Replace), &registry)
            .unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let (registry, a, b) = registry();
        let mut table = TransitionTable::new();

        table.add(Transition::push(a, "go", b), &registry).unwrap();
        table.add(Transition::push(a, "go", b), &registry).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.candidates(Some(a), "go").count(), 2);
    }

    #[test]
    fn tokens_are_distinct_and_track_new_edges() {
        let (registry, a, b) = registry();
        let mut table = TransitionTable::new();

        table.add(Transition::push(a, "go", b), &registry).unwrap();
        table.add(Transition::pop(b, "go", a), &registry).unwrap();
        assert_eq!(table.tokens().into_iter().collect::<Vec<_>>(), vec!["go"]);

        table.add(Transition::replace(b, "swap", a), &registry).unwrap();
        assert_eq!(
            table.tokens().into_iter().collect::<Vec<_>>(),
            vec!["go", "swap"]
        );
        assert!(table.has_token("swap"));
        assert!(!table.has_token("stop"));
    }

    #[test]
    fn canonical_is_first_literal_match() {
        let (registry, a, b) = registry();
        let mut table = TransitionTable::new();

        table.add(Transition::pop(a, "go", b), &registry).unwrap();
        table.add(Transition::push(a, "go", b), &registry).unwrap();

        assert_eq!(table.canonical(Some(a), "go").unwrap().mode, Mode::Pop);
        assert!(table.canonical(Some(b), "go").is_none());
    }
}
