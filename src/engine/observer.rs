//! Transition-completed notifications.

use crate::core::{StateStack, Transition};
use std::fmt;

/// Notification delivered after a transition has been applied.
#[derive(Clone, Copy, Debug)]
pub struct Completed<'a> {
    /// The applied (canonical) transition.
    pub transition: &'a Transition,
    /// The stack after the transition.
    pub stack: &'a StateStack,
}

/// Handle returned by [`TransitionObservers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Type alias for observer callbacks.
pub type Observer = Box<dyn FnMut(&Completed<'_>) + Send>;

/// Set of independently registered observers.
///
/// Observers only ever see shared references, so a callback cannot call
/// back into the machine that is notifying it.
#[derive(Default)]
pub struct TransitionObservers {
    next_id: u64,
    observers: Vec<(ObserverId, Observer)>,
}

impl TransitionObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&Completed<'_>) + Send + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, event: &Completed<'_>) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for TransitionObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionObservers")
            .field("count", &self.observers.len())
            .finish()
    }
}
