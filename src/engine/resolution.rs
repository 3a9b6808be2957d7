//! Transition resolution.
//!
//! Resolution is two-phase. First the candidates for `(current, token)` are
//! ranked by pop-cost to find one that can actually be applied to the stack.
//! Then the canonical edge, the first literal table entry for
//! `(current, token)`, is fetched and supplies the target for Push and
//! Replace and the transition that gets reported.
//!
//! Everything here is pure: the stack is only read. The machine applies the
//! returned [`StackEffect`] once resolution has succeeded, so a failed
//! resolution can never leave a half-mutated stack behind.

use crate::core::{Mode, StateId, StateStack, Transition, TransitionTable};

/// Pop-cost of a Pop transition whose target is not on the stack.
pub const UNREACHABLE: usize = usize::MAX;

/// Stack change decided by resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackEffect {
    /// Remove this many entries from the top.
    Truncate(usize),
    /// Push the target, if any.
    Push(Option<StateId>),
    /// Remove the top, if any, then push the target, if any.
    Replace(Option<StateId>),
}

impl StackEffect {
    /// Apply this effect to a stack.
    pub(crate) fn apply(self, stack: &mut StateStack) {
        match self {
            StackEffect::Truncate(count) => stack.truncate_top(count),
            StackEffect::Push(Some(state)) => stack.push(state),
            StackEffect::Push(None) => {}
            StackEffect::Replace(state) => stack.replace_top(state),
        }
    }
}

/// Outcome of a successful resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution<'a> {
    pub effect: StackEffect,
    /// The canonical edge; this is what observers are told about.
    pub transition: &'a Transition,
}

/// Why resolution failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unresolved {
    /// No registered transition uses the token at all.
    UnknownToken,
    /// Nothing leaves the current state on the token, or every candidate
    /// was a Pop whose target is not on the stack. `stale` counts the
    /// discarded Pop candidates.
    NoMatch { stale: usize },
}

/// Pop-cost of a transition against the current stack.
///
/// Non-Pop transitions cost nothing. A Pop costs the distance from the top
/// to its target, or [`UNREACHABLE`] when the target is not on the stack.
pub fn pop_cost(transition: &Transition, stack: &StateStack) -> usize {
    match transition.mode {
        Mode::Pop => transition
            .to
            .and_then(|to| stack.depth_of(to))
            .unwrap_or(UNREACHABLE),
        Mode::Push | Mode::Replace => 0,
    }
}

/// Index of the cheapest candidate; the earliest one wins ties.
pub fn select(candidates: &[&Transition], stack: &StateStack) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, t)| pop_cost(t, stack))
        .map(|(index, _)| index)
}

/// Resolve `token` against the current stack without mutating anything.
pub fn resolve<'a>(
    table: &'a TransitionTable,
    stack: &StateStack,
    token: &str,
) -> Result<Resolution<'a>, Unresolved> {
    if !table.has_token(token) {
        return Err(Unresolved::UnknownToken);
    }

    let current = stack.current();
    let mut possible: Vec<&Transition> = table.candidates(current, token).collect();
    let mut stale = 0;

    // Every pass either returns or removes one candidate.
    while let Some(index) = select(&possible, stack) {
        let chosen = possible[index];

        let depth = match chosen.mode {
            Mode::Pop => match chosen.to.and_then(|to| stack.depth_of(to)) {
                Some(depth) => Some(depth),
                None => {
                    tracing::trace!(
                        token,
                        target = ?chosen.to,
                        "discarding pop candidate, target not on stack"
                    );
                    possible.remove(index);
                    stale += 1;
                    continue;
                }
            },
            Mode::Push | Mode::Replace => None,
        };

        let transition = table
            .canonical(current, token)
            .ok_or(Unresolved::NoMatch { stale })?;

        let effect = match (chosen.mode, depth) {
            (Mode::Pop, Some(depth)) => StackEffect::Truncate(depth),
            (Mode::Replace, _) => StackEffect::Replace(transition.to),
            _ => StackEffect::Push(transition.to),
        };

        return Ok(Resolution { effect, transition });
    }

    Err(Unresolved::NoMatch { stale })
}
