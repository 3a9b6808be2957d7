//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for creating machines
//! and transitions with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Endpoint, MachineError, State, StateId, Transition};
use crate::engine::PushdownMachine;

/// Register a chain of Push transitions `a -> b -> c ...`, all fired by
/// `token`, and the matching Pop transitions back to the first state on
/// `back`.
///
/// Every id in `path` is checked before anything is registered, so on
/// error the machine's table is unchanged.
///
/// # Example
///
/// ```
/// use mindstack::builder::{drill_down, MachineBuilder};
/// use mindstack::state_enum;
///
/// state_enum! {
///     enum Screen {
///         Home,
///         List,
///         Detail,
///     }
/// }
///
/// let mut machine = MachineBuilder::new().name("screens").build();
/// let home = machine.add_state(Screen::Home);
/// let list = machine.add_state(Screen::List);
/// let detail = machine.add_state(Screen::Detail);
///
/// drill_down(&mut machine, &[home, list, detail], "open", "home").unwrap();
/// machine.start(home).unwrap();
/// machine.transition("open").unwrap();
/// machine.transition("open").unwrap();
/// assert_eq!(machine.stack().len(), 3);
///
/// machine.transition("home").unwrap();
/// assert_eq!(machine.stack().top_down(), vec![home]);
/// ```
pub fn drill_down<S: State>(
    machine: &mut PushdownMachine<S>,
    path: &[StateId],
    token: &str,
    back: &str,
) -> Result<(), MachineError> {
    let Some((&root, rest)) = path.split_first() else {
        return Ok(());
    };
    if rest.is_empty() {
        return Ok(());
    }

    let unknown = path
        .iter()
        .position(|&id| !machine.registry().contains(id));
    if let Some(position) = unknown {
        return Err(MachineError::InvalidReference {
            side: if position == 0 {
                Endpoint::From
            } else {
                Endpoint::To
            },
            state: path[position],
            token: token.to_string(),
        });
    }

    for pair in path.windows(2) {
        machine.add_transition(Transition::push(pair[0], token, pair[1]))?;
    }
    for &state in &path[1..] {
        machine.add_transition(Transition::pop(state, back, root))?;
    }
    Ok(())
}
