//! Core pushdown machine data model.
//!
//! This module contains the passive pieces of the machine:
//! - State identity and the `State` trait
//! - The state registry and transition table
//! - The stack of active states
//!
//! Nothing here decides which transition fires; that is the engine's job.

mod error;
mod registry;
mod stack;
mod state;
mod table;
mod transition;

pub use error::{Endpoint, MachineError};
pub use registry::StateRegistry;
pub use stack::StateStack;
pub use state::{State, StateId};
pub use table::TransitionTable;
pub use transition::{Mode, Transition};
