//! Execution engine for pushdown machines.
//!
//! # Key Concepts
//!
//! - **Resolution**: pure selection of the transition to apply, ranked by
//!   pop-cost with insertion order breaking ties
//! - **Machine**: owns the registry, table, and stack, and is the only
//!   thing that mutates the stack
//! - **Observers**: callbacks notified synchronously after each
//!   successful transition
//!
//! # Reentrancy
//!
//! `enter()` hooks receive only `&mut S` and observers receive only shared
//! references, so neither can call back into the machine mid-transition.

mod machine;
mod observer;
pub mod resolution;

pub use machine::PushdownMachine;
pub use observer::{Completed, Observer, ObserverId, TransitionObservers};
pub use resolution::{Resolution, StackEffect, Unresolved};
