//! Mindstack: a deterministic pushdown state machine
//!
//! The active configuration of a mindstack machine is a stack of states
//! rather than a single state, which gives "enter a sub-context and later
//! return" behaviour: menu stacks, dialogue trees, nested parser modes.
//!
//! # Core Concepts
//!
//! - **State**: Host-defined values implementing the `State` trait, compared by identity
//! - **Transition**: An edge `(from, token, to, mode)` where mode is Push, Pop, or Replace
//! - **Stack**: The active states, current state on top
//! - **Resolution**: Picks one transition per token, preferring non-pop
//!   edges and then the nearest ancestor pop
//!
//! # Example
//!
//! ```rust
//! use mindstack::builder::MachineBuilder;
//! use mindstack::core::Transition;
//! use mindstack::state_enum;
//!
//! state_enum! {
//!     enum Menu {
//!         Root,
//!         Options,
//!         Audio,
//!     }
//! }
//!
//! let mut machine = MachineBuilder::new().name("menus").build();
//! let root = machine.add_state(Menu::Root);
//! let options = machine.add_state(Menu::Options);
//! let audio = machine.add_state(Menu::Audio);
//!
//! machine.add_transition(Transition::push(root, "open", options)).unwrap();
//! machine.add_transition(Transition::push(options, "audio", audio)).unwrap();
//! machine.add_transition(Transition::pop(audio, "back", root)).unwrap();
//!
//! machine.start(root).unwrap();
//! machine.transition("open").unwrap();
//! machine.transition("audio").unwrap();
//! assert_eq!(machine.stack().top_down(), vec![audio, options, root]);
//!
//! machine.transition("back").unwrap();
//! assert_eq!(machine.stack().top_down(), vec![root]);
//! ```

pub mod audit;
pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use self::core::{MachineError, Mode, State, StateId, StateStack, Transition};
pub use engine::{Completed, ObserverId, PushdownMachine};
