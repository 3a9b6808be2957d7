//! Menu Stack
//!
//! This example drives a game-style menu stack.
//!
//! Key concepts:
//! - Push to open a sub-menu, Pop to unwind to an ancestor
//! - Replace to swap the current screen
//! - Observers notified after each transition
//! - Checkpoint and restore of the active stack
//!
//! Run with: RUST_LOG=debug cargo run --example menu_stack

use mindstack::builder::MachineBuilder;
use mindstack::core::{State, Transition};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Screen {
    title: &'static str,
}

impl State for Screen {
    fn name(&self) -> &str {
        self.title
    }

    fn enter(&mut self) {
        println!("  [enter] {}", self.title);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Menu Stack Example ===\n");

    let mut machine = MachineBuilder::new().name("menus").build();
    let title = machine.add_state(Screen { title: "Title" });
    let options = machine.add_state(Screen { title: "Options" });
    let video = machine.add_state(Screen { title: "Video" });
    let audio = machine.add_state(Screen { title: "Audio" });

    machine.add_transition(Transition::push(title, "options", options))?;
    machine.add_transition(Transition::push(options, "video", video))?;
    machine.add_transition(Transition::replace(video, "next", audio))?;
    machine.add_transition(Transition::pop(audio, "back", options))?;
    machine.add_transition(Transition::pop(audio, "home", title))?;
    machine.add_transition(Transition::pop(options, "home", title))?;

    machine.subscribe(|event| {
        println!(
            "  [done]  {} ({}) depth={}",
            event.transition.token,
            event.transition.mode,
            event.stack.len()
        );
    });

    machine.start(title)?;

    for token in ["options", "video", "next"] {
        println!("fire '{token}'");
        machine.transition(token)?;
    }

    let checkpoint = machine.checkpoint();
    println!("\ncheckpoint {} holds {} states\n", checkpoint.id, checkpoint.stack.len());

    for token in ["home", "home"] {
        println!("fire '{token}'");
        if let Err(e) = machine.transition(token) {
            println!("  [error] {e}");
        }
    }

    machine.restore(&checkpoint)?;
    let names: Vec<String> = machine
        .stack()
        .iter()
        .map(|id| machine.registry().name_of(id))
        .collect();
    println!("\nrestored stack (top first): {}", names.join(" > "));

    println!("\n=== Example Complete ===");
    Ok(())
}
