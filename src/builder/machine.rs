//! Builder for constructing pushdown machines.

use crate::config::MachineConfig;
use crate::core::State;
use crate::engine::PushdownMachine;
use std::marker::PhantomData;

/// Builder for configuring a machine with a fluent API.
///
/// States and transitions are added to the built machine, since
/// transitions refer to the ids the machine hands out.
pub struct MachineBuilder<S: State> {
    config: MachineConfig,
    _phantom: PhantomData<S>,
}

impl<S: State> MachineBuilder<S> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: MachineConfig::default(),
            _phantom: PhantomData,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Name used in log events and checkpoints.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Whether `start()` calls the initial state's `enter()` hook.
    pub fn enter_on_start(mut self, enter: bool) -> Self {
        self.config.enter_on_start = enter;
        self
    }

    pub fn build(self) -> PushdownMachine<S> {
        PushdownMachine::with_config(self.config)
    }
}

impl<S: State> Default for MachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestState {
        Idle,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            "Idle"
        }
    }

    #[test]
    fn builder_applies_settings() {
        let machine = MachineBuilder::<TestState>::new()
            .name("dialogue")
            .enter_on_start(false)
            .build();

        assert_eq!(machine.config().name, "dialogue");
        assert!(!machine.config().enter_on_start);
        assert!(machine.stack().is_empty());
    }

    #[test]
    fn config_replaces_defaults() {
        let machine = MachineBuilder::<TestState>::new()
            .config(MachineConfig::named("parser"))
            .build();

        assert_eq!(machine.config(), &MachineConfig::named("parser"));
    }

    #[test]
    fn built_machine_accepts_states() {
        let mut machine = MachineBuilder::new().build();
        let idle = machine.add_state(TestState::Idle);

        machine.start(idle).unwrap();
        assert_eq!(machine.current_state(), Some(idle));
    }
}
