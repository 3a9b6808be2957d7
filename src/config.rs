//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Default machine name used in logs and checkpoints.
pub const DEFAULT_MACHINE_NAME: &str = "machine";

/// Runtime settings for a pushdown machine.
///
/// Missing fields take their defaults, so a config can be loaded from a
/// partial JSON document.
///
/// # Example
///
/// ```rust
/// use mindstack::config::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str(r#"{ "name": "dialogue" }"#).unwrap();
/// assert_eq!(config.name, "dialogue");
/// assert!(config.enter_on_start);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Label attached to log events and checkpoints.
    pub name: String,

    /// Call `enter()` on the state passed to `start()`.
    pub enter_on_start: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MACHINE_NAME.to_string(),
            enter_on_start: true,
        }
    }
}

impl MachineConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
