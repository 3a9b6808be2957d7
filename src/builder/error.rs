//! Build errors for transition builders.

use thiserror::Error;

/// Errors that can occur when building transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition token not specified. Call .on(token)")]
    MissingToken,

    #[error("Transition mode not specified. Call .push(), .pop(), .replace() or .mode(mode)")]
    MissingMode,
}
