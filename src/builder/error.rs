//! Errors raised by the state machine builder and its engine.

use thiserror::Error;

/// Errors that can occur while configuring or running a state machine.
///
/// Every variant is raised synchronously to the immediate caller and leaves
/// the machine exactly as it was before the failing call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Cannot call {operation}() after start()")]
    AlreadyStarted { operation: &'static str },

    #[error("Cannot call {operation}() before start()")]
    NotStarted { operation: &'static str },

    #[error("State '{name}' is already declared")]
    DuplicateState { name: String },

    #[error("Initial state already set to '{existing}', cannot set it to '{requested}'")]
    DuplicateInitState { existing: String, requested: String },

    #[error("Transition '{transition}' is already declared")]
    DuplicateTransition { transition: String },

    #[error("Handler is already registered")]
    DuplicateHandler,

    #[error("State '{name}' is not declared")]
    UnknownState { name: String },

    #[error("Initial state not specified. Call .set_init_state(name) before .start()")]
    MissingInitState,

    #[error("Transition '{transition}' from '{from}' to '{to}' is not allowed")]
    IllegalTransition {
        transition: String,
        from: String,
        to: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FsmError>;
