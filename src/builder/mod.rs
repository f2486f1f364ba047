//! Builder API for declaring and driving state machines.
//!
//! A [`FiniteStateMachineBuilder`] collects states, transitions and
//! callbacks while configuring, validates every declaration as it arrives,
//! and after `start()` is the only way to query or advance the machine.

pub mod error;
pub mod machine;
pub mod macros;
pub mod options;
pub mod registry;
pub mod state;
pub mod transition;

pub use error::{FsmError, Result};
pub use machine::{FiniteStateMachineBuilder, MachineDescription, Stage};
pub use options::MachineOptions;
pub use registry::HandlerRegistry;
pub use state::StateSpec;
pub use transition::TransitionSpec;
