//! Value types shared by the builder and the execution engine.
//!
//! - Transition keys derived from an ordered `(from, to)` pair
//! - Lifecycle event payloads handed to callbacks
//! - The tagged hook table the engine dispatches through
//! - The placeholder substitution helper used to render keys and messages

mod event;
mod hook;
mod key;
mod template;

pub use event::{InvalidTransition, LifecycleEvent};
pub use hook::{callback, Callback, ErrorHandler, HookKey, HookTable};
pub use key::TransitionKey;
pub use template::substitute;
