//! Transition execution engine.
//!
//! The builder validates topology on its own and then hands a compiled
//! [`EngineSpec`] to an engine, which owns the current state, decides
//! whether a transition key is legal from it, and runs the compiled
//! hooks when a transition executes.
//!
//! [`TableEngine`] is the default implementation. Any type implementing
//! [`CompileEngine`] can be used instead, which keeps the builder testable
//! against a fake.

mod table;

pub use table::TableEngine;

use crate::builder::Result;
use crate::core::{ErrorHandler, HookTable, TransitionKey};

/// Everything an engine is constructed from.
pub struct EngineSpec {
    /// State the machine starts in
    pub init: String,
    /// Legal transitions, in declaration order
    pub transitions: Vec<TransitionKey>,
    /// Compiled per-state, per-transition and global dispatch hooks
    pub hooks: HookTable,
    /// Notified whenever a legality check refuses a transition
    pub on_invalid: ErrorHandler,
}

/// Runtime contract the builder delegates to once started.
pub trait TransitionEngine {
    /// Current state.
    fn state(&self) -> &str;

    /// Whether the machine is currently in `state`.
    fn is(&self, state: &str) -> bool {
        self.state() == state
    }

    /// Legality check with no side effects.
    fn permits(&self, transition: &TransitionKey) -> bool;

    /// Inverse legality check. When the transition is refused, the
    /// configured error handler is notified before this returns.
    fn cannot(&self, transition: &TransitionKey) -> bool;

    /// Execute a transition, firing the compiled hooks in lifecycle order.
    fn invoke(&mut self, transition: &TransitionKey) -> Result<()>;
}

/// Engines that can be built from a compiled [`EngineSpec`].
pub trait CompileEngine: TransitionEngine + Sized {
    fn compile(spec: EngineSpec) -> Self;
}
