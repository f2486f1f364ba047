//! fsm-builder: declarative finite state machines with validated topology
//!
//! A machine is declared in two stages. While **configuring**, states,
//! transitions, the initial state and an error handler are declared; each
//! declaration is validated as it arrives (unique names, known endpoints,
//! unique `(from, to)` pairs). `start()` freezes the topology and compiles
//! it into an execution engine. While **running**, `go(to)` moves between
//! states and fires the declared callbacks in a fixed order.
//!
//! # Core Concepts
//!
//! - **Builder**: [`FiniteStateMachineBuilder`] is both the declaration API
//!   and the runtime façade
//! - **Callbacks**: per-state enter/leave, per-transition before/after, and
//!   global enter/leave listeners
//! - **Engine**: the [`engine::TransitionEngine`] that owns the current state
//!   and runs compiled hooks; [`engine::TableEngine`] by default
//!
//! # Example
//!
//! ```rust
//! use fsm_builder::{callback, FiniteStateMachineBuilder, StateSpec, TransitionSpec};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let on_running = Rc::clone(&log);
//! let on_any = Rc::clone(&log);
//!
//! let mut fsm = FiniteStateMachineBuilder::new();
//! fsm.add_state("idle")?
//!     .add_state(StateSpec::new("running").on_enter(move |event| {
//!         on_running.borrow_mut().push(format!("enter {}", event.to));
//!     }))?
//!     .set_init_state("idle")?
//!     .add_transition(TransitionSpec::new("idle", "running"))?
//!     .on_enter_state(callback(move |event| {
//!         on_any.borrow_mut().push(format!("any {}", event.transition));
//!     }))?
//!     .start()?;
//!
//! fsm.go("running")?;
//!
//! assert_eq!(fsm.current()?, "running");
//! assert_eq!(*log.borrow(), vec!["any idle->running", "enter running"]);
//! # Ok::<(), fsm_builder::FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{
    FiniteStateMachineBuilder, FsmError, MachineDescription, MachineOptions, Result, Stage,
    StateSpec, TransitionSpec,
};
pub use self::core::{callback, Callback, InvalidTransition, LifecycleEvent, TransitionKey};
