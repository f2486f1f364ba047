//! Declared states.

use crate::core::{Callback, LifecycleEvent};
use std::fmt;
use std::rc::Rc;

/// A state declaration with its optional enter/leave callbacks.
///
/// Plain names convert into a spec with no callbacks, so both forms work
/// with `add_state`:
///
/// ```rust
/// use fsm_builder::{FiniteStateMachineBuilder, StateSpec};
///
/// let mut fsm = FiniteStateMachineBuilder::new();
/// fsm.add_state("idle")?
///     .add_state(StateSpec::new("running").on_enter(|event| {
///         println!("entered {} via {}", event.to, event.transition);
///     }))?;
/// # Ok::<(), fsm_builder::FsmError>(())
/// ```
#[derive(Clone)]
pub struct StateSpec {
    pub(crate) name: String,
    pub(crate) on_enter: Option<Callback>,
    pub(crate) on_leave: Option<Callback>,
}

impl StateSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_enter: None,
            on_leave: None,
        }
    }

    /// Callback run when the machine enters this state.
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: Fn(&LifecycleEvent) + 'static,
    {
        self.on_enter = Some(Rc::new(f));
        self
    }

    /// Callback run when the machine leaves this state.
    pub fn on_leave<F>(mut self, f: F) -> Self
    where
        F: Fn(&LifecycleEvent) + 'static,
    {
        self.on_leave = Some(Rc::new(f));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for StateSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for StateSpec {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for StateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateSpec")
            .field("name", &self.name)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}
