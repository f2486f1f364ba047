//! Callback types and the tagged hook table.
//!
//! Callbacks are looked up by a structured [`HookKey`] rather than by a
//! method name, so a per-state hook can never be confused with a
//! per-transition hook sharing the same text.

use super::event::{InvalidTransition, LifecycleEvent};
use super::key::TransitionKey;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Lifecycle callback. Reference counted so listeners can be identified and
/// removed by the handle that registered them.
pub type Callback = Rc<dyn Fn(&LifecycleEvent)>;

/// Notification fired when a requested transition is refused.
pub type ErrorHandler = Rc<dyn Fn(&InvalidTransition)>;

/// Wrap a closure as a [`Callback`].
///
/// Keep the returned handle if the callback must later be removed with
/// `off_enter_state` / `off_exit_state`.
pub fn callback<F>(f: F) -> Callback
where
    F: Fn(&LifecycleEvent) + 'static,
{
    Rc::new(f)
}

/// Slot in the hook table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HookKey {
    /// Entering the named state
    EnterState(String),
    /// Leaving the named state
    LeaveState(String),
    /// Before the transition runs
    BeforeTransition(TransitionKey),
    /// After the transition has completed
    AfterTransition(TransitionKey),
    /// Entering any state (global listener dispatch)
    EnterAnyState,
    /// Leaving any state (global listener dispatch)
    LeaveAnyState,
}

/// Compiled callback table consumed by the engine.
#[derive(Clone, Default)]
pub struct HookTable {
    hooks: HashMap<HookKey, Callback>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a callback, returning the one it replaced.
    pub fn insert(&mut self, key: HookKey, callback: Callback) -> Option<Callback> {
        self.hooks.insert(key, callback)
    }

    pub fn get(&self, key: &HookKey) -> Option<&Callback> {
        self.hooks.get(key)
    }

    pub fn contains(&self, key: &HookKey) -> bool {
        self.hooks.contains_key(key)
    }

    /// Invoke the callback in `key`'s slot. Returns whether one was present.
    pub fn fire(&self, key: &HookKey, event: &LifecycleEvent) -> bool {
        match self.hooks.get(key) {
            Some(callback) => {
                callback(event);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.hooks.keys()).finish()
    }
}
