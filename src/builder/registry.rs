//! Global enter/leave listeners.

use crate::builder::error::{FsmError, Result};
use crate::core::{Callback, LifecycleEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Handle shared between the builder and the dispatch hooks compiled at
/// `start()`, so listeners attached while running still fire.
pub(crate) type SharedRegistry = Rc<RefCell<HandlerRegistry>>;

/// Ordered sets of "enter any state" and "leave any state" listeners.
///
/// Listeners are identified by their `Rc` allocation: registering the same
/// handle twice fails, and removal matches by handle.
#[derive(Default)]
pub struct HandlerRegistry {
    enter: Vec<Callback>,
    leave: Vec<Callback>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enter(&mut self, handler: Callback) -> Result<()> {
        insert_unique(&mut self.enter, handler)
    }

    pub fn add_leave(&mut self, handler: Callback) -> Result<()> {
        insert_unique(&mut self.leave, handler)
    }

    /// Returns whether the handler was registered.
    pub fn remove_enter(&mut self, handler: &Callback) -> bool {
        remove_one(&mut self.enter, handler)
    }

    /// Returns whether the handler was registered.
    pub fn remove_leave(&mut self, handler: &Callback) -> bool {
        remove_one(&mut self.leave, handler)
    }

    pub fn enter_listeners(&self) -> &[Callback] {
        &self.enter
    }

    pub fn leave_listeners(&self) -> &[Callback] {
        &self.leave
    }

    /// Run every enter listener in registration order.
    ///
    /// The list is snapshotted first, so a listener may register or remove
    /// listeners without invalidating the iteration.
    pub(crate) fn dispatch_enter(registry: &SharedRegistry, event: &LifecycleEvent) {
        let listeners = registry.borrow().enter.clone();
        for listener in listeners {
            listener(event);
        }
    }

    /// Run every leave listener in registration order.
    pub(crate) fn dispatch_leave(registry: &SharedRegistry, event: &LifecycleEvent) {
        let listeners = registry.borrow().leave.clone();
        for listener in listeners {
            listener(event);
        }
    }
}

fn insert_unique(listeners: &mut Vec<Callback>, handler: Callback) -> Result<()> {
    if listeners.iter().any(|existing| Rc::ptr_eq(existing, &handler)) {
        return Err(FsmError::DuplicateHandler);
    }
    listeners.push(handler);
    Ok(())
}

fn remove_one(listeners: &mut Vec<Callback>, handler: &Callback) -> bool {
    match listeners
        .iter()
        .position(|existing| Rc::ptr_eq(existing, handler))
    {
        Some(index) => {
            listeners.remove(index);
            true
        }
        None => false,
    }
}
