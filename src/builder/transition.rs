//! Declared transitions.

use crate::core::{Callback, LifecycleEvent};
use std::fmt;
use std::rc::Rc;

/// A transition declaration with its optional before/after callbacks.
///
/// `(from, to)` tuples convert into a spec with no callbacks.
#[derive(Clone)]
pub struct TransitionSpec {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) on_before: Option<Callback>,
    pub(crate) on_after: Option<Callback>,
}

impl TransitionSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            on_before: None,
            on_after: None,
        }
    }

    /// Callback run before the transition leaves the source state.
    pub fn on_before<F>(mut self, f: F) -> Self
    where
        F: Fn(&LifecycleEvent) + 'static,
    {
        self.on_before = Some(Rc::new(f));
        self
    }

    /// Callback run after the destination state has been entered.
    pub fn on_after<F>(mut self, f: F) -> Self
    where
        F: Fn(&LifecycleEvent) + 'static,
    {
        self.on_after = Some(Rc::new(f));
        self
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

impl From<(&str, &str)> for TransitionSpec {
    fn from((from, to): (&str, &str)) -> Self {
        Self::new(from, to)
    }
}

impl From<(String, String)> for TransitionSpec {
    fn from((from, to): (String, String)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Debug for TransitionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionSpec")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("on_before", &self.on_before.is_some())
            .field("on_after", &self.on_after.is_some())
            .finish()
    }
}
