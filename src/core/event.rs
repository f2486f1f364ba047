//! Payloads handed to lifecycle callbacks and to the error handler.

use super::key::TransitionKey;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Payload passed to every lifecycle callback of one transition.
///
/// All callbacks fired by a single `go` call receive the same event, so
/// `occurred_at` is identical across them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LifecycleEvent {
    /// The transition being executed
    pub transition: TransitionKey,
    /// The state being left
    pub from: String,
    /// The state being entered
    pub to: String,
    /// When the transition started
    pub occurred_at: DateTime<Utc>,
}

impl LifecycleEvent {
    /// Event for `transition`, stamped with `occurred_at`.
    pub fn new(transition: TransitionKey, occurred_at: DateTime<Utc>) -> Self {
        Self {
            from: transition.from().to_string(),
            to: transition.to().to_string(),
            transition,
            occurred_at,
        }
    }
}

/// Payload passed to the error handler when a transition is refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvalidTransition {
    pub transition: TransitionKey,
    pub from: String,
    pub to: String,
}

impl InvalidTransition {
    /// Refusal of `transition` from its source state.
    pub fn new(transition: TransitionKey) -> Self {
        Self {
            from: transition.from().to_string(),
            to: transition.to().to_string(),
            transition,
        }
    }
}
