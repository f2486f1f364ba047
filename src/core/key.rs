//! Transition identity.

use super::template::substitute;
use serde::Serialize;
use std::fmt;

/// Identity of a declared transition: an ordered `(from, to)` pair and the
/// identifier rendered from it.
///
/// The identifier is rendered once, from the machine's key template, so
/// declaration-time and run-time keys always agree. Equality covers the pair
/// as well, so two edges whose identifiers happen to render alike stay
/// distinct.
///
/// # Example
///
/// ```rust
/// use fsm_builder::core::TransitionKey;
///
/// let key = TransitionKey::new("idle", "running", "{from}->{to}");
/// assert_eq!(key.id(), "idle->running");
/// assert_eq!(key.from(), "idle");
/// assert_eq!(key.to(), "running");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TransitionKey {
    #[serde(rename = "identifier")]
    id: String,
    from: String,
    to: String,
}

impl TransitionKey {
    /// Render the key for `from -> to` using `template` (placeholders `from`
    /// and `to`).
    pub fn new(from: impl Into<String>, to: impl Into<String>, template: &str) -> Self {
        let from = from.into();
        let to = to.into();
        let id = substitute(template, &[("from", &from), ("to", &to)]);
        Self { id, from, to }
    }

    /// Rendered identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Source state.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Target state.
    pub fn to(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
