//! Machine-wide configuration.

use serde::{Deserialize, Serialize};

/// Default template for transition identifiers.
pub const DEFAULT_TRANSITION_KEY_TEMPLATE: &str = "{from}->{to}";

/// Default message logged when no error handler is installed.
pub const DEFAULT_INVALID_TRANSITION_TEMPLATE: &str = "Transition {name} from {from} to {to} fails.";

/// Templates a machine renders its keys and default messages from.
///
/// Options are fixed when the builder is created, so every key rendered at
/// configuration time matches the keys rendered while running.
///
/// Missing fields fall back to their defaults when deserializing:
///
/// ```rust
/// use fsm_builder::MachineOptions;
///
/// let options = MachineOptions::from_json(r#"{ "transition_key_template": "{from}:{to}" }"#)?;
/// assert_eq!(options.transition_key_template, "{from}:{to}");
/// assert_eq!(
///     options.invalid_transition_template,
///     "Transition {name} from {from} to {to} fails."
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Template for transition identifiers. Placeholders: `from`, `to`.
    pub transition_key_template: String,

    /// Message logged by the default error handler. Placeholders: `name`,
    /// `from`, `to`.
    pub invalid_transition_template: String,
}

impl MachineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transition_key_template(mut self, template: impl Into<String>) -> Self {
        self.transition_key_template = template.into();
        self
    }

    pub fn invalid_transition_template(mut self, template: impl Into<String>) -> Self {
        self.invalid_transition_template = template.into();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            transition_key_template: DEFAULT_TRANSITION_KEY_TEMPLATE.to_string(),
            invalid_transition_template: DEFAULT_INVALID_TRANSITION_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_templates() {
        let options = MachineOptions::default();

        assert_eq!(options.transition_key_template, "{from}->{to}");
        assert_eq!(
            options.invalid_transition_template,
            "Transition {name} from {from} to {to} fails."
        );
    }

    #[test]
    fn setters_override_templates() {
        let options = MachineOptions::new()
            .transition_key_template("{from}=>{to}")
            .invalid_transition_template("nope: {name}");

        assert_eq!(options.transition_key_template, "{from}=>{to}");
        assert_eq!(options.invalid_transition_template, "nope: {name}");
    }

    #[test]
    fn empty_json_yields_defaults() {
        assert_eq!(
            MachineOptions::from_json("{}").unwrap(),
            MachineOptions::default()
        );
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(MachineOptions::from_json("{ not json").is_err());
    }
}
