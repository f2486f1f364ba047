//! Named placeholder substitution.

/// Replace every `{name}` placeholder in `template` with its value.
///
/// Placeholders with no matching entry in `values` are left untouched, as is
/// an unterminated `{`.
///
/// # Example
///
/// ```rust
/// use fsm_builder::core::substitute;
///
/// let key = substitute("{from}->{to}", &[("from", "idle"), ("to", "running")]);
/// assert_eq!(key, "idle->running");
/// ```
pub fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
