//! Environment variable expansion.
//!
//! Recognises `%NAME%` and `${NAME}` where `NAME` is `[A-Za-z_][A-Za-z0-9_]*`.
//! References to undefined variables stay in the output verbatim, and the
//! scan resumes after them: in `%UNDEF%DEF%` the `%DEF%` pair is never
//! formed because its opening `%` closed the undefined reference.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::env::Env;

static ENV_REF_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"%([A-Za-z_][A-Za-z0-9_]*)%|\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap()
});

/// Replace environment references in `value` with their current values.
///
/// Replacement text is inserted as-is and never rescanned.
pub fn expand_env<'a>(value: &'a str, env: &Env) -> Cow<'a, str> {
    ENV_REF_RE.replace_all(value, |caps: &Captures<'_>| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        match env.var(name) {
            Ok(resolved) => resolved,
            Err(_) => caps[0].to_string(),
        }
    })
}
