//! `%property{name}` substitution.
//!
//! Names are `\w+` and compared case-sensitively, as is the `%property`
//! marker. Anything that does not form a complete token (`%property{`,
//! `%property{}`, `%property{a b}`) is literal text.

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

use crate::models::Properties;

static PROPERTY_TOKEN_RE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"%property\{(\w+)\}").unwrap());

/// A token referenced a property the caller did not supply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("property '{name}' is not defined")]
pub struct MissingProperty {
    pub name: String,
}

/// Replace every property token in `value` with its mapped value.
///
/// Fails on the first token naming an undefined property; no partially
/// substituted value is ever returned. Each distinct name is looked up
/// once and the value is scanned once.
pub fn substitute_properties(
    value: &str,
    properties: &Properties,
) -> Result<String, MissingProperty> {
    let mut output = String::with_capacity(value.len());
    let mut resolved: HashMap<&str, &str> = HashMap::new();
    let mut last_end = 0;

    for caps in PROPERTY_TOKEN_RE.captures_iter(value) {
        let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();

        let replacement = match resolved.get(name) {
            Some(replacement) => *replacement,
            None => {
                let replacement = properties.get(name).ok_or_else(|| MissingProperty {
                    name: name.to_string(),
                })?;
                resolved.insert(name, replacement);
                replacement
            }
        };

        output.push_str(&value[last_end..token.start()]);
        output.push_str(replacement);
        last_end = token.end();
    }

    output.push_str(&value[last_end..]);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> Properties {
        Properties::new().with("prop1", "a").with("prop2", "b")
    }

    #[test]
    fn substitutes_two_distinct_properties() {
        let out = substitute_properties("%property{prop1} and %property{prop2}", &props()).unwrap();
        assert_eq!(out, "a and b");
    }

    #[test]
    fn no_tokens_is_identity() {
        assert_eq!(substitute_properties("Nothing here", &props()).unwrap(), "Nothing here");
        assert_eq!(substitute_properties("", &Properties::new()).unwrap(), "");
    }

    #[test]
    fn repeated_token_replaced_everywhere() {
        let value = "%property{prop1}-%property{prop1}-%property{prop1}";
        let out = substitute_properties(value, &props()).unwrap();
        assert_eq!(out, "a-a-a");
    }

    #[test]
    fn missing_property_fails_with_name() {
        let err = substitute_properties("%property{prop1}", &Properties::new()).unwrap_err();
        assert_eq!(err.name, "prop1");
        assert!(err.to_string().contains("prop1"));
    }

    #[test]
    fn missing_property_after_known_one_still_fails() {
        let err = substitute_properties("%property{prop1} %property{prop9}", &props()).unwrap_err();
        assert_eq!(err.name, "prop9");
    }

    #[test]
    fn names_are_case_sensitive() {
        let err = substitute_properties("%property{Prop1}", &props()).unwrap_err();
        assert_eq!(err.name, "Prop1");
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert_eq!(
            substitute_properties("%Property{prop1}", &props()).unwrap(),
            "%Property{prop1}"
        );
    }

    #[test]
    fn malformed_tokens_are_literal() {
        let props = Properties::new();
        for value in [
            "%property{prop1",
            "%property{}",
            "%property{a b}",
            "property{prop1}",
            "%property prop1}",
        ] {
            assert_eq!(substitute_properties(value, &props).unwrap(), value);
        }
    }

    #[test]
    fn replacement_is_not_rescanned() {
        let props = Properties::new().with("outer", "%property{inner}");
        assert_eq!(
            substitute_properties("%property{outer}", &props).unwrap(),
            "%property{inner}"
        );
    }

    #[test]
    fn surrounding_text_is_kept() {
        let out = substitute_properties("[%property{prop2}] done", &props()).unwrap();
        assert_eq!(out, "[b] done");
    }
}
