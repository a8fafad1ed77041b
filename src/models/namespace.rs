//! Setting namespaces.
//!
//! A namespace is `serilog:` or, with a caller prefix, `<prefix>:serilog:`.
//! Raw keys are matched against it literally and case-sensitively.

use std::fmt;

use thiserror::Error;

use crate::constants::{NAMESPACE_SEPARATOR, ROOT_NAMESPACE};

/// Why a caller-supplied prefix was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PrefixViolation {
    #[strum(to_string = "must not contain ':'")]
    ContainsSeparator,
    #[strum(to_string = "must not be the reserved name 'serilog'")]
    Reserved,
}

/// A setting prefix that cannot form a namespace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid setting prefix '{prefix}': {reason}")]
pub struct InvalidPrefix {
    pub prefix: String,
    pub reason: PrefixViolation,
}

/// Check that `prefix` can be used as a custom namespace prefix.
pub fn validate_prefix(prefix: &str) -> Result<(), InvalidPrefix> {
    let reason = if prefix.contains(NAMESPACE_SEPARATOR) {
        Some(PrefixViolation::ContainsSeparator)
    } else if prefix == ROOT_NAMESPACE {
        Some(PrefixViolation::Reserved)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(InvalidPrefix {
            prefix: prefix.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// The key prefix selecting settings for one consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    /// The root namespace, `serilog:`.
    pub fn root() -> Self {
        Self(format!("{ROOT_NAMESPACE}{NAMESPACE_SEPARATOR}"))
    }

    /// Build the namespace for an optional caller prefix.
    pub fn with_prefix(prefix: Option<&str>) -> Result<Self, InvalidPrefix> {
        match prefix {
            None => Ok(Self::root()),
            Some(prefix) => {
                validate_prefix(prefix)?;
                Ok(Self(format!(
                    "{prefix}{NAMESPACE_SEPARATOR}{ROOT_NAMESPACE}{NAMESPACE_SEPARATOR}"
                )))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Return `key` without this namespace, or `None` if it lives elsewhere.
    pub fn strip<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.0.as_str())
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
