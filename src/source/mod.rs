//! Settings sources.
//!
//! A [`SourceReader`] turns a [`SettingsSource`] into the ordered raw
//! key/value pairs the resolution pipeline works on. Two readers ship with
//! the crate: [`TomlFileReader`] for on-disk TOML files and the ambient
//! store, and [`MemoryReader`] for embedding and tests.

pub mod file;
pub mod memory;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::RawSetting;

pub use file::TomlFileReader;
pub use memory::MemoryReader;

/// Errors raised while reading a settings source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The named file does not exist. Kept distinct so callers can decide
    /// whether a missing file is fatal.
    #[error("settings file {path} does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to read settings file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("setting '{key}' in {path} is a {kind}; only scalar values are supported")]
    UnsupportedValue {
        path: PathBuf,
        key: String,
        kind: &'static str,
    },
}

impl SourceError {
    /// Returns `true` for the "file does not exist" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}

/// Where raw settings come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingsSource {
    /// A specific settings file.
    File(PathBuf),
    /// The process-wide settings store.
    Ambient,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsSource::File(path) => write!(f, "{}", path.display()),
            SettingsSource::Ambient => write!(f, "<ambient>"),
        }
    }
}

/// Produces raw settings for a source.
pub trait SourceReader {
    /// Read every raw setting from `source`, in source order.
    ///
    /// A missing [`SettingsSource::File`] must fail with
    /// [`SourceError::NotFound`].
    fn read(&self, source: &SettingsSource) -> Result<Vec<RawSetting>, SourceError>;
}

impl<R: SourceReader + ?Sized> SourceReader for &R {
    fn read(&self, source: &SettingsSource) -> Result<Vec<RawSetting>, SourceError> {
        (**self).read(source)
    }
}
