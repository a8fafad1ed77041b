//! In-memory settings sources.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::models::RawSetting;
use crate::source::{SettingsSource, SourceError, SourceReader};

/// Serves settings held in memory.
///
/// The ambient store and any number of named "files" are registered up
/// front; reading an unregistered file fails with [`SourceError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    ambient: Vec<RawSetting>,
    files: IndexMap<PathBuf, Vec<RawSetting>>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ambient store contents.
    pub fn with_ambient<I, S>(mut self, settings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RawSetting>,
    {
        self.ambient = settings.into_iter().map(Into::into).collect();
        self
    }

    /// Register a file at `path`.
    pub fn with_file<I, S>(mut self, path: impl AsRef<Path>, settings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<RawSetting>,
    {
        self.files.insert(
            path.as_ref().to_path_buf(),
            settings.into_iter().map(Into::into).collect(),
        );
        self
    }
}

impl SourceReader for MemoryReader {
    fn read(&self, source: &SettingsSource) -> Result<Vec<RawSetting>, SourceError> {
        match source {
            SettingsSource::Ambient => Ok(self.ambient.clone()),
            SettingsSource::File(path) => {
                self.files
                    .get(path)
                    .cloned()
                    .ok_or_else(|| SourceError::NotFound { path: path.clone() })
            }
        }
    }
}
