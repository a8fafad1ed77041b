//! Settings resolution pipeline.
//!
//! One synchronous pass: read raw pairs from the source, keep those under
//! the namespace, expand environment references, substitute
//! `%property{name}` tokens, and hand the result to the consumer in a
//! single call. Any failure aborts the whole pass before the consumer is
//! touched.

pub mod env_expand;
pub mod prefix;
pub mod properties;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consumer::SettingsConsumer;
use crate::env::Env;
use crate::models::{InvalidPrefix, Namespace, Properties, RawSetting, ResolvedSetting};
use crate::source::{SettingsSource, SourceError, SourceReader, TomlFileReader};

pub use env_expand::expand_env;
pub use prefix::filter_prefix;
pub use properties::{MissingProperty, substitute_properties};

/// Errors surfaced by a resolution.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    InvalidPrefix(#[from] InvalidPrefix),

    #[error("setting '{key}' references undefined property '{name}'")]
    MissingProperty { name: String, key: String },

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl ResolveError {
    /// The undefined property name, for `MissingProperty` errors.
    pub fn missing_property(&self) -> Option<&str> {
        match self {
            ResolveError::MissingProperty { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// What to do when an explicitly named settings file does not exist.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MissingFilePolicy {
    /// Log a diagnostic and contribute no settings.
    #[default]
    Ignore,
    /// Fail the resolution with [`SourceError::NotFound`].
    Fail,
}

/// How a successful resolution ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The consumer received `count` settings.
    Delivered { count: usize },
    /// The settings file was missing and ignored; the consumer was not called.
    SkippedMissingFile { path: PathBuf },
}

impl Resolution {
    /// Number of settings handed to the consumer.
    pub fn delivered(&self) -> usize {
        match self {
            Resolution::Delivered { count } => *count,
            Resolution::SkippedMissingFile { .. } => 0,
        }
    }
}

/// Turn raw settings into resolved ones for `namespace`.
///
/// Pure apart from environment lookups through `env`. Fails with the first
/// undefined property; no partial output is returned.
pub fn resolve_settings(
    raw: Vec<RawSetting>,
    namespace: &Namespace,
    properties: &Properties,
    env: &Env,
) -> Result<Vec<ResolvedSetting>, ResolveError> {
    filter_prefix(raw, namespace)
        .into_iter()
        .map(|(key, value)| {
            let expanded = expand_env(&value, env);
            match substitute_properties(&expanded, properties) {
                Ok(value) => Ok(ResolvedSetting { key, value }),
                Err(MissingProperty { name }) => Err(ResolveError::MissingProperty { name, key }),
            }
        })
        .collect()
}

/// Resolution options and entry point.
///
/// ```no_run
/// use appsettings::{AppSettings, Properties, ResolvedSetting};
///
/// let mut settings: Vec<ResolvedSetting> = Vec::new();
/// AppSettings::new()
///     .prefix("custom1")
///     .file_path("app.toml")
///     .properties(Properties::new().with("prop1", "a"))
///     .configure(&mut settings)?;
/// # Ok::<(), appsettings::ResolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    prefix: Option<String>,
    file_path: Option<PathBuf>,
    properties: Properties,
    missing_file: MissingFilePolicy,
    env: Env,
}

impl AppSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `<prefix>:serilog:` instead of `serilog:`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Read this file instead of the ambient store. A blank path means
    /// the ambient store.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn missing_file(mut self, policy: MissingFilePolicy) -> Self {
        self.missing_file = policy;
        self
    }

    /// Environment used for expansion and for locating the ambient store.
    pub fn env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    pub fn namespace(&self) -> Result<Namespace, InvalidPrefix> {
        Namespace::with_prefix(self.prefix.as_deref())
    }

    pub fn source(&self) -> SettingsSource {
        match &self.file_path {
            Some(path) if !path.as_os_str().to_string_lossy().trim().is_empty() => {
                SettingsSource::File(path.clone())
            }
            _ => SettingsSource::Ambient,
        }
    }

    /// Resolve from the TOML file or ambient store and deliver to `consumer`.
    pub fn configure<C>(&self, consumer: &mut C) -> Result<Resolution, ResolveError>
    where
        C: SettingsConsumer + ?Sized,
    {
        let reader = TomlFileReader::new(self.env.clone());
        self.configure_with(&reader, consumer)
    }

    /// Resolve through `reader` and deliver to `consumer`.
    ///
    /// The prefix is validated before the source is read. The consumer is
    /// called at most once, and only when every setting resolved.
    pub fn configure_with<R, C>(
        &self,
        reader: &R,
        consumer: &mut C,
    ) -> Result<Resolution, ResolveError>
    where
        R: SourceReader + ?Sized,
        C: SettingsConsumer + ?Sized,
    {
        let namespace = self.namespace()?;
        let source = self.source();

        let raw = match reader.read(&source) {
            Ok(raw) => raw,
            Err(SourceError::NotFound { path })
                if self.missing_file == MissingFilePolicy::Ignore =>
            {
                tracing::debug!(
                    path = %path.display(),
                    "the specified settings file does not exist and will be ignored"
                );
                return Ok(Resolution::SkippedMissingFile { path });
            }
            Err(e) => return Err(e.into()),
        };

        let raw_count = raw.len();
        let resolved = resolve_settings(raw, &namespace, &self.properties, &self.env)?;
        let count = resolved.len();
        tracing::debug!(
            %source,
            %namespace,
            raw = raw_count,
            resolved = count,
            "settings resolved"
        );

        consumer.apply(resolved);
        Ok(Resolution::Delivered { count })
    }
}

/// Resolve settings with the default missing-file policy and deliver them
/// to `consumer`.
///
/// `file_path` of `None` reads the ambient store; a missing file is logged
/// and skipped. `properties` of `None` means no properties are defined.
pub fn resolve<C>(
    setting_prefix: Option<&str>,
    file_path: Option<&Path>,
    properties: Option<&Properties>,
    consumer: &mut C,
) -> Result<(), ResolveError>
where
    C: SettingsConsumer + ?Sized,
{
    let mut settings = AppSettings::new();
    if let Some(prefix) = setting_prefix {
        settings = settings.prefix(prefix);
    }
    if let Some(path) = file_path {
        settings = settings.file_path(path);
    }
    if let Some(properties) = properties {
        settings = settings.properties(properties.clone());
    }
    settings.configure(consumer).map(|_| ())
}
