//! TOML settings files and the ambient store.
//!
//! A settings file is a TOML document whose top-level keys are the raw
//! setting keys, quoted when they contain `:`:
//!
//! ```toml
//! "serilog:minimum-level" = "Information"
//! "serilog:enrich:with-property:Path" = "%PATH%"
//! ```
//!
//! If the document has an `[appSettings]` table only that table is read.
//! Document order is preserved.

use std::path::{Path, PathBuf};

use crate::constants::{AMBIENT_FILENAME, APP_SETTINGS_SECTION, CONFIG_DIR, ENV_AMBIENT_FILE};
use crate::env::Env;
use crate::models::RawSetting;
use crate::source::{SettingsSource, SourceError, SourceReader};

/// Reads settings from TOML files on disk.
#[derive(Debug, Clone, Default)]
pub struct TomlFileReader {
    env: Env,
}

impl TomlFileReader {
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    /// Location of the ambient store.
    ///
    /// `APPSETTINGS_FILE` wins; otherwise `~/.config/appsettings/appsettings.toml`.
    pub fn ambient_path(&self) -> Option<PathBuf> {
        if let Ok(path) = self.env.var(ENV_AMBIENT_FILE) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(AMBIENT_FILENAME))
    }

    fn read_ambient(&self) -> Result<Vec<RawSetting>, SourceError> {
        let Some(path) = self.ambient_path() else {
            tracing::debug!("no ambient settings location could be determined");
            return Ok(Vec::new());
        };
        match load_file(&path) {
            Err(SourceError::NotFound { .. }) => {
                tracing::debug!(path = %path.display(), "ambient settings store is empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

impl SourceReader for TomlFileReader {
    fn read(&self, source: &SettingsSource) -> Result<Vec<RawSetting>, SourceError> {
        match source {
            SettingsSource::File(path) => load_file(path),
            SettingsSource::Ambient => self.read_ambient(),
        }
    }
}

/// Read and parse one settings file.
pub fn load_file(path: &Path) -> Result<Vec<RawSetting>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SourceError::ReadFile {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_settings(&content, path)
}

/// Parse settings file content. `path` is only used in error messages.
pub fn parse_settings(content: &str, path: &Path) -> Result<Vec<RawSetting>, SourceError> {
    let mut table: toml::Table = toml::from_str(content).map_err(|e| SourceError::ParseFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let has_section = matches!(table.get(APP_SETTINGS_SECTION), Some(toml::Value::Table(_)));
    let entries = if has_section {
        match table.remove(APP_SETTINGS_SECTION) {
            Some(toml::Value::Table(section)) => section,
            _ => toml::Table::new(),
        }
    } else {
        table
    };

    entries
        .into_iter()
        .map(|(key, value)| {
            let value = scalar_to_string(&key, value, path);
            value.map(|value| RawSetting { key, value })
        })
        .collect()
}

fn scalar_to_string(key: &str, value: toml::Value, path: &Path) -> Result<String, SourceError> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        other @ (toml::Value::Array(_) | toml::Value::Table(_)) => {
            Err(SourceError::UnsupportedValue {
                path: path.to_path_buf(),
                key: key.to_string(),
                kind: other.type_str(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(settings: &[RawSetting]) -> Vec<(&str, &str)> {
        settings
            .iter()
            .map(|s| (s.key.as_str(), s.value.as_str()))
            .collect()
    }

    #[test]
    fn parse_preserves_document_order() {
        let content = r#"
"serilog:write-to:Console" = ""
"serilog:minimum-level" = "Information"
"custom1:serilog:minimum-level" = "Warning"
"#;
        let settings = parse_settings(content, Path::new("t.toml")).unwrap();
        assert_eq!(
            pairs(&settings),
            vec![
                ("serilog:write-to:Console", ""),
                ("serilog:minimum-level", "Information"),
                ("custom1:serilog:minimum-level", "Warning"),
            ]
        );
    }

    #[test]
    fn parse_reads_app_settings_section_only() {
        let content = r#"
title = "ignored"

[appSettings]
"serilog:minimum-level" = "Debug"
"#;
        let settings = parse_settings(content, Path::new("t.toml")).unwrap();
        assert_eq!(pairs(&settings), vec![("serilog:minimum-level", "Debug")]);
    }

    #[test]
    fn parse_stringifies_scalars() {
        let content = r#"
"serilog:write-to:File.fileSizeLimitBytes" = 1048576
"serilog:write-to:File.shared" = true
"serilog:sample-rate" = 0.5
"#;
        let settings = parse_settings(content, Path::new("t.toml")).unwrap();
        assert_eq!(
            pairs(&settings),
            vec![
                ("serilog:write-to:File.fileSizeLimitBytes", "1048576"),
                ("serilog:write-to:File.shared", "true"),
                ("serilog:sample-rate", "0.5"),
            ]
        );
    }

    #[test]
    fn parse_rejects_nested_values() {
        let err = parse_settings("\"serilog:using\" = [\"a\", \"b\"]", Path::new("t.toml"))
            .unwrap_err();
        match err {
            SourceError::UnsupportedValue { key, kind, .. } => {
                assert_eq!(key, "serilog:using");
                assert_eq!(kind, "array");
            }
            other => panic!("expected UnsupportedValue, got {other:?}"),
        }
    }

    #[test]
    fn parse_invalid_toml() {
        let err = parse_settings("not valid {{ toml", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn load_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");
        std::fs::write(&path, "\"serilog:minimum-level\" = \"Error\"\n").unwrap();

        let settings = load_file(&path).unwrap();
        assert_eq!(pairs(&settings), vec![("serilog:minimum-level", "Error")]);
    }

    #[test]
    fn ambient_path_honours_env_override() {
        let reader = TomlFileReader::new(Env::from_pairs([("APPSETTINGS_FILE", "/etc/app.toml")]));
        assert_eq!(reader.ambient_path(), Some(PathBuf::from("/etc/app.toml")));
    }

    #[test]
    fn ambient_store_reads_env_located_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ambient.toml");
        std::fs::write(&path, "\"serilog:minimum-level\" = \"Verbose\"\n").unwrap();

        let reader = TomlFileReader::new(Env::from_pairs([(
            "APPSETTINGS_FILE",
            path.to_string_lossy().to_string(),
        )]));
        let settings = reader.read(&SettingsSource::Ambient).unwrap();
        assert_eq!(pairs(&settings), vec![("serilog:minimum-level", "Verbose")]);
    }

    #[test]
    fn missing_ambient_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let reader = TomlFileReader::new(Env::from_pairs([(
            "APPSETTINGS_FILE",
            dir.path().join("nope.toml").to_string_lossy().to_string(),
        )]));
        assert!(reader.read(&SettingsSource::Ambient).unwrap().is_empty());
    }
}
