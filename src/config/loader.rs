//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.appsettings.toml` in the working directory
//! 4. `~/.config/appsettings/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;
use crate::models::Properties;
use crate::resolve::{AppSettings, MissingFilePolicy};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resolve: ResolveConfig,
    /// Values for `%property{name}` tokens.
    pub properties: Properties,
}

/// Resolution defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Custom namespace prefix (`<prefix>:serilog:`).
    pub prefix: Option<String>,
    /// Unset means the built-in default, [`MissingFilePolicy::Ignore`].
    pub missing_file: Option<MissingFilePolicy>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, working-directory config, then applies
    /// environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: working-directory config
        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for values it sets).
    fn merge(&mut self, other: Config) {
        if other.resolve.prefix.is_some() {
            self.resolve.prefix = other.resolve.prefix;
        }
        if other.resolve.missing_file.is_some() {
            self.resolve.missing_file = other.resolve.missing_file;
        }

        // Properties layer by name
        self.properties.extend(other.properties);
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_PREFIX) {
            if !val.trim().is_empty() {
                self.resolve.prefix = Some(val);
            }
        }
        if let Ok(val) = env.var(crate::constants::ENV_MISSING_FILE) {
            match val.parse::<MissingFilePolicy>() {
                Ok(policy) => self.resolve.missing_file = Some(policy),
                Err(_) => tracing::warn!(
                    "ignoring invalid {} value: {val}",
                    crate::constants::ENV_MISSING_FILE
                ),
            }
        }
    }

    /// Build resolution options from this config.
    pub fn app_settings(&self, env: &Env) -> AppSettings {
        let mut settings = AppSettings::new()
            .properties(self.properties.clone())
            .missing_file(self.resolve.missing_file.unwrap_or_default())
            .env(env.clone());
        if let Some(prefix) = non_blank(self.resolve.prefix.as_deref()) {
            settings = settings.prefix(prefix);
        }
        settings
    }
}

/// A blank prefix on the command line or in a config file means "no prefix".
pub fn non_blank(prefix: Option<&str>) -> Option<&str> {
    prefix.filter(|p| !p.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.resolve.prefix.is_none());
        assert_eq!(config.resolve.missing_file, None);
        assert!(config.properties.is_empty());
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[resolve]
prefix = "custom1"
missing_file = "fail"

[properties]
prop1 = "a"
prop2 = "b"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.resolve.prefix.as_deref(), Some("custom1"));
        assert_eq!(config.resolve.missing_file, Some(MissingFilePolicy::Fail));
        assert_eq!(config.properties.get("prop2"), Some("b"));
    }

    #[test]
    fn merge_overrides_set_values() {
        let mut base = Config::default();
        base.properties.insert("prop1", "a");
        base.properties.insert("prop2", "b");

        let mut other = Config::default();
        other.resolve.prefix = Some("custom2".to_string());
        other.resolve.missing_file = Some(MissingFilePolicy::Fail);
        other.properties.insert("prop2", "z");

        base.merge(other);

        assert_eq!(base.resolve.prefix.as_deref(), Some("custom2"));
        assert_eq!(base.resolve.missing_file, Some(MissingFilePolicy::Fail));
        assert_eq!(base.properties.get("prop1"), Some("a"));
        assert_eq!(base.properties.get("prop2"), Some("z"));
    }

    #[test]
    fn merge_keeps_base_when_other_is_unset() {
        let mut base = Config::default();
        base.resolve.prefix = Some("custom1".to_string());
        base.resolve.missing_file = Some(MissingFilePolicy::Fail);

        base.merge(Config::default());

        assert_eq!(base.resolve.prefix.as_deref(), Some("custom1"));
        assert_eq!(base.resolve.missing_file, Some(MissingFilePolicy::Fail));
    }

    #[test]
    fn merge_local_explicit_ignore_overrides_global_fail() {
        let mut global = Config::default();
        global.resolve.missing_file = Some(MissingFilePolicy::Fail);

        let local: Config = toml::from_str("[resolve]\nmissing_file = \"ignore\"\n").unwrap();
        global.merge(local);

        assert_eq!(global.resolve.missing_file, Some(MissingFilePolicy::Ignore));
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_file(&dir.path().join("absent.toml"));
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn load_from_work_dir() {
        let env = Env::empty();

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".appsettings.toml"),
            r#"
[resolve]
prefix = "custom1"

[properties]
prop1 = "a"
"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.resolve.prefix.as_deref(), Some("custom1"));
        assert_eq!(config.properties.get("prop1"), Some("a"));
    }

    #[test]
    fn global_config_path_mentions_app_dir() {
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_string_lossy().contains("appsettings"));
        }
    }

    #[test]
    fn apply_env_vars_prefix_and_policy() {
        let env = Env::from_pairs([
            ("APPSETTINGS_PREFIX", "custom2"),
            ("APPSETTINGS_MISSING_FILE", "fail"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.resolve.prefix.as_deref(), Some("custom2"));
        assert_eq!(config.resolve.missing_file, Some(MissingFilePolicy::Fail));
    }

    #[test]
    fn apply_env_vars_invalid_policy_is_ignored() {
        let env = Env::from_pairs([("APPSETTINGS_MISSING_FILE", "sometimes")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.resolve.missing_file, None);
    }

    #[test]
    fn app_settings_carries_config() {
        let mut config = Config::default();
        config.resolve.prefix = Some("custom1".to_string());
        let settings = config.app_settings(&Env::empty());
        assert_eq!(settings.namespace().unwrap().as_str(), "custom1:serilog:");
    }

    #[test]
    fn app_settings_ignores_blank_prefix() {
        let mut config = Config::default();
        config.resolve.prefix = Some("  ".to_string());
        let settings = config.app_settings(&Env::empty());
        assert_eq!(settings.namespace().unwrap().as_str(), "serilog:");
    }

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("custom1")), Some("custom1"));
        assert_eq!(non_blank(Some(" ")), None);
        assert_eq!(non_blank(None), None);
    }
}
