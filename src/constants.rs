//! App-wide constants.
//!
//! Centralises the tool name, namespace names, config paths and
//! environment variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "appsettings";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

// ── Namespaces ──────────────────────────────────────────────────────

/// Root namespace every setting key lives under.
pub const ROOT_NAMESPACE: &str = "serilog";

/// Separator between namespace segments and the setting key.
pub const NAMESPACE_SEPARATOR: char = ':';

// ── Files ───────────────────────────────────────────────────────────

/// Local config filename (e.g. `.appsettings.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".appsettings.toml";

/// Directory name under `~/.config/` for global config and the ambient store.
pub const CONFIG_DIR: &str = "appsettings";

/// Filename of the ambient settings store inside [`CONFIG_DIR`].
pub const AMBIENT_FILENAME: &str = "appsettings.toml";

/// Conventional section holding application settings inside a settings file.
pub const APP_SETTINGS_SECTION: &str = "appSettings";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_PREFIX: &str = "APPSETTINGS_PREFIX";
pub const ENV_MISSING_FILE: &str = "APPSETTINGS_MISSING_FILE";
pub const ENV_AMBIENT_FILE: &str = "APPSETTINGS_FILE";
pub const ENV_LOG: &str = "APPSETTINGS_LOG";
