//! appsettings — resolve namespaced key/value settings for a logging
//! configuration pipeline (library crate).
//!
//! Raw `key = value` pairs are read from a settings file or the ambient
//! store, the `serilog:` (or `<prefix>:serilog:`) namespace is selected and
//! stripped, environment references and `%property{name}` tokens are
//! substituted, and the result is handed to a [`SettingsConsumer`].

pub mod config;
pub mod constants;
pub mod consumer;
pub mod env;
pub mod models;
pub mod output;
pub mod resolve;
pub mod source;

pub use consumer::SettingsConsumer;
pub use env::Env;
pub use models::{Namespace, Properties, RawSetting, ResolvedSetting};
pub use resolve::{AppSettings, MissingFilePolicy, Resolution, ResolveError, resolve};
pub use source::{SettingsSource, SourceError, SourceReader};
