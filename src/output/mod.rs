//! Output renderers for resolved settings: terminal, JSON, plain `key=value`.

pub mod json;
pub mod plain;
pub mod terminal;

use crate::models::ResolvedSetting;

/// Trait for rendering resolved settings to an output format.
pub trait OutputRenderer {
    /// Render settings to a string.
    fn render(&self, settings: &[ResolvedSetting]) -> String;
}
