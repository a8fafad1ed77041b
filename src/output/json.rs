//! JSON output renderer.
//!
//! Outputs `{"settings": [{"key": ..., "value": ...}], "count": n}`.

use crate::models::ResolvedSetting;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, settings: &[ResolvedSetting]) -> String {
        let output = serde_json::json!({
            "settings": settings,
            "count": settings.len(),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
