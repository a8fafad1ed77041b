//! Plain `key=value` renderer, one setting per line, for piping.

use crate::models::ResolvedSetting;
use crate::output::OutputRenderer;

pub struct PlainRenderer;

impl OutputRenderer for PlainRenderer {
    fn render(&self, settings: &[ResolvedSetting]) -> String {
        settings.iter().map(|s| format!("{s}\n")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_lines_in_order() {
        let settings = vec![
            ResolvedSetting::new("write-to:Console", ""),
            ResolvedSetting::new("minimum-level", "Debug"),
        ];
        assert_eq!(
            PlainRenderer.render(&settings),
            "write-to:Console=\nminimum-level=Debug\n"
        );
    }

    #[test]
    fn render_empty_is_empty() {
        assert_eq!(PlainRenderer.render(&[]), "");
    }
}
