//! Terminal renderer: aligned, colored `key = value` lines.

use colored::Colorize;

use crate::models::ResolvedSetting;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, aligned text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render(&self, settings: &[ResolvedSetting]) -> String {
        if settings.is_empty() {
            return format!("{}", "  ✔ No settings in this namespace.\n".green());
        }

        let width = settings.iter().map(|s| s.key.chars().count()).max().unwrap_or(0);
        let mut output = String::new();

        for setting in settings {
            let padding = " ".repeat(width - setting.key.chars().count());
            let value = if setting.value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                setting.value.green().to_string()
            };
            output.push_str(&format!(
                "  {}{} {} {}\n",
                setting.key.bold(),
                padding,
                "=".dimmed(),
                value
            ));
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} {} resolved\n",
            settings.len().to_string().bold(),
            if settings.len() == 1 { "setting" } else { "settings" },
        ));

        output
    }
}
