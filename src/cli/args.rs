//! Clap argument types and validation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use appsettings::models::ResolvedSetting;

/// Resolve namespaced settings for a logging configuration.
#[derive(Parser, Debug)]
#[command(
    name = "appsettings",
    version = appsettings::constants::VERSION,
    about = "Resolve namespaced key/value settings for logger configuration",
)]
pub struct Cli {
    /// Log resolution diagnostics to stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Resolve settings and print them.
    Resolve(ResolveArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `resolve` subcommand.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Directory to look for `.appsettings.toml` in (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Custom namespace prefix; selects `<PREFIX>:serilog:` keys.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Settings file to read instead of the ambient store.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Property for `%property{NAME}` tokens, as NAME=VALUE. Repeatable.
    #[arg(long = "property", short = 'p', value_name = "NAME=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Fail if --file does not exist instead of ignoring it.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// Parse a `NAME=VALUE` property argument.
pub fn parse_property(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("property name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
    Plain,
}

impl OutputFormat {
    /// Render settings using the renderer for this format.
    pub fn render(&self, settings: &[ResolvedSetting]) -> String {
        use appsettings::output::OutputRenderer;
        use appsettings::output::{
            json::JsonRenderer, plain::PlainRenderer, terminal::TerminalRenderer,
        };
        match self {
            OutputFormat::Terminal => TerminalRenderer.render(settings),
            OutputFormat::Json => JsonRenderer.render(settings),
            OutputFormat::Plain => PlainRenderer.render(settings),
        }
    }
}
