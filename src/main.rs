//! appsettings — resolve namespaced settings from the command line.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use appsettings::config;
use appsettings::constants;
use appsettings::env;
use appsettings::resolve;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use appsettings::models::{Properties, ResolvedSetting};
use cli::args::{Cli, Command, ResolveArgs};
use config::Config;
use env::Env;
use resolve::{MissingFilePolicy, Resolution};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::real();
    cli::init_logging(cli.verbose, &env);

    match cli.command {
        Command::Resolve(args) => run_resolve(args, &env),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Resolve settings with config defaults overridden by CLI flags.
fn run_resolve(args: ResolveArgs, env: &Env) -> Result<()> {
    let config = Config::load(Some(&args.path), env).context("failed to load configuration")?;

    let mut properties = config.properties.clone();
    properties.extend(args.properties.iter().cloned().collect::<Properties>());

    let mut settings = config.app_settings(env).properties(properties);
    if let Some(prefix) = config::non_blank(args.prefix.as_deref()) {
        settings = settings.prefix(prefix);
    }
    if let Some(file) = args.file {
        settings = settings.file_path(file);
    }
    if args.strict {
        settings = settings.missing_file(MissingFilePolicy::Fail);
    }

    let mut resolved: Vec<ResolvedSetting> = Vec::new();
    let outcome = settings
        .configure(&mut resolved)
        .with_context(|| format!("failed to resolve settings from {}", settings.source()))?;

    if let Resolution::SkippedMissingFile { path } = &outcome {
        eprintln!(
            "Warning: settings file {} does not exist and was ignored.",
            path.display()
        );
    }

    print!("{}", args.format.render(&resolved));
    Ok(())
}
