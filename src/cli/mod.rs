//! CLI command definitions, argument parsing and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

use appsettings::constants::ENV_LOG;
use appsettings::env::Env;

/// Install the stderr `tracing` subscriber.
///
/// `APPSETTINGS_LOG` takes an `EnvFilter` directive; without it the level
/// is `debug` when `verbose` is set and `warn` otherwise.
pub fn init_logging(verbose: bool, env: &Env) {
    let default = if verbose { "appsettings=debug" } else { "warn" };
    let filter = env
        .var(ENV_LOG)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
