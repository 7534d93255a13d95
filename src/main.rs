//! # listpair CLI Entry Point
//!
//! Applies one list-pair operation per invocation to a pair stored on disk.
//!
//! ## Usage
//!
//! ```bash
//! # Seed the pair
//! listpair add L Apple "2|apple"
//! listpair add L banana "1|Banana"
//!
//! # Select the second left entry and move it to the right list
//! listpair select L 2
//! listpair right
//!
//! # Reorder and sort
//! listpair up R 3
//! listpair to L 1
//! listpair sort L --by alphabetic
//!
//! # Inspect
//! listpair show
//! listpair values R
//! ```
//!
//! ## Files
//!
//! - State: `--state FILE`, else `state_file` from the config, else
//!   `~/.local/share/listpair/pair.json`
//! - Config: `--config FILE`, else `~/.config/listpair/config.json`
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` takes precedence
//! over the configured `log_level`; `--verbose` forces `debug`.

use listpair::commands::{self, Command};
use listpair::config::Config;
use listpair::store::{self, PairState};

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// listpair - Move, reorder and sort entries across a pair of option lists
#[derive(Parser, Debug)]
#[command(name = "listpair")]
#[command(author = "Luckystrike561")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Move, reorder and sort entries across a pair of option lists", long_about = None)]
struct Args {
    /// Path to the pair state file
    #[arg(short, long, value_name = "FILE", global = true)]
    state: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, load_error) = match &args.config {
        Some(path) => (Config::load_from(path)?, None),
        None => Config::load(),
    };

    init_logging(args.verbose, &config.log_level);
    if let Some(err) = load_error {
        warn!(error = %format!("{err:#}"), "Failed to load config, using defaults");
    }

    run_application(&args, &config)
}

fn run_application(args: &Args, config: &Config) -> Result<()> {
    let state_path = resolve_state_path(args, config)?;
    debug!(path = %state_path.display(), command = ?args.command, "running command");

    let mut state = PairState::load(&state_path)
        .with_context(|| format!("Failed to load pair from: {}", state_path.display()))?;

    let outcome = commands::execute(&args.command, &mut state, config)?;

    if outcome.changed {
        state.save(&state_path)?;
    }

    for line in &outcome.lines {
        println!("{line}");
    }

    Ok(())
}

fn resolve_state_path(args: &Args, config: &Config) -> Result<PathBuf> {
    if let Some(path) = &args.state {
        return Ok(path.clone());
    }
    if let Some(path) = &config.state_file {
        return Ok(path.clone());
    }
    store::default_state_path()
}

fn init_logging(verbose: bool, default_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    // A subscriber may already be installed when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
