//! # Quill - A Plain-Text Editor
//!
//! A nav bar with File/Edit/Format/Help menus, an editor with a line-number
//! gutter, and a filename field. Files are saved to and opened from the
//! local disk.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # Open a file at startup
//! cargo run -- notes.txt
//!
//! # Use a specific config file, with debug logging
//! cargo run -- --config ./quill.toml -vv
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quill_core::Config;
use quill_ui::{run, Flags};

/// Quill - a plain-text editor built in Rust
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Loads the config named on the command line, or the user's default one.
///
/// An explicit `--config` must load; the default location falls back to
/// built-in settings.
fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load()),
    }
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides the -v level when set
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(args.verbose).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting Quill v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_ref())?;

    // Build launch flags
    let flags = Flags {
        config,
        file: args.file,
    };

    // Run the application
    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
