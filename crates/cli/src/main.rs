//! Clementine CLI - Terminal host for the cart engine.
//!
//! # Usage
//!
//! ```bash
//! # Interactive cart session over the built-in sample catalog
//! clem shell
//!
//! # Seed the cart from a JSON catalog file
//! clem shell --catalog items.json
//!
//! # Scripted walkthrough of the cart operations
//! clem demo
//! ```
//!
//! # Commands
//!
//! - `shell` - Interactive cart session (show, qty, remove, checkout)
//! - `demo` - Scripted walkthrough over the sample catalog

#![cfg_attr(not(test), forbid(unsafe_code))]
// Writing to the terminal is this binary's job.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "clem")]
#[command(author, version, about = "Clementine cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive cart session
    Shell {
        /// JSON catalog file to seed the cart from (defaults to the
        /// built-in sample catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Run a scripted walkthrough of the cart operations
    Demo,
}

fn main() {
    // Initialize tracing; default to info for our crates
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clementine_cli=info,clementine_cart=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Shell { catalog } => commands::shell::run(catalog.as_deref())?,
        Commands::Demo => commands::demo::run(),
    }
    Ok(())
}
