//! Butler CLI - text utilities.
//!
//! Provides commands for:
//! - `escape`: Escape HTML-significant characters
//! - `fold`: Fold accented Latin letters to ASCII
//! - `slug`: Build a URL slug
//! - `markdown`: Render markdown to sanitized HTML
//! - `tab`: Normalize a tab identifier
//! - `classify`: Classify and dispatch an error message

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ClassifyArgs, EscapeArgs, FoldArgs, MarkdownArgs, SlugArgs, TabArgs};
use output::Output;

/// Butler - text utilities.
#[derive(Parser)]
#[command(name = "butler", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover butler.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Escape HTML-significant characters.
    Escape(EscapeArgs),
    /// Replace accented letters with ASCII.
    Fold(FoldArgs),
    /// Convert text to a URL slug.
    Slug(SlugArgs),
    /// Render markdown to sanitized HTML.
    Markdown(MarkdownArgs),
    /// Map a tab alias to its canonical name.
    Tab(TabArgs),
    /// Classify an error message and dispatch it.
    Classify(ClassifyArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to ERROR
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config_path = cli.config.as_deref();
    let result = match cli.command {
        Commands::Escape(args) => args.execute(),
        Commands::Fold(args) => args.execute(),
        Commands::Slug(args) => args.execute(config_path),
        Commands::Markdown(args) => args.execute(config_path),
        Commands::Tab(args) => args.execute(),
        Commands::Classify(args) => args.execute(config_path),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
