//! Callout CLI - block-tag renderer.
//!
//! Provides commands for:
//! - `render`: Render one block tag from a file or stdin
//! - `tags`: List the registered block tags

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::RenderArgs;
use output::Output;

/// Callout - accordion and admonition block tags.
#[derive(Parser)]
#[command(name = "callout", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a block tag body to HTML.
    Render(RenderArgs),
    /// List registered block tags.
    Tags,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN.
    // Logs go to stderr; stdout carries the rendered HTML.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Tags => commands::tags::execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
