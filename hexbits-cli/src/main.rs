//! HEXBITS CLI - Command-line interface
//!
//! Commands:
//! - emit: Render the mask constants and shift functions as Rust source
//! - export: Write the geometry table as JSON
//! - verify: Re-check every geometric property of the masks
//! - show: Draw named masks on the hex grid
//!
//! Logs go to stderr; stdout carries only the requested output.

mod emit;
mod export;
mod show;
mod verify;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexbits")]
#[command(about = "Bitboard geometry generator for the 91-cell hex board")]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render mask constants and shift functions as Rust source
    Emit(emit::EmitArgs),
    /// Write the geometry table as JSON
    Export(export::ExportArgs),
    /// Audit the derived masks; exits non-zero on any failure
    Verify(verify::VerifyArgs),
    /// Draw one or more named masks
    Show(show::ShowArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Emit(args) => emit::run(args),
        Commands::Export(args) => export::run(args),
        Commands::Verify(args) => verify::run(args),
        Commands::Show(args) => show::run(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
