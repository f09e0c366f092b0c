//! Emit command - render the geometry as Rust source
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), write_output()

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexbits_core::{audit, geometry, render_source, LiteralStyle, RenderConfig};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct EmitArgs {
    /// Render options as JSON; flags below override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Hexadecimal literals
    #[arg(long)]
    pub hex: bool,

    /// Wrap everything in `pub mod NAME`
    #[arg(long, value_name = "NAME")]
    pub module: Option<String>,

    /// Only the mask constants, no functions
    #[arg(long)]
    pub constants_only: bool,

    /// Leave out `#[inline(always)]`
    #[arg(long)]
    pub no_inline: bool,

    /// Emit even if the audit fails
    #[arg(long)]
    pub force: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run emit command
pub fn run(args: EmitArgs) -> Result<()> {
    let config = build_config(&args)?;

    let report = audit();
    if !report.is_clean() {
        for failure in report.failures() {
            tracing::warn!("{}: {}", failure.name, failure.detail);
        }
        if !args.force {
            anyhow::bail!("geometry audit failed, refusing to emit (use --force to override)");
        }
    }

    let source = render_source(geometry(), &config);
    tracing::debug!("Rendered {} lines", source.lines().count());

    write_output(&source, args.output.as_ref())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Config file first, then command-line overrides
fn build_config(args: &EmitArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load render config: {}", path.display()))?,
        None => RenderConfig::default(),
    };

    if args.hex {
        config = config.with_literal(LiteralStyle::Hex);
    }
    if let Some(name) = &args.module {
        config = config.with_module(name.clone());
    }
    if args.constants_only {
        config = config.constants_only();
    }
    if args.no_inline {
        config.inline = false;
    }

    config.validate()?;
    Ok(config)
}

fn write_output(source: &str, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", source),
    }
    Ok(())
}
