//! Export command - dump the geometry table as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexbits_core::geometry;

#[derive(Args)]
pub struct ExportArgs {
    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let table = geometry();
    let json = if args.compact {
        serde_json::to_string(table)?
    } else {
        table.to_json()?
    };

    tracing::info!(
        "Exporting {} edge masks and {} composites",
        table.edge_masks.len(),
        table.composites.len()
    );

    match &args.output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
