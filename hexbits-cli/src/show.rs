//! Show command - draw named masks on the hex grid

use anyhow::{Context, Result};
use clap::Args;

use hexbits_core::{mask_by_name, render_diagram, Bitboard, VALID_FIELDS};

#[derive(Args)]
pub struct ShowArgs {
    /// Mask names: valid, west, east_unsafe, nowe_to_soea, ...
    #[arg(required = true)]
    pub masks: Vec<String>,
}

pub fn run(args: ShowArgs) -> Result<()> {
    for name in &args.masks {
        let mask = mask_by_name(name).with_context(|| format!("Cannot show mask '{}'", name))?;
        tracing::debug!("{} = {:#x}", name, mask);
        println!("{}", describe(name, mask));
    }
    Ok(())
}

fn describe(name: &str, mask: Bitboard) -> String {
    let on_board = (mask & VALID_FIELDS).count_ones();
    let padding = (mask & !VALID_FIELDS).count_ones();
    format!(
        "{} = {} ({:#034x})\n{} board cells, {} padding slots\n{}",
        name,
        mask,
        mask,
        on_board,
        padding,
        render_diagram(mask)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_valid_fields() {
        let text = describe("valid", VALID_FIELDS);
        let header = "valid = 2618206181369836630229216686713862207 \
                      (0x01f83f87f8ff9ffbffbff3fe3fc3f83f)\n";
        assert!(text.starts_with(header));
        assert!(text.contains("91 board cells, 0 padding slots"));
    }

    #[test]
    fn test_describe_counts_padding() {
        let text = describe("east", mask_by_name("east").unwrap());
        assert!(text.contains("11 board cells, 0 padding slots"));
        let text = describe("sowe", mask_by_name("sowe").unwrap());
        assert!(text.contains("padding slots"));
    }

    #[test]
    fn test_unknown_mask_errors() {
        let err = run(ShowArgs {
            masks: vec!["valid".to_string(), "sideways".to_string()],
        })
        .unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }
}
