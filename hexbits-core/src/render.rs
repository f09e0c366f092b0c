//! Render the geometry table as Rust source or as a grid diagram
//!
//! Rendering is a pure formatting step over [`GeometryTable`]; nothing here
//! derives a mask.

use std::fmt::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::board::{in_hexagon, index_of, GRID_SIZE};
use crate::direction::Direction;
use crate::table::GeometryTable;

/// How mask literals are written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralStyle {
    #[default]
    Decimal,
    Hex,
}

/// Output options for [`render_source`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Integer type of every constant and function. Only `u128` is
    /// accepted: signed right shifts would sign-extend.
    pub int_type: String,
    pub literal: LiteralStyle,
    /// Wrap the constants in `pub mod <name> { ... }`
    pub module: Option<String>,
    /// Emit `shift_<dir>` and the two unsafe variants
    pub single_shifts: bool,
    /// Emit the 30 `shift_<src>_to_<dest>` functions
    pub composite_shifts: bool,
    /// Mark emitted functions `#[inline(always)]`
    pub inline: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            int_type: "u128".to_string(),
            literal: LiteralStyle::Decimal,
            module: None,
            single_shifts: true,
            composite_shifts: true,
            inline: true,
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RenderConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.int_type != "u128" {
            anyhow::bail!("int_type must be u128, got {}", self.int_type);
        }
        if let Some(name) = &self.module {
            let valid = name.chars().next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
                && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !valid {
                anyhow::bail!("module name is not a Rust identifier: {:?}", name);
            }
        }
        Ok(())
    }

    pub fn with_literal(mut self, literal: LiteralStyle) -> Self {
        self.literal = literal;
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Constants only, no functions
    pub fn constants_only(mut self) -> Self {
        self.single_shifts = false;
        self.composite_shifts = false;
        self
    }
}

fn literal(mask: Bitboard, config: &RenderConfig) -> String {
    match config.literal {
        LiteralStyle::Decimal => mask.to_string(),
        LiteralStyle::Hex => format!("{:#034x}", mask),
    }
}

fn edge_const(direction: Direction) -> String {
    format!("SHIFT_{}_MASK", direction.token().to_ascii_uppercase())
}

fn unsafe_const(direction: Direction) -> String {
    format!("SHIFT_{}_UNSAFE_MASK", direction.token().to_ascii_uppercase())
}

fn composite_const(src: Direction, dest: Direction) -> String {
    format!(
        "SHIFT_{}_TO_{}_MASK",
        src.token().to_ascii_uppercase(),
        dest.token().to_ascii_uppercase()
    )
}

/// Shift expression on `bitboard` masked by `mask_name`
fn shift_expr(mask_name: &str, amount: i8) -> String {
    let op = if amount >= 0 { "<<" } else { ">>" };
    format!("(bitboard & !{}) {} {}", mask_name, op, amount.unsigned_abs())
}

/// Rust source declaring every mask constant and, optionally, the shift
/// functions that use them. Output is deterministic for a given config.
pub fn render_source(table: &GeometryTable, config: &RenderConfig) -> String {
    let ty = config.int_type.as_str();
    let (indent, mut out) = match &config.module {
        Some(name) => ("    ", format!("pub mod {} {{\n", name)),
        None => ("", String::new()),
    };

    // write! into a String cannot fail
    let valid = literal(table.valid_fields, config);
    let _ = writeln!(out, "{indent}pub const VALID_FIELDS: {ty} = {valid};");
    for entry in &table.edge_masks {
        let _ = writeln!(
            out,
            "{indent}pub const {}: {ty} = {};",
            edge_const(entry.direction),
            literal(entry.mask, config)
        );
    }
    for entry in &table.unsafe_masks {
        let _ = writeln!(
            out,
            "{indent}pub const {}: {ty} = {};",
            unsafe_const(entry.direction),
            literal(entry.mask, config)
        );
    }
    out.push('\n');
    for entry in &table.composites {
        let _ = writeln!(
            out,
            "{indent}pub const {}: {ty} = {};",
            composite_const(entry.src, entry.dest),
            literal(entry.mask, config)
        );
    }

    if config.single_shifts {
        for entry in &table.edge_masks {
            let name = format!("shift_{}", entry.direction.token());
            let expr = shift_expr(&edge_const(entry.direction), entry.shift);
            render_fn(&mut out, config, &name, &expr);
        }
        for entry in &table.unsafe_masks {
            let name = format!("shift_{}_unsafe", entry.direction.token());
            let expr = shift_expr(&unsafe_const(entry.direction), entry.direction.shift());
            render_fn(&mut out, config, &name, &expr);
        }
    }

    if config.composite_shifts {
        for entry in &table.composites {
            let name = format!("shift_{}_to_{}", entry.src.token(), entry.dest.token());
            let expr = shift_expr(&composite_const(entry.src, entry.dest), entry.net_shift);
            render_fn(&mut out, config, &name, &expr);
        }
    }

    if config.module.is_some() {
        out.push_str("}\n");
    }
    out
}

fn render_fn(out: &mut String, config: &RenderConfig, name: &str, body: &str) {
    let indent = if config.module.is_some() { "    " } else { "" };
    let ty = config.int_type.as_str();
    out.push('\n');
    if config.inline {
        let _ = writeln!(out, "{indent}#[inline(always)]");
    }
    let _ = writeln!(out, "{indent}pub const fn {name}(bitboard: {ty}) -> {ty} {{");
    let _ = writeln!(out, "{indent}    {body}");
    let _ = writeln!(out, "{indent}}}");
}

/// Draw `mask` on the hexagon, row 10 first. `X` is a set board cell, `.` an
/// unset board cell, `#` a set padding slot; unset padding is blank.
pub fn render_diagram(mask: Bitboard) -> String {
    let mut out = String::new();
    for z in (0..GRID_SIZE).rev() {
        let line: String = (0..GRID_SIZE)
            .map(|x| {
                let set = mask >> index_of(x, z) & 1 == 1;
                match (in_hexagon(x, z), set) {
                    (true, true) => "X ",
                    (true, false) => ". ",
                    (false, true) => "# ",
                    (false, false) => "  ",
                }
            })
            .collect();
        // Shear rows so hex neighbours line up visually
        let offset = " ".repeat(GRID_SIZE - 1 - z);
        let _ = writeln!(out, "{}{}", offset, line.trim_end());
    }
    out
}
