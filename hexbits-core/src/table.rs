//! Snapshot of every derived constant, for export and rendering

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::bitboard::{hex_serde, Bitboard};
use crate::board::VALID_FIELDS;
use crate::composite::{CompositeShift, COMPOSITE_SHIFTS};
use crate::direction::Direction;
use crate::error::{GeometryError, Result};
use crate::masks::{edge_mask, unsafe_mask};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeMask {
    pub direction: Direction,
    pub shift: i8,
    #[serde(with = "hex_serde")]
    pub mask: Bitboard,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsafeMask {
    pub direction: Direction,
    #[serde(with = "hex_serde")]
    pub mask: Bitboard,
}

/// All masks in dependency order: board, edges, composites
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryTable {
    #[serde(with = "hex_serde")]
    pub valid_fields: Bitboard,
    pub edge_masks: Vec<EdgeMask>,
    pub unsafe_masks: Vec<UnsafeMask>,
    pub composites: Vec<CompositeShift>,
}

impl GeometryTable {
    pub fn derive() -> Self {
        let edge_masks = Direction::ALL
            .iter()
            .map(|&direction| EdgeMask {
                direction,
                shift: direction.shift(),
                mask: edge_mask(direction),
            })
            .collect();

        let unsafe_masks = Direction::ALL
            .iter()
            .filter_map(|&direction| {
                unsafe_mask(direction).map(|mask| UnsafeMask { direction, mask })
            })
            .collect();

        Self {
            valid_fields: VALID_FIELDS,
            edge_masks,
            unsafe_masks,
            composites: COMPOSITE_SHIFTS.to_vec(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The table, derived on first use
pub fn geometry() -> &'static GeometryTable {
    static TABLE: OnceLock<GeometryTable> = OnceLock::new();
    TABLE.get_or_init(GeometryTable::derive)
}

/// Resolve `valid`, `<dir>`, `<dir>_unsafe` or `<src>_to_<dest>`, any case
pub fn mask_by_name(name: &str) -> Result<Bitboard> {
    let lowered = name.trim().to_ascii_lowercase();
    let unknown = || GeometryError::UnknownMask(name.to_string());

    if lowered == "valid" || lowered == "valid_fields" {
        return Ok(VALID_FIELDS);
    }
    if let Some((src, dest)) = lowered.split_once("_to_") {
        let src: Direction = src.parse()?;
        let dest: Direction = dest.parse()?;
        return CompositeShift::lookup(src, dest).map(|entry| entry.mask);
    }
    if let Some(dir) = lowered.strip_suffix("_unsafe") {
        let direction: Direction = dir.parse()?;
        return unsafe_mask(direction).ok_or_else(unknown);
    }
    lowered
        .parse::<Direction>()
        .map(edge_mask)
        .map_err(|_| unknown())
}
