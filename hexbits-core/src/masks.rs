//! Edge masks for single-direction shifts
//!
//! A shift by a direction's fixed amount is only correct for cells whose
//! neighbour in that direction is still on the board. The cells where it
//! is not are the hexagon side(s) facing that direction, so each mask is a
//! union of named sides. The sides differ in shape (two run along a grid
//! row, two down a column, two along the `x - z` diagonal), which is why the
//! six masks are not mirror images of each other.

use crate::bitboard::Bitboard;
use crate::board::{index_of, CENTER_ROW, GRID_SIZE};
use crate::direction::Direction;

/// Cells `(x, z)` for `x` in `x_from..x_to`
const fn row(z: usize, x_from: usize, x_to: usize) -> Bitboard {
    let mut mask = 0;
    let mut x = x_from;
    while x < x_to {
        mask |= 1u128 << index_of(x, z);
        x += 1;
    }
    mask
}

/// Cells `(x, z)` for `z` in `z_from..z_to`
const fn column(x: usize, z_from: usize, z_to: usize) -> Bitboard {
    let mut mask = 0;
    let mut z = z_from;
    while z < z_to {
        mask |= 1u128 << index_of(x, z);
        z += 1;
    }
    mask
}

/// Cells `(z + offset, z)` for `z` in `z_from..z_to`; `offset` may be negative
const fn diagonal(offset: isize, z_from: usize, z_to: usize) -> Bitboard {
    let mut mask = 0;
    let mut z = z_from;
    while z < z_to {
        let x = z as isize + offset;
        mask |= 1u128 << index_of(x as usize, z);
        z += 1;
    }
    mask
}

const TOP_ROW: usize = GRID_SIZE - 1;
const RIGHT_COLUMN: usize = GRID_SIZE - 1;

/// Row 10, the north side
pub const TOP_SIDE: Bitboard = row(TOP_ROW, CENTER_ROW, GRID_SIZE);

/// Row 0 from column 5. Only `(5, 0)` is on the board; the rest of row 0
/// falls off the low end under any southward shift.
pub const BOTTOM_GUARD: Bitboard = row(0, CENTER_ROW, GRID_SIZE);

/// `x = z - 5` for the upper half
pub const UPPER_LEFT_SIDE: Bitboard = diagonal(-(CENTER_ROW as isize), CENTER_ROW, GRID_SIZE);

/// Column 10 for the upper half
pub const UPPER_RIGHT_SIDE: Bitboard = column(RIGHT_COLUMN, CENTER_ROW, GRID_SIZE);

/// Column 0 for the lower half
pub const LOWER_LEFT_SIDE: Bitboard = column(0, 0, CENTER_ROW + 1);

/// `x = z + 5` for the lower half
pub const LOWER_RIGHT_SIDE: Bitboard = diagonal(CENTER_ROW as isize, 0, CENTER_ROW + 1);

pub const SHIFT_WEST_MASK: Bitboard = UPPER_LEFT_SIDE | LOWER_LEFT_SIDE;
pub const SHIFT_EAST_MASK: Bitboard = UPPER_RIGHT_SIDE | LOWER_RIGHT_SIDE;
pub const SHIFT_NOWE_MASK: Bitboard = UPPER_LEFT_SIDE | TOP_SIDE;
pub const SHIFT_NOEA_MASK: Bitboard = UPPER_RIGHT_SIDE | TOP_SIDE;
pub const SHIFT_SOWE_MASK: Bitboard = LOWER_LEFT_SIDE | BOTTOM_GUARD;
pub const SHIFT_SOEA_MASK: Bitboard = LOWER_RIGHT_SIDE | BOTTOM_GUARD;

/// East mask without the lower-right diagonal; enough when the caller only
/// feeds cells from the upper half or ORs the result back into its input
pub const SHIFT_EAST_UNSAFE_MASK: Bitboard = UPPER_RIGHT_SIDE;

/// West mask without the upper-left diagonal
pub const SHIFT_WEST_UNSAFE_MASK: Bitboard = LOWER_LEFT_SIDE;

/// Cells that must be cleared before stepping in `direction`
pub const fn edge_mask(direction: Direction) -> Bitboard {
    match direction {
        Direction::West => SHIFT_WEST_MASK,
        Direction::East => SHIFT_EAST_MASK,
        Direction::NoWe => SHIFT_NOWE_MASK,
        Direction::NoEa => SHIFT_NOEA_MASK,
        Direction::SoWe => SHIFT_SOWE_MASK,
        Direction::SoEa => SHIFT_SOEA_MASK,
    }
}

/// Single-side mask, only defined along the east-west axis
pub const fn unsafe_mask(direction: Direction) -> Option<Bitboard> {
    match direction {
        Direction::East => Some(SHIFT_EAST_UNSAFE_MASK),
        Direction::West => Some(SHIFT_WEST_UNSAFE_MASK),
        _ => None,
    }
}
