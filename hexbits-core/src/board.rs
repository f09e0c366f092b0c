//! Hex board geometry on an 11x11 packed grid
//!
//! The board is a hexagon of side 6 embedded in a rectangle. Row `z = 5` is
//! the long middle row; rows above it lose cells on the left, rows below it
//! lose cells on the right:
//!
//! ```text
//! z=10           . . . . . X X X X X X
//! z=5       X X X X X X X X X X X
//! z=0  X X X X X X . . . . .
//! ```

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::direction::Direction;
use crate::error::{GeometryError, Result};

/// Width and height of the packed grid (also the row stride)
pub const GRID_SIZE: usize = 11;

/// Slots in the packed grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// The full-width row
pub const CENTER_ROW: usize = 5;

/// Cells along each side of the hexagon
pub const BOARD_SIDE: usize = 6;

/// Real board cells: 3 * s * (s - 1) + 1
pub const BOARD_CELLS: usize = 3 * BOARD_SIDE * (BOARD_SIDE - 1) + 1;

/// Grid slots that never hold a piece
pub const PADDING_CELLS: usize = GRID_CELLS - BOARD_CELLS;

/// Packed bit index of an in-grid cell. No range check.
#[inline(always)]
pub const fn index_of(x: usize, z: usize) -> usize {
    x + GRID_SIZE * z
}

/// Hexagon membership for an in-grid cell. No range check.
pub const fn in_hexagon(x: usize, z: usize) -> bool {
    let distance = z.abs_diff(CENTER_ROW);
    if z > CENTER_ROW {
        x >= distance
    } else if z < CENTER_ROW {
        x < GRID_SIZE - distance
    } else {
        true
    }
}

/// Union of every board cell
pub const VALID_FIELDS: Bitboard = valid_fields_mask();

pub const fn valid_fields_mask() -> Bitboard {
    let mut mask = 0;
    let mut z = 0;
    while z < GRID_SIZE {
        let mut x = 0;
        while x < GRID_SIZE {
            if in_hexagon(x, z) {
                mask |= 1u128 << index_of(x, z);
            }
            x += 1;
        }
        z += 1;
    }
    mask
}

/// Checked packed index of `(x, z)`
pub fn bit_index(x: usize, z: usize) -> Result<usize> {
    Cell::new(x, z).map(|cell| cell.index())
}

/// Whether `(x, z)` is a board cell; out-of-grid input is an error, not `false`
pub fn is_valid(x: usize, z: usize) -> Result<bool> {
    Cell::new(x, z).map(|cell| cell.is_on_board())
}

/// A slot of the packed grid, guaranteed to be inside 11x11
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    x: u8,
    z: u8,
}

impl Cell {
    pub fn new(x: usize, z: usize) -> Result<Self> {
        if x >= GRID_SIZE || z >= GRID_SIZE {
            return Err(GeometryError::OutOfGrid { x, z });
        }
        Ok(Self {
            x: x as u8,
            z: z as u8,
        })
    }

    pub fn from_index(index: usize) -> Result<Self> {
        if index >= GRID_CELLS {
            return Err(GeometryError::IndexOutOfRange(index));
        }
        Ok(Self {
            x: (index % GRID_SIZE) as u8,
            z: (index / GRID_SIZE) as u8,
        })
    }

    pub fn x(&self) -> usize {
        self.x as usize
    }

    pub fn z(&self) -> usize {
        self.z as usize
    }

    pub fn index(&self) -> usize {
        index_of(self.x(), self.z())
    }

    /// Single-bit bitboard for this cell
    pub fn bit(&self) -> Bitboard {
        1u128 << self.index()
    }

    pub fn is_on_board(&self) -> bool {
        in_hexagon(self.x(), self.z())
    }

    /// Grid neighbour one step away, `None` if it leaves the 11x11 grid.
    /// The neighbour may still be padding.
    pub fn neighbour(&self, direction: Direction) -> Option<Cell> {
        let (dx, dz) = direction.delta();
        let x = self.x as i16 + dx as i16;
        let z = self.z as i16 + dz as i16;
        if x < 0 || z < 0 {
            return None;
        }
        Cell::new(x as usize, z as usize).ok()
    }

    /// Hex distance. The `(1, 1)` diagonal is a single step, so deltas
    /// with matching signs cost their max and mixed signs cost their sum.
    pub fn distance_to(&self, other: Cell) -> usize {
        let dx = other.x as i16 - self.x as i16;
        let dz = other.z as i16 - self.z as i16;
        let d = if (dx >= 0) == (dz >= 0) {
            dx.abs().max(dz.abs())
        } else {
            dx.abs() + dz.abs()
        };
        d as usize
    }
}

/// The 91 board cells in index order
pub fn board_cells() -> impl Iterator<Item = Cell> {
    (0..GRID_CELLS)
        .filter_map(|i| Cell::from_index(i).ok())
        .filter(Cell::is_on_board)
}
