//! Set-at-a-time traversal built on the safe shifts
//!
//! Every function takes and returns whole bitboards, so a caller can expand
//! many cells per call. Inputs are expected to hold board cells only.

use crate::bitboard::Bitboard;
use crate::board::VALID_FIELDS;
use crate::composite::COMPOSITE_FNS;
use crate::direction::Direction;
use crate::shift::{shift, shift_east_unsafe, shift_nowe, shift_soea, shift_west_unsafe};

/// Board cells adjacent to any set bit, excluding the set bits themselves.
///
/// Four shifts instead of six: the east half is `east`, `nowe` and
/// `nowe(east) = noea`; the west half mirrors it through `soea`. The unsafe
/// east/west steps may spill onto padding, but a north-west step from that
/// padding lands on the true north-east neighbour, and the final AND drops
/// whatever spill is left.
#[inline]
pub const fn neighbours(bitboard: Bitboard) -> Bitboard {
    let shifted_east = shift_east_unsafe(bitboard) | bitboard;
    let east_half = shift_nowe(shifted_east) | shifted_east;
    let shifted_west = shift_west_unsafe(bitboard) | bitboard;
    let west_half = shift_soea(shifted_west) | shifted_west;
    ((east_half | west_half) ^ bitboard) & VALID_FIELDS
}

/// Connected component of `seed` within `within`
pub fn flood_fill(seed: Bitboard, within: Bitboard) -> Bitboard {
    let mut filled = seed & within;
    loop {
        let expanded = (filled | neighbours(filled)) & within;
        if expanded == filled {
            return filled;
        }
        filled = expanded;
    }
}

/// Whether every set bit of `cells` is reachable from every other through `cells`
pub fn is_connected(cells: Bitboard) -> bool {
    if cells == 0 {
        return true;
    }
    let seed = cells & cells.wrapping_neg();
    flood_fill(seed, cells) == cells
}

/// Cells swept by stepping from each origin bit in `direction` until a
/// blocker is hit (the blocker is included) or the board ends
pub fn ray(origin: Bitboard, direction: Direction, blockers: Bitboard) -> Bitboard {
    let mut swept = 0;
    let mut front = shift(origin, direction);
    while front != 0 {
        swept |= front;
        front = shift(front & !blockers, direction);
    }
    swept
}

/// First free cell along `direction` from each origin bit, hopping over
/// any run of occupied cells. An origin whose run reaches the edge yields nothing.
pub fn jump_over(origin: Bitboard, direction: Direction, occupied: Bitboard) -> Bitboard {
    let mut landed = 0;
    let mut cursor = shift(origin, direction);
    while cursor != 0 {
        landed |= cursor & !occupied;
        cursor = shift(cursor & occupied, direction);
    }
    landed
}

/// Board cells at hex distance exactly 2 from the set, via the composite shifts
pub fn second_ring(bitboard: Bitboard) -> Bitboard {
    let reach = COMPOSITE_FNS
        .iter()
        .fold(0, |acc, (_, _, step)| acc | step(bitboard));
    reach & VALID_FIELDS & !(bitboard | neighbours(bitboard))
}
