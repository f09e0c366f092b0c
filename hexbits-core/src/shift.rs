//! Single-step masked shifts

use crate::bitboard::{dropped_by, raw_shift, Bitboard, GRID_MASK};
use crate::direction::Direction;
use crate::masks;

/// Step every bit one cell in `direction`; bits that would leave the board vanish
#[inline(always)]
pub const fn shift(bitboard: Bitboard, direction: Direction) -> Bitboard {
    raw_shift(bitboard & !masks::edge_mask(direction), direction.shift())
}

/// Cells a `direction` step removes: its edge mask plus row 0 bits that a
/// southward step pushes below bit 0. Limited to the 121 grid slots.
pub const fn blocked(direction: Direction) -> Bitboard {
    (masks::edge_mask(direction) | dropped_by(direction.shift())) & GRID_MASK
}

#[inline(always)]
pub const fn shift_west(bitboard: Bitboard) -> Bitboard {
    (bitboard & !masks::SHIFT_WEST_MASK) >> 1
}

#[inline(always)]
pub const fn shift_east(bitboard: Bitboard) -> Bitboard {
    (bitboard & !masks::SHIFT_EAST_MASK) << 1
}

#[inline(always)]
pub const fn shift_noea(bitboard: Bitboard) -> Bitboard {
    (bitboard & !masks::SHIFT_NOEA_MASK) << 12
}

#[inline(always)]
pub const fn shift_nowe(bitboard: Bitboard) -> Bitboard {
    (bitboard & !masks::SHIFT_NOWE_MASK) << 11
}

#[inline(always)]
pub const fn shift_soea(bitboard: Bitboard) -> Bitboard {
    (bitboard & !masks::SHIFT_SOEA_MASK) >> 11
}

#[inline(always)]
pub const fn shift_sowe(bitboard: Bitboard) -> Bitboard {
    (bitboard & !masks::SHIFT_SOWE_MASK) >> 12
}

/// East step guarding only the upper-right side.
///
/// Cells on the lower-right diagonal wrap onto padding, never onto a board
/// cell, so callers that AND with `VALID_FIELDS` afterwards can use this.
#[inline(always)]
pub const fn shift_east_unsafe(bitboard: Bitboard) -> Bitboard {
    (bitboard & !masks::SHIFT_EAST_UNSAFE_MASK) << 1
}

/// West step guarding only the lower-left side
#[inline(always)]
pub const fn shift_west_unsafe(bitboard: Bitboard) -> Bitboard {
    (bitboard & !masks::SHIFT_WEST_UNSAFE_MASK) >> 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::iter_ones;
    use crate::board::{board_cells, Cell, VALID_FIELDS};

    #[test]
    fn test_named_shifts_match_generic() {
        let named: [(Direction, fn(Bitboard) -> Bitboard); 6] = [
            (Direction::West, shift_west),
            (Direction::East, shift_east),
            (Direction::NoEa, shift_noea),
            (Direction::NoWe, shift_nowe),
            (Direction::SoEa, shift_soea),
            (Direction::SoWe, shift_sowe),
        ];
        for (d, f) in named {
            assert_eq!(f(VALID_FIELDS), shift(VALID_FIELDS, d), "{d}");
            for cell in board_cells() {
                assert_eq!(f(cell.bit()), shift(cell.bit(), d), "{d}");
            }
        }
    }

    #[test]
    fn test_no_wraparound_leakage() {
        for d in Direction::ALL {
            let shifted = shift(VALID_FIELDS, d);
            assert_eq!(shifted & !VALID_FIELDS, 0, "{d} leaked onto padding");
        }
    }

    #[test]
    fn test_single_cell_lands_on_hex_neighbour() {
        for d in Direction::ALL {
            for cell in board_cells() {
                let expected = match cell.neighbour(d) {
                    Some(n) if n.is_on_board() => n.bit(),
                    _ => 0,
                };
                assert_eq!(shift(cell.bit(), d), expected, "{d} from ({}, {})", cell.x(), cell.z());
            }
        }
    }

    #[test]
    fn test_round_trip_away_from_edge() {
        for d in Direction::ALL {
            let interior = VALID_FIELDS & !blocked(d);
            let back = shift(shift(VALID_FIELDS, d), d.opposite());
            assert_eq!(back & interior, interior, "{d}");
            assert_eq!(shift(shift(interior, d), d.opposite()), interior, "{d}");
        }
    }

    #[test]
    fn test_blocked_is_exactly_the_edge_cells() {
        for d in Direction::ALL {
            for cell in board_cells() {
                let leaves = !matches!(cell.neighbour(d), Some(n) if n.is_on_board());
                let is_blocked = blocked(d) & cell.bit() != 0;
                assert_eq!(is_blocked, leaves, "{d} at ({}, {})", cell.x(), cell.z());
            }
        }
    }

    #[test]
    fn test_blocked_ignores_headroom() {
        for d in Direction::ALL {
            assert_eq!(blocked(d) & !GRID_MASK, 0, "{d}");
        }
    }

    #[test]
    fn test_east_wrap_is_blocked() {
        // (10, 5) must not wrap to (0, 6)
        let edge = Cell::new(10, 5).unwrap().bit();
        assert_eq!(shift_east(edge), 0);
        // (0, 3) must not wrap to (10, 2)
        let edge = Cell::new(0, 3).unwrap().bit();
        assert_eq!(shift_west(edge), 0);
    }

    #[test]
    fn test_unsafe_shifts_only_spill_onto_padding() {
        let east = shift_east_unsafe(VALID_FIELDS);
        let west = shift_west_unsafe(VALID_FIELDS);
        assert_eq!(east & VALID_FIELDS, shift_east(VALID_FIELDS));
        assert_eq!(west & VALID_FIELDS, shift_west(VALID_FIELDS));
        assert_ne!(east & !VALID_FIELDS, 0);
        for i in iter_ones(west & !VALID_FIELDS) {
            assert!(!Cell::from_index(i).unwrap().is_on_board());
        }
    }
}
