//! Composite shifts: two hex steps fused into one masked shift
//!
//! `shift_<src>_to_<dest>` moves every bit one step away from `src` (that is,
//! toward `opposite(src)`, called `first` below) and then one step toward
//! `dest`. Instead of mask, shift, mask, shift it clears a single
//! precomputed mask and shifts once by the summed amount.
//!
//! A cell must be cleared when either step would leave the board: it sits on
//! `first`'s edge, or the cell one step along `first` sits on `dest`'s edge.
//! The second set is `dest`'s edge mask shifted back by one `first` step,
//! i.e. shifted toward `src`.
//!
//! The southward edge masks leave most of row 0 unguarded because a lone
//! southward shift drops those bits off the low end of the word. A fused
//! shift with a small net amount would keep them, so the first step is
//! guarded by [`blocked`], which clears those bits too.

use paste::paste;
use serde::{Deserialize, Serialize};

use crate::bitboard::{hex_serde, raw_shift, Bitboard, GRID_MASK};
use crate::direction::Direction;
use crate::error::{GeometryError, Result};
use crate::masks::edge_mask;
use crate::shift::blocked;

/// Ordered pairs of distinct directions
pub const COMPOSITE_COUNT: usize = 30;

/// Combined clear-mask for stepping `opposite(src)` then `dest`, within the
/// 121 grid slots. `src` and `dest` must differ.
pub const fn composite_mask(src: Direction, dest: Direction) -> Bitboard {
    let first = src.opposite();
    (blocked(first) | raw_shift(edge_mask(dest), src.shift())) & GRID_MASK
}

/// Summed shift of the two steps. Never zero for distinct `src`, `dest`.
pub const fn net_shift(src: Direction, dest: Direction) -> i8 {
    src.opposite().shift() + dest.shift()
}

#[inline(always)]
const fn apply(bitboard: Bitboard, mask: Bitboard, amount: i8) -> Bitboard {
    raw_shift(bitboard & !mask, amount)
}

/// One entry of the direction-to-direction transform table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeShift {
    pub src: Direction,
    pub dest: Direction,
    pub net_shift: i8,
    #[serde(with = "hex_serde")]
    pub mask: Bitboard,
}

impl CompositeShift {
    const fn derive(src: Direction, dest: Direction) -> Self {
        Self {
            src,
            dest,
            net_shift: net_shift(src, dest),
            mask: composite_mask(src, dest),
        }
    }

    pub fn new(src: Direction, dest: Direction) -> Result<Self> {
        if src == dest {
            return Err(GeometryError::RepeatedDirection(src));
        }
        Ok(Self::derive(src, dest))
    }

    /// Precomputed entry from [`COMPOSITE_SHIFTS`]
    pub fn lookup(src: Direction, dest: Direction) -> Result<&'static CompositeShift> {
        if src == dest {
            return Err(GeometryError::RepeatedDirection(src));
        }
        Ok(&COMPOSITE_SHIFTS[table_index(src, dest)])
    }

    /// The direction of the first step
    pub const fn first(&self) -> Direction {
        self.src.opposite()
    }

    #[inline(always)]
    pub const fn apply(&self, bitboard: Bitboard) -> Bitboard {
        apply(bitboard, self.mask, self.net_shift)
    }
}

/// Row-major over `Direction::ALL`, skipping the diagonal
const fn table_index(src: Direction, dest: Direction) -> usize {
    let s = src.index();
    let d = dest.index();
    s * 5 + if d < s { d } else { d - 1 }
}

/// All 30 composites ordered by `(src, dest)`
pub const COMPOSITE_SHIFTS: [CompositeShift; COMPOSITE_COUNT] = build_table();

const fn build_table() -> [CompositeShift; COMPOSITE_COUNT] {
    let mut table = [CompositeShift::derive(Direction::West, Direction::East); COMPOSITE_COUNT];
    let mut i = 0;
    while i < Direction::ALL.len() {
        let mut j = 0;
        while j < Direction::ALL.len() {
            if i != j {
                let (src, dest) = (Direction::ALL[i], Direction::ALL[j]);
                table[table_index(src, dest)] = CompositeShift::derive(src, dest);
            }
            j += 1;
        }
        i += 1;
    }
    table
}

/// Resolve a composite from two direction tokens
pub fn composite_by_name(src: &str, dest: &str) -> Result<&'static CompositeShift> {
    CompositeShift::lookup(src.parse()?, dest.parse()?)
}

/// A whole-board transform
pub type ShiftFn = fn(Bitboard) -> Bitboard;

macro_rules! composite_shifts {
    ($(($src:ident, $dest:ident)),* $(,)?) => {
        paste! {
            $(
                pub const [<SHIFT_ $src:upper _TO_ $dest:upper _MASK>]: Bitboard =
                    composite_mask(Direction::$src, Direction::$dest);

                #[inline(always)]
                pub const fn [<shift_ $src:lower _to_ $dest:lower>](
                    bitboard: Bitboard,
                ) -> Bitboard {
                    apply(
                        bitboard,
                        [<SHIFT_ $src:upper _TO_ $dest:upper _MASK>],
                        net_shift(Direction::$src, Direction::$dest),
                    )
                }
            )*

            /// Named transforms in table order, for callers that dispatch at runtime
            pub const COMPOSITE_FNS: [(Direction, Direction, ShiftFn); COMPOSITE_COUNT] = [
                $((
                    Direction::$src,
                    Direction::$dest,
                    [<shift_ $src:lower _to_ $dest:lower>] as ShiftFn,
                )),*
            ];
        }
    };
}

composite_shifts!(
    (West, East), (West, NoEa), (West, NoWe), (West, SoEa), (West, SoWe),
    (East, West), (East, NoEa), (East, NoWe), (East, SoEa), (East, SoWe),
    (NoEa, West), (NoEa, East), (NoEa, NoWe), (NoEa, SoEa), (NoEa, SoWe),
    (NoWe, West), (NoWe, East), (NoWe, NoEa), (NoWe, SoEa), (NoWe, SoWe),
    (SoEa, West), (SoEa, East), (SoEa, NoEa), (SoEa, NoWe), (SoEa, SoWe),
    (SoWe, West), (SoWe, East), (SoWe, NoEa), (SoWe, NoWe), (SoWe, SoEa),
);
