//! Packed 121-cell bitboard helpers

/// One bit per grid slot, `x + 11 * z`. The top seven bits are headroom.
pub type Bitboard = u128;

pub const EMPTY: Bitboard = 0;

/// Every slot of the 11x11 packed grid, board or padding
pub const GRID_MASK: Bitboard = (1u128 << crate::board::GRID_CELLS) - 1;

/// Shift toward higher indices for positive amounts, lower for negative.
/// Bits pushed past either end of the `u128` are lost; a shift by 128 or
/// more (only `i8::MIN`) clears everything.
#[inline(always)]
pub const fn raw_shift(bitboard: Bitboard, amount: i8) -> Bitboard {
    let shifted = if amount >= 0 {
        bitboard.checked_shl(amount as u32)
    } else {
        bitboard.checked_shr(amount.unsigned_abs() as u32)
    };
    match shifted {
        Some(bits) => bits,
        None => EMPTY,
    }
}

/// Bits that `raw_shift(_, amount)` pushes out of the `u128`
pub const fn dropped_by(amount: i8) -> Bitboard {
    let distance = amount.unsigned_abs() as u32;
    if distance >= Bitboard::BITS {
        Bitboard::MAX
    } else if amount >= 0 {
        !(Bitboard::MAX >> distance)
    } else {
        (1u128 << distance) - 1
    }
}

/// Iterate over indices of set bits, lowest first
#[inline]
pub fn iter_ones(bitboard: Bitboard) -> BitIterator {
    BitIterator { bits: bitboard }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator {
    bits: Bitboard,
}

impl Iterator for BitIterator {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIterator {}

/// Serialize masks as `0x`-prefixed, zero-padded hex strings.
///
/// JSON consumers commonly parse numbers as doubles, which cannot hold
/// 121 significant bits.
pub mod hex_serde {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Bitboard;

    pub fn to_hex(mask: Bitboard) -> String {
        format!("{:#034x}", mask)
    }

    pub fn from_hex(s: &str) -> Option<Bitboard> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
        Bitboard::from_str_radix(digits, 16).ok()
    }

    pub fn serialize<S: Serializer>(mask: &Bitboard, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(*mask))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bitboard, D::Error> {
        let s = String::deserialize(deserializer)?;
        from_hex(&s).ok_or_else(|| de::Error::custom(format!("Invalid mask literal: {}", s)))
    }
}
