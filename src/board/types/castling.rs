//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castle goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// Home square of the rook on this wing
    #[must_use]
    pub(crate) const fn rook_home(self, color: Color) -> Square {
        match self {
            CastleSide::King => Square::new(color.back_rank(), 7),
            CastleSide::Queen => Square::new(color.back_rank(), 0),
        }
    }

    /// Square the rook lands on after castling
    #[must_use]
    pub(crate) const fn rook_target(self, color: Color) -> Square {
        match self {
            CastleSide::King => Square::new(color.back_rank(), 5),
            CastleSide::Queen => Square::new(color.back_rank(), 3),
        }
    }

    /// Square the king lands on after castling
    #[must_use]
    pub(crate) const fn king_target(self, color: Color) -> Square {
        match self {
            CastleSide::King => Square::new(color.back_rank(), 6),
            CastleSide::Queen => Square::new(color.back_rank(), 2),
        }
    }

    /// Squares strictly between king and rook, which must be empty
    #[must_use]
    pub(crate) const fn gap(self, color: Color) -> Bitboard {
        let rank = color.back_rank() * 8;
        match self {
            CastleSide::King => Bitboard(0x60 << rank),
            CastleSide::Queen => Bitboard(0x0E << rank),
        }
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::King);
        self.remove(color, CastleSide::Queen);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::King) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queen) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::King) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queen) => CASTLE_BLACK_Q,
        }
    }
}

/// FEN field form: a subset of `KQkq`, or `-`
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (bit, ch) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_is_independent() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, CastleSide::Queen);
        assert!(rights.has(Color::White, CastleSide::King));
        assert!(!rights.has(Color::White, CastleSide::Queen));
        assert_eq!(rights.to_string(), "Kkq");
        rights.remove_color(Color::Black);
        assert_eq!(rights.to_string(), "K");
    }

    #[test]
    fn test_gap_squares() {
        assert_eq!(CastleSide::King.gap(Color::White), Bitboard(0x60));
        assert_eq!(CastleSide::Queen.gap(Color::Black), Bitboard(0x0E << 56));
        assert_eq!(CastleSide::Queen.king_target(Color::White).to_string(), "c1");
        assert_eq!(CastleSide::King.rook_target(Color::Black).to_string(), "f8");
    }
}
