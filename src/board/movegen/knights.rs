use super::super::types::{Bitboard, Square};
use super::super::Position;

impl Position {
    #[inline]
    pub(crate) fn knight_attacks(&self, from: Square) -> Bitboard {
        self.tables.knight(from)
    }
}
