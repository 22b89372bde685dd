use super::super::types::{Bitboard, Piece, Square};
use super::super::Position;

impl Position {
    /// Magic lookup for a sliding piece against the full occupancy.
    pub(crate) fn slider_attacks(&self, piece: Piece, from: Square) -> Bitboard {
        let occupied = self.occupied();
        match piece {
            Piece::Bishop => self.tables.bishop(from, occupied),
            Piece::Rook => self.tables.rook(from, occupied),
            Piece::Queen => self.tables.queen(from, occupied),
            Piece::Pawn | Piece::Knight | Piece::King => Bitboard::EMPTY,
        }
    }
}
