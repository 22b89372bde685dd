//! Pseudo-legal move generation, attack aggregation and legality filtering.
//!
//! Every generator answers with a destination bitboard for one piece on one
//! square. Legality is layered on top in `legal.rs` using reversible probes.

mod attacks;
mod kings;
mod knights;
mod legal;
mod pawns;
mod sliders;

pub use attacks::AttackInfo;
pub use legal::PieceMove;

use super::types::{Bitboard, ColoredPiece, Piece, Square};
use super::Position;

impl Position {
    /// Squares `piece` on `from` attacks under the current occupancy.
    ///
    /// Pawns report their diagonals only; pushes never attack. Own pieces are
    /// not masked out, so a defended piece still shows up as attacked.
    #[must_use]
    pub fn attacks_from(&self, piece: ColoredPiece, from: Square) -> Bitboard {
        match piece.piece {
            Piece::Pawn => self.tables.pawn_attacks(piece.color, from),
            Piece::Knight => self.knight_attacks(from),
            Piece::King => self.tables.king(from),
            Piece::Bishop | Piece::Rook | Piece::Queen => self.slider_attacks(piece.piece, from),
        }
    }

    /// Destinations for `piece` on `from` obeying movement rules and
    /// same-color blocking only.
    #[must_use]
    pub fn pseudo_moves(&self, piece: ColoredPiece, from: Square) -> Bitboard {
        let moves = match piece.piece {
            Piece::Pawn => self.pawn_moves(piece.color, from),
            Piece::Knight => self.knight_attacks(from),
            Piece::King => self.king_moves(piece.color, from),
            Piece::Bishop | Piece::Rook | Piece::Queen => self.slider_attacks(piece.piece, from),
        };
        moves & !self.same_color_as(piece.color)
    }
}
