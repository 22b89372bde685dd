use super::super::types::{Bitboard, CastleSide, Color, Square};
use super::super::Position;

impl Position {
    /// Adjacent squares plus castling destinations.
    ///
    /// Castling is offered only while the king is out of check and
    /// `can_castle` holds. Whether the king passes over an attacked square is
    /// not examined; the landing square itself is checked by the legality
    /// probe like any other king move.
    pub(crate) fn king_moves(&self, color: Color, from: Square) -> Bitboard {
        let mut moves = self.tables.king(from);
        let in_check = color == self.side_to_move && self.check.in_check;
        if !in_check {
            for side in CastleSide::BOTH {
                if self.can_castle(color, side) {
                    moves |= side.king_target(color).bitboard();
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use crate::board::types::{Color, Square};
    use crate::board::Position;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_castling_destinations_offered_when_clear() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let moves = position.king_moves(Color::White, sq("e1"));
        assert!(moves.contains(sq("g1")));
        assert!(moves.contains(sq("c1")));
    }

    #[test]
    fn test_no_castling_through_pieces() {
        let position = Position::new();
        let moves = position.king_moves(Color::White, sq("e1"));
        assert!(!moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));
    }

    #[test]
    fn test_no_castling_without_right() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1").unwrap();
        let moves = position.king_moves(Color::White, sq("e1"));
        assert!(moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));
    }

    #[test]
    fn test_no_castling_out_of_check() {
        let position = Position::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
        assert!(position.is_in_check());
        let moves = position.king_moves(Color::White, sq("e1"));
        assert!(!moves.contains(sq("g1")));
        assert!(!moves.contains(sq("c1")));
    }
}
