use super::super::types::{Bitboard, Color, ColoredPiece, Piece, Square};
use super::super::Position;

impl Position {
    /// Pushes and captures for a pawn of `color` on `from`.
    ///
    /// A push needs the square ahead empty (and for the double step, both
    /// squares). Captures land on opposing pieces or on the en passant target
    /// when `color` is the side to move.
    pub(crate) fn pawn_moves(&self, color: Color, from: Square) -> Bitboard {
        self.pawn_pushes(color, from) | self.pawn_captures(color, from)
    }

    fn pawn_pushes(&self, color: Color, from: Square) -> Bitboard {
        let occupied = self.occupied();
        match from.offset(color.pawn_direction(), 0) {
            Some(ahead) if !occupied.contains(ahead) => {
                self.tables.pawn_pushes(color, from) & !occupied
            }
            _ => Bitboard::EMPTY,
        }
    }

    fn pawn_captures(&self, color: Color, from: Square) -> Bitboard {
        let mut targets = self.opposite_color_of(color);
        if color == self.side_to_move {
            let victim = ColoredPiece::new(color.opponent(), Piece::Pawn);
            if let Some(ep) = self.en_passant.filter(|ep| {
                ep.offset(-color.pawn_direction(), 0)
                    .is_some_and(|behind| self.pieces_of(victim).contains(behind))
            }) {
                targets |= ep.bitboard();
            }
        }
        self.tables.pawn_attacks(color, from) & targets
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
    fn test_pushes_from_start_rank() {
        let position = Position::new();
        let moves = position.pawn_moves(Color::White, sq("e2"));
        assert_eq!(moves, sq("e3").bitboard() | sq("e4").bitboard());
    }

    #[test]
    fn test_blocked_pawn_cannot_push_or_capture_ahead() {
        let position = Position::from_fen("4k3/8/8/8/4p3/4P3/8/4K3 w - - 0 1").unwrap();
        assert!(position.pawn_moves(Color::White, sq("e3")).is_empty());
    }

    #[test]
    fn test_double_push_needs_far_square_empty() {
        let position = Position::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
        assert_eq!(position.pawn_moves(Color::White, sq("e2")), sq("e3").bitboard());
    }

    #[test]
    fn test_captures_include_en_passant_target() {
        let position = Position::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 2").unwrap();
        let moves = position.pawn_moves(Color::White, sq("d5"));
        assert!(moves.contains(sq("e6")));
        assert!(moves.contains(sq("d6")));
        assert!(!moves.contains(sq("c6")));
    }

    #[test]
    fn test_en_passant_target_ignored_for_side_not_to_move() {
        let position = Position::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 2").unwrap();
        assert!(!position.pawn_moves(Color::Black, sq("e5")).contains(sq("e6")));
    }

    #[test]
    fn test_en_passant_target_needs_pawn_behind_it() {
        let position = Position::from_fen("4k3/8/8/3P4/8/8/8/4K3 w - e6 0 2").unwrap();
        let moves = position.pawn_moves(Color::White, sq("d5"));
        assert_eq!(moves, sq("d6").bitboard());
    }
}
