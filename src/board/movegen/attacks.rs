use super::super::types::{Bitboard, Color, ColoredPiece, Piece, Square};
use super::super::Position;

/// Everything one color attacks, and how it bears on the enemy king.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackInfo {
    /// Union of the attack sets of every piece, minus the attacker's own pieces
    pub attacks: Bitboard,
    /// Squares between each sliding checker and the king, plus the king square
    pub critical_attack_squares: Bitboard,
    /// Pieces attacking the enemy king
    pub critical_attackers: Bitboard,
    pub attacker_count: u32,
}

impl Position {
    /// Aggregate the attacks of every `attacker` piece and record which of
    /// them hit the opposing king.
    ///
    /// A sliding checker contributes the squares strictly between it and the
    /// king; knights and pawns contribute only the king square since their
    /// checks cannot be blocked. Kings never count as checkers.
    #[must_use]
    pub fn attacking_squares(&self, attacker: Color) -> AttackInfo {
        let mut info = AttackInfo::default();
        let king = self.king_square(attacker.opponent());

        for piece in Piece::ALL {
            let colored = ColoredPiece::new(attacker, piece);
            for from in self.pieces_of(colored) {
                let attacks = self.attacks_from(colored, from);
                info.attacks |= attacks;

                let Some(king) = king else { continue };
                if piece == Piece::King || !attacks.contains(king) {
                    continue;
                }
                info.critical_attackers |= from.bitboard();
                info.attacker_count += 1;
                info.critical_attack_squares |= king.bitboard();
                if piece.is_slider() {
                    info.critical_attack_squares |= self.tables.between(from, king);
                }
            }
        }

        info.attacks &= !self.same_color_as(attacker);
        info
    }

    /// Whether any `attacker` piece attacks `sq`.
    #[must_use]
    pub fn is_attacked(&self, sq: Square, attacker: Color) -> bool {
        self.attacking_squares(attacker).attacks.contains(sq)
    }
}
