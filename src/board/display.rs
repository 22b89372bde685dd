use std::fmt;

use super::types::Square;
use super::Position;

/// Fixed-width grid, rank 8 at the top, followed by the rule state.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square::new(rank, file))
                    .map_or('.', |piece| piece.to_fen_char());
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        writeln!(f, "Side to move: {}", self.side_to_move)?;
        match self.en_passant {
            Some(sq) => writeln!(f, "En passant: {sq}")?,
            None => writeln!(f, "En passant: -")?,
        }
        writeln!(f, "Castling: {}", self.castling)?;
        writeln!(f, "Halfmove clock: {}", self.halfmove_clock)?;
        write!(f, "Fullmove number: {}", self.fullmove_number)?;
        if self.check.in_check {
            write!(f, "\n{} king in check.", self.side_to_move)?;
        }
        Ok(())
    }
}
