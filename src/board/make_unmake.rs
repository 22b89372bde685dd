use super::history::{Capture, MoveRecord, RecordKind};
use super::types::{Bitboard, CastleSide, Color, ColoredPiece, Piece, Square};
use super::Position;

impl Position {
    fn blank_record(
        &self,
        kind: RecordKind,
        piece: Option<ColoredPiece>,
        mask: Bitboard,
    ) -> MoveRecord {
        MoveRecord {
            kind,
            piece,
            mask,
            capture: None,
            castle_rook: None,
            en_passant_before: self.en_passant,
            en_passant_after: self.en_passant,
            castling_before: self.castling,
            halfmove_before: self.halfmove_clock,
            fullmove_before: self.fullmove_number,
        }
    }

    /// Apply a move without any legality check and push its record.
    ///
    /// Handles en passant captures, castling (a king moving two files drags the
    /// rook from its corner), ordinary captures of whatever stands on the
    /// destination, the en passant target, castling rights and both counters.
    /// The side to move flips and check status is recomputed.
    pub fn apply_move(&mut self, piece: ColoredPiece, from: Square, to: Square) -> MoveRecord {
        let color = piece.color;
        let mask = from.bitboard() | to.bitboard();
        let mut record = self.blank_record(RecordKind::Move, Some(piece), mask);

        self.toggle(piece, mask);

        if piece.piece == Piece::Pawn && from.file() != to.file() && self.en_passant == Some(to) {
            let victim = ColoredPiece::new(color.opponent(), Piece::Pawn);
            if let Some(square) = to.offset(-color.pawn_direction(), 0) {
                if self.pieces_of(victim).contains(square) {
                    self.toggle(victim, square.bitboard());
                    record.capture = Some(Capture { piece: victim, square });
                }
            }
        }

        if record.capture.is_none() {
            if let Some(victim) = ColoredPiece::all()
                .find(|&other| other != piece && self.pieces_of(other).intersects(mask))
            {
                let hit = self.pieces_of(victim) & mask;
                self.toggle(victim, hit);
                record.capture = hit.lsb().map(|square| Capture { piece: victim, square });
            }
        }

        if piece.piece == Piece::King
            && from.rank() == to.rank()
            && from.file().abs_diff(to.file()) == 2
        {
            let side = if to.file() > from.file() {
                CastleSide::King
            } else {
                CastleSide::Queen
            };
            let rook = ColoredPiece::new(color, Piece::Rook);
            let home = side.rook_home(color);
            if self.pieces_of(rook).contains(home) {
                let rook_mask = home.bitboard() | side.rook_target(color).bitboard();
                self.toggle(rook, rook_mask);
                record.castle_rook = Some(rook_mask);
            }
        }

        self.en_passant = None;
        if piece.piece == Piece::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            self.en_passant = from.offset(color.pawn_direction(), 0);
        }
        record.en_passant_after = self.en_passant;

        match piece.piece {
            Piece::King => self.castling.remove_color(color),
            Piece::Rook => {
                for side in CastleSide::BOTH {
                    if from == side.rook_home(color) {
                        self.castling.remove(color, side);
                    }
                }
            }
            _ => {}
        }
        if let Some(capture) = record.capture {
            if capture.piece.piece == Piece::Rook {
                for side in CastleSide::BOTH {
                    if capture.square == side.rook_home(capture.piece.color) {
                        self.castling.remove(capture.piece.color, side);
                    }
                }
            }
        }

        if piece.piece == Piece::Pawn || record.capture.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        log::trace!("apply {piece} {from}{to} capture={:?}", record.capture);
        self.finish(record)
    }

    /// Take `piece` off `from` without placing it anywhere, then hand the move
    /// over. Only probes use this; the position is illegal until it is undone.
    pub(crate) fn lift_piece(&mut self, piece: ColoredPiece, from: Square) -> MoveRecord {
        let mask = from.bitboard();
        let record = self.blank_record(RecordKind::Lift, Some(piece), mask);
        self.toggle(piece, mask);
        self.finish(record)
    }

    /// Hand the move to the other side with no change on the board.
    pub fn apply_null_move(&mut self) -> MoveRecord {
        let record = self.blank_record(RecordKind::Null, None, Bitboard::EMPTY);
        self.finish(record)
    }

    fn finish(&mut self, record: MoveRecord) -> MoveRecord {
        self.history.push(record);
        self.side_to_move = self.side_to_move.opponent();
        self.refresh_check_status();
        record
    }

    /// Reverse the most recent record and return it.
    ///
    /// # Panics
    /// Panics if the history is empty; every undo must pair with an earlier
    /// apply, so this is a caller bug rather than a game condition.
    pub fn undo_move(&mut self) -> MoveRecord {
        let record = self
            .history
            .pop()
            .expect("undo_move called with an empty move history");

        self.en_passant = record.en_passant_before;
        self.castling = record.castling_before;
        self.halfmove_clock = record.halfmove_before;
        self.fullmove_number = record.fullmove_before;

        if let (RecordKind::Move | RecordKind::Lift, Some(piece)) = (record.kind, record.piece) {
            self.toggle(piece, record.mask);
            if let Some(rook_mask) = record.castle_rook {
                self.toggle(ColoredPiece::new(piece.color, Piece::Rook), rook_mask);
            }
        }
        if let Some(capture) = record.capture {
            self.set_piece(capture.piece, capture.square);
        }

        self.side_to_move = self.side_to_move.opponent();
        self.refresh_check_status();
        log::trace!("undo {:?} {:?}", record.kind, record.piece);
        record
    }
}

#[cfg(test)]
mod tests {
    use crate::board::history::RecordKind;
    use crate::board::types::{Color, ColoredPiece, Piece, Square};
    use crate::board::Position;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_lift_then_undo_restores_piece() {
        let mut position = Position::new();
        let before = position.clone();
        let knight = ColoredPiece::new(Color::White, Piece::Knight);
        let record = position.lift_piece(knight, sq("g1"));
        assert_eq!(record.kind(), RecordKind::Lift);
        assert!(!position.pieces_of(knight).contains(sq("g1")));
        assert_eq!(position.side_to_move(), Color::Black);
        position.undo_move();
        assert_eq!(position, before);
    }

    #[test]
    #[should_panic(expected = "empty move history")]
    fn test_undo_on_empty_history_panics() {
        let mut position = Position::new();
        position.undo_move();
    }
}
