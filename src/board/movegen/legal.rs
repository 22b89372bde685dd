use super::super::error::MoveError;
use super::super::history::MoveRecord;
use super::super::request::MoveRequest;
use super::super::types::{Bitboard, ColoredPiece, Piece, Square};
use super::super::Position;

/// A fully specified legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceMove {
    pub piece: ColoredPiece,
    pub from: Square,
    pub to: Square,
}

impl Position {
    /// Legal destinations for `piece` standing on `from`.
    ///
    /// Empty unless `piece` belongs to the side to move and actually stands on
    /// `from`. Under double check only the king may move. While in check every
    /// destination is played out and kept only if the king ends up safe, which
    /// covers blocks, captures of the checker and en passant alike. Otherwise
    /// the pin probe restricts the piece, and an en passant capture is played
    /// out as well. King destinations are always played out.
    pub fn legal_moves_for(&mut self, piece: ColoredPiece, from: Square) -> Bitboard {
        if piece.color != self.side_to_move || !self.pieces_of(piece).contains(from) {
            return Bitboard::EMPTY;
        }
        if self.check.in_double_check && piece.piece != Piece::King {
            return Bitboard::EMPTY;
        }

        let pseudo = self.pseudo_moves(piece, from);
        if pseudo.is_empty() {
            return pseudo;
        }
        if piece.piece == Piece::King {
            return self.keep_safe(piece, from, pseudo);
        }

        if self.check.in_check {
            return self.keep_safe(piece, from, pseudo);
        }
        let moves = pseudo & self.pin_mask(piece, from);
        if piece.piece == Piece::Pawn {
            if let Some(ep) = self.en_passant.filter(|&ep| moves.contains(ep)) {
                if !self.move_keeps_king_safe(piece, from, ep) {
                    return moves & !ep.bitboard();
                }
            }
        }
        moves
    }

    /// Lift the piece, hand the move over and back, and see whether the king
    /// is exposed. A pinned piece may only land on the exposed attack line.
    fn pin_mask(&mut self, piece: ColoredPiece, from: Square) -> Bitboard {
        let mut trial = self.trial();
        trial.lift_piece(piece, from);
        trial.apply_null_move();
        if trial.check.in_check {
            trial.check.critical_attack_map()
        } else {
            Bitboard::ALL
        }
    }

    /// Play the move out and report whether the mover's king is out of check
    /// afterwards. The position is restored before returning.
    ///
    /// Kings are never checkers, so a king stepping next to the enemy king is
    /// rejected up front.
    pub fn move_keeps_king_safe(&mut self, piece: ColoredPiece, from: Square, to: Square) -> bool {
        if piece.piece == Piece::King {
            let enemy_king = self.pieces_of(ColoredPiece::new(piece.color.opponent(), Piece::King));
            if self.tables.king(to).intersects(enemy_king) {
                return false;
            }
        }
        let mut trial = self.trial();
        trial.apply_move(piece, from, to);
        trial.apply_null_move();
        !trial.check.in_check
    }

    fn keep_safe(&mut self, piece: ColoredPiece, from: Square, candidates: Bitboard) -> Bitboard {
        candidates
            .iter()
            .filter(|&to| self.move_keeps_king_safe(piece, from, to))
            .fold(Bitboard::EMPTY, |acc, to| acc | to.bitboard())
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&mut self) -> Vec<PieceMove> {
        let color = self.side_to_move;
        let mut moves = Vec::new();
        for kind in Piece::ALL {
            let piece = ColoredPiece::new(color, kind);
            for from in self.pieces_of(piece) {
                for to in self.legal_moves_for(piece, from) {
                    moves.push(PieceMove { piece, from, to });
                }
            }
        }
        moves
    }

    /// Validate and apply a move of the side to move's `kind` piece.
    ///
    /// On rejection the position is exactly as it was before the call.
    pub fn play(&mut self, kind: Piece, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let piece = ColoredPiece::new(self.side_to_move, kind);
        if let Err(err) = self.check_move(piece, from, to) {
            log::debug!("rejected {piece} {from}{to}: {err}");
            return Err(err);
        }
        Ok(self.apply_move(piece, from, to))
    }

    /// [`Position::play`] for a parsed request.
    pub fn play_request(&mut self, request: &MoveRequest) -> Result<MoveRecord, MoveError> {
        self.play(request.piece, request.from, request.to)
    }

    fn check_move(&mut self, piece: ColoredPiece, from: Square, to: Square) -> Result<(), MoveError> {
        if !self.has_piece_at(piece, from) {
            return Err(MoveError::PieceNotFound {
                piece,
                square: from,
            });
        }
        if self.same_color_as(piece.color).contains(to) {
            return Err(MoveError::DestinationOccupied { square: to });
        }
        if self.check.in_check && !self.move_keeps_king_safe(piece, from, to) {
            return Err(MoveError::CheckNotResolved);
        }
        if !self.legal_moves_for(piece, from).contains(to) {
            return Err(MoveError::NotLegal { piece, from, to });
        }
        Ok(())
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            self.apply_move(mv.piece, mv.from, mv.to);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
