use std::fmt;
use std::sync::Arc;

use super::attack_tables::AttackTables;
use super::history::MoveHistory;
use super::types::{Bitboard, CastleSide, CastlingRights, Color, ColoredPiece, Piece, Square};

/// Check information for the king of the side to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckStatus {
    pub(crate) in_check: bool,
    pub(crate) in_double_check: bool,
    pub(crate) critical_attack_squares: Bitboard,
    pub(crate) critical_attackers: Bitboard,
}

impl CheckStatus {
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[must_use]
    pub fn in_double_check(&self) -> bool {
        self.in_double_check
    }

    /// Squares between each sliding checker and the king, plus the king square
    /// whenever the king is attacked at all.
    #[must_use]
    pub fn critical_attack_squares(&self) -> Bitboard {
        self.critical_attack_squares
    }

    /// Enemy pieces currently attacking the king
    #[must_use]
    pub fn critical_attackers(&self) -> Bitboard {
        self.critical_attackers
    }

    /// Everything a blocking or capturing move may land on: the attack lines and
    /// the attackers themselves.
    #[must_use]
    pub fn critical_attack_map(&self) -> Bitboard {
        self.critical_attack_squares | self.critical_attackers
    }
}

/// A chess position: twelve piece bitboards plus the rule state around them.
#[derive(Clone)]
pub struct Position {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) check: CheckStatus,
    pub(crate) history: MoveHistory,
    pub(crate) tables: Arc<AttackTables>,
}

/// The standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// The standard starting position, using the shared attack tables.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty(AttackTables::shared());
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in (0u8..).zip(back_rank) {
            position.set_piece(ColoredPiece::new(Color::White, piece), Square::new(0, file));
            position.set_piece(ColoredPiece::new(Color::Black, piece), Square::new(7, file));
            position.set_piece(ColoredPiece::new(Color::White, Piece::Pawn), Square::new(1, file));
            position.set_piece(ColoredPiece::new(Color::Black, Piece::Pawn), Square::new(6, file));
        }
        position.castling = CastlingRights::all();
        position.refresh_check_status();
        position
    }

    pub(crate) fn empty(tables: Arc<AttackTables>) -> Self {
        Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            check: CheckStatus::default(),
            history: MoveHistory::new(),
            tables,
        }
    }

    pub(crate) fn set_piece(&mut self, piece: ColoredPiece, sq: Square) {
        self.pieces[piece.color.index()][piece.piece.index()] |= sq.bitboard();
    }

    /// Flip `mask` in one identity's bitboard.
    #[inline]
    pub(crate) fn toggle(&mut self, piece: ColoredPiece, mask: Bitboard) {
        self.pieces[piece.color.index()][piece.piece.index()] ^= mask;
    }

    #[must_use]
    pub fn white(&self) -> Bitboard {
        self.color_bitboard(Color::White)
    }

    #[must_use]
    pub fn black(&self) -> Bitboard {
        self.color_bitboard(Color::Black)
    }

    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.white() | self.black()
    }

    /// All pieces of `color`
    #[must_use]
    pub fn same_color_as(&self, color: Color) -> Bitboard {
        self.color_bitboard(color)
    }

    /// All pieces of the color opposing `color`
    #[must_use]
    pub fn opposite_color_of(&self, color: Color) -> Bitboard {
        self.color_bitboard(color.opponent())
    }

    fn color_bitboard(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    #[must_use]
    pub fn pieces_of(&self, piece: ColoredPiece) -> Bitboard {
        self.pieces[piece.color.index()][piece.piece.index()]
    }

    /// Whether `piece` stands on `sq`. Used to validate a move's origin.
    #[must_use]
    pub fn has_piece_at(&self, piece: ColoredPiece, sq: Square) -> bool {
        let found = self.pieces_of(piece).contains(sq);
        if !found {
            log::debug!("no {piece} on {sq}");
        }
        found
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        ColoredPiece::all().find(|&piece| self.pieces_of(piece).contains(sq))
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(ColoredPiece::new(color, Piece::King)).lsb()
    }

    /// The stored right, with the king and rook on their home squares and
    /// nothing standing between them.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        self.castling.has(color, side)
            && self
                .pieces_of(ColoredPiece::new(color, Piece::King))
                .contains(Square::new(color.back_rank(), 4))
            && self
                .pieces_of(ColoredPiece::new(color, Piece::Rook))
                .contains(side.rook_home(color))
            && !self.occupied().intersects(side.gap(color))
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn check_status(&self) -> CheckStatus {
        self.check
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.check.in_check
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[must_use]
    pub fn tables(&self) -> &AttackTables {
        &self.tables
    }

    /// Recompute check information for the side to move from scratch.
    pub(crate) fn refresh_check_status(&mut self) {
        let info = self.attacking_squares(self.side_to_move.opponent());
        self.check = CheckStatus {
            in_check: info.critical_attackers.any(),
            in_double_check: info.attacker_count > 1,
            critical_attack_squares: info.critical_attack_squares,
            critical_attackers: info.critical_attackers,
        };
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Two positions are equal when every piece of rule state and the history
/// agree; which attack tables they use does not matter.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
            && self.en_passant == other.en_passant
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.check == other.check
            && self.history == other.history
    }
}

impl Eq for Position {}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.to_fen())
            .field("check", &self.check)
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}
