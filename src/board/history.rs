//! Move records and the undo stack.

use super::types::{Bitboard, CastlingRights, ColoredPiece, Square};

/// What kind of transition a record describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKind {
    /// A piece moved from one square to another
    Move,
    /// A piece was taken off its square with nothing placed (pin probe)
    Lift,
    /// Only the side to move changed (probe)
    Null,
}

/// A piece removed by a move, with the square it stood on. For en passant the
/// square differs from the mover's destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capture {
    pub piece: ColoredPiece,
    pub square: Square,
}

/// One applied transition, holding everything needed to reverse it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub(crate) kind: RecordKind,
    pub(crate) piece: Option<ColoredPiece>,
    /// `from | to` for moves, the origin bit for lifts, empty for null moves
    pub(crate) mask: Bitboard,
    pub(crate) capture: Option<Capture>,
    /// `rook_from | rook_to` when the move was a castle
    pub(crate) castle_rook: Option<Bitboard>,
    pub(crate) en_passant_before: Option<Square>,
    pub(crate) en_passant_after: Option<Square>,
    pub(crate) castling_before: CastlingRights,
    pub(crate) halfmove_before: u32,
    pub(crate) fullmove_before: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The moving (or lifted) piece; `None` for null moves
    #[must_use]
    pub fn piece(&self) -> Option<ColoredPiece> {
        self.piece
    }

    #[must_use]
    pub fn mask(&self) -> Bitboard {
        self.mask
    }

    #[must_use]
    pub fn capture(&self) -> Option<Capture> {
        self.capture
    }

    #[must_use]
    pub fn is_castle(&self) -> bool {
        self.castle_rook.is_some()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind == RecordKind::Null
    }

    /// The en passant target this move left behind
    #[must_use]
    pub fn en_passant_after(&self) -> Option<Square> {
        self.en_passant_after
    }
}

/// Last-in-first-out stack of applied records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        MoveHistory {
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }
}
