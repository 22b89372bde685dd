//! Attack tables for move generation.
//!
//! Everything here is computed once and then only read. Leaper pieces use
//! plain per-square tables; rooks and bishops use magic bitboards (see
//! [`magic`]), and queens combine the two. `AttackTables::shared` hands out a
//! process-wide instance, but any `Position` can be given its own tables.

mod magic;
mod tables;

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Square};

pub(crate) use magic::{ray_walk, relevant_mask, subsets, Slider};
pub(crate) use tables::Line;

use magic::SliderTable;

static SHARED: Lazy<Arc<AttackTables>> = Lazy::new(|| Arc::new(AttackTables::new()));

/// Immutable square-indexed lookup tables for every piece kind.
pub struct AttackTables {
    king: [Bitboard; 64],
    knight: [Bitboard; 64],
    pawn_pushes: [[Bitboard; 64]; 2],
    pawn_attacks: [[Bitboard; 64]; 2],
    lines: [[Bitboard; 64]; 4],
    rook: SliderTable,
    bishop: SliderTable,
}

impl AttackTables {
    /// Build every table from scratch. This is the only exponential work in the
    /// crate; prefer [`AttackTables::shared`] unless a private instance is needed.
    #[must_use]
    pub fn new() -> Self {
        let tables = AttackTables {
            king: tables::king_table(),
            knight: tables::knight_table(),
            pawn_pushes: tables::pawn_push_table(),
            pawn_attacks: tables::pawn_attack_table(),
            lines: tables::line_table(),
            rook: SliderTable::build(Slider::Rook),
            bishop: SliderTable::build(Slider::Bishop),
        };
        log::debug!("attack tables initialised");
        tables
    }

    /// The process-wide instance, built on first use.
    #[must_use]
    pub fn shared() -> Arc<AttackTables> {
        Arc::clone(&SHARED)
    }

    #[inline]
    #[must_use]
    pub fn king(&self, sq: Square) -> Bitboard {
        self.king[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn knight(&self, sq: Square) -> Bitboard {
        self.knight[sq.index()]
    }

    /// Forward pushes ignoring occupancy (two squares from the starting rank).
    #[inline]
    #[must_use]
    pub fn pawn_pushes(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn_pushes[color.index()][sq.index()]
    }

    /// Diagonal capture squares ignoring occupancy.
    #[inline]
    #[must_use]
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn_attacks[color.index()][sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn rook(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.rook.attacks(sq, occupancy)
    }

    #[inline]
    #[must_use]
    pub fn bishop(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop.attacks(sq, occupancy)
    }

    #[inline]
    #[must_use]
    pub fn queen(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.rook(sq, occupancy) | self.bishop(sq, occupancy)
    }

    #[inline]
    pub(crate) fn line(&self, line: Line, sq: Square) -> Bitboard {
        self.lines[line as usize][sq.index()]
    }

    /// The line through both squares, if they share a rank, file or diagonal.
    pub(crate) fn shared_line(&self, a: Square, b: Square) -> Option<Line> {
        if a == b {
            return None;
        }
        Line::ALL.into_iter().find(|&line| self.line(line, a).contains(b))
    }

    /// Squares strictly between `a` and `b`; empty unless they are aligned.
    #[must_use]
    pub fn between(&self, a: Square, b: Square) -> Bitboard {
        let Some(line) = self.shared_line(a, b) else {
            return Bitboard::EMPTY;
        };
        let (from_a, from_b) = if line.is_orthogonal() {
            (self.rook(a, b.bitboard()), self.rook(b, a.bitboard()))
        } else {
            (self.bishop(a, b.bitboard()), self.bishop(b, a.bitboard()))
        };
        from_a & from_b & self.line(line, a)
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        AttackTables::new()
    }
}
