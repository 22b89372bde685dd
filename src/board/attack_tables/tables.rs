//! Precomputed attack tables for leaper pieces (knights, kings, pawns) and line masks.

use crate::board::types::{Bitboard, Color, Square};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (sq, slot) in Square::all().zip(attacks.iter_mut()) {
        *slot = deltas
            .iter()
            .filter_map(|&(dr, df)| sq.offset(dr, df))
            .fold(Bitboard::EMPTY, |acc, to| acc | to.bitboard());
    }
    attacks
}

pub(super) fn knight_table() -> [Bitboard; 64] {
    leaper_table(&KNIGHT_DELTAS)
}

pub(super) fn king_table() -> [Bitboard; 64] {
    leaper_table(&KING_DELTAS)
}

/// Diagonal capture squares per color. Edge files only reach one diagonal.
pub(super) fn pawn_attack_table() -> [[Bitboard; 64]; 2] {
    let mut attacks = [[Bitboard::EMPTY; 64]; 2];
    for color in Color::BOTH {
        let dir = color.pawn_direction();
        attacks[color.index()] = leaper_table(&[(dir, -1), (dir, 1)]);
    }
    attacks
}

/// Forward pushes per color: one step, or two from the starting rank.
/// The table ignores occupancy; the generator gates it on empty squares.
pub(super) fn pawn_push_table() -> [[Bitboard; 64]; 2] {
    let mut pushes = [[Bitboard::EMPTY; 64]; 2];
    for color in Color::BOTH {
        let dir = color.pawn_direction();
        for (sq, slot) in Square::all().zip(pushes[color.index()].iter_mut()) {
            let Some(one) = sq.offset(dir, 0) else {
                continue;
            };
            *slot = one.bitboard();
            if sq.rank() == color.pawn_start_rank() {
                if let Some(two) = sq.offset(2 * dir, 0) {
                    *slot |= two.bitboard();
                }
            }
        }
    }
    pushes
}

/// Index into the per-square line masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Line {
    Rank = 0,
    File = 1,
    Diagonal = 2,
    AntiDiagonal = 3,
}

impl Line {
    pub(crate) const ALL: [Line; 4] = [Line::Rank, Line::File, Line::Diagonal, Line::AntiDiagonal];

    const fn direction(self) -> (i8, i8) {
        match self {
            Line::Rank => (0, 1),
            Line::File => (1, 0),
            Line::Diagonal => (1, 1),
            Line::AntiDiagonal => (1, -1),
        }
    }

    #[must_use]
    pub(crate) const fn is_orthogonal(self) -> bool {
        matches!(self, Line::Rank | Line::File)
    }
}

/// Full rank, file, diagonal and anti-diagonal through every square, the square included.
pub(super) fn line_table() -> [[Bitboard; 64]; 4] {
    let mut lines = [[Bitboard::EMPTY; 64]; 4];
    for line in Line::ALL {
        let (dr, df) = line.direction();
        for (sq, slot) in Square::all().zip(lines[line as usize].iter_mut()) {
            let mut mask = sq.bitboard();
            for sign in [1, -1] {
                let mut cur = sq;
                while let Some(next) = cur.offset(dr * sign, df * sign) {
                    mask |= next.bitboard();
                    cur = next;
                }
            }
            *slot = mask;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_knight_corner_and_center() {
        let table = knight_table();
        assert_eq!(table[sq("a1").index()].popcount(), 2);
        assert_eq!(table[sq("d4").index()].popcount(), 8);
        assert!(table[sq("g1").index()].contains(sq("f3")));
    }

    #[test]
    fn test_king_edges() {
        let table = king_table();
        assert_eq!(table[sq("h8").index()].popcount(), 3);
        assert_eq!(table[sq("e1").index()].popcount(), 5);
        assert_eq!(table[sq("e4").index()].popcount(), 8);
    }

    #[test]
    fn test_pawn_attacks_on_edge_files() {
        let table = pawn_attack_table();
        let white = &table[Color::White.index()];
        let black = &table[Color::Black.index()];
        assert_eq!(white[sq("a2").index()], sq("b3").bitboard());
        assert_eq!(white[sq("h2").index()], sq("g3").bitboard());
        assert_eq!(black[sq("e7").index()], sq("d6").bitboard() | sq("f6").bitboard());
    }

    #[test]
    fn test_pawn_double_push_only_from_start_rank() {
        let table = pawn_push_table();
        let white = &table[Color::White.index()];
        let black = &table[Color::Black.index()];
        assert_eq!(white[sq("e2").index()], sq("e3").bitboard() | sq("e4").bitboard());
        assert_eq!(white[sq("e3").index()], sq("e4").bitboard());
        assert_eq!(black[sq("d7").index()], sq("d6").bitboard() | sq("d5").bitboard());
        assert_eq!(white[sq("e8").index()], Bitboard::EMPTY);
    }

    #[test]
    fn test_line_masks_contain_square() {
        let lines = line_table();
        let e4 = sq("e4");
        assert_eq!(lines[Line::Rank as usize][e4.index()], Bitboard::rank_mask(3));
        assert_eq!(lines[Line::File as usize][e4.index()], Bitboard::file_mask(4));
        assert!(lines[Line::Diagonal as usize][e4.index()].contains(sq("h7")));
        assert!(lines[Line::AntiDiagonal as usize][e4.index()].contains(sq("a8")));
        assert_eq!(lines[Line::Diagonal as usize][e4.index()].popcount(), 7);
    }
}
