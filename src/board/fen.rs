use std::str::FromStr;
use std::sync::Arc;

use super::attack_tables::AttackTables;
use super::error::FenError;
use super::types::{CastleSide, CastlingRights, Color, ColoredPiece, Piece, Square};
use super::Position;

impl Position {
    /// Parse a position from FEN using the shared attack tables.
    ///
    /// The first four fields are required; the halfmove clock and fullmove
    /// number default to 0 and 1. Each color must have exactly one king, and
    /// an en passant target must be on rank 6 with White to move, rank 3 with
    /// Black to move.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Self::with_tables(AttackTables::shared(), fen)
    }

    /// Parse a position from FEN on top of the given tables.
    pub fn with_tables(tables: Arc<AttackTables>, fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty(tables);
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        position.parse_placement(parts[0])?;

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        position.castling = parse_castling(parts[2])?;

        position.en_passant = match parts[3] {
            "-" => None,
            text => {
                let sq: Square = text.parse().map_err(|_| FenError::InvalidEnPassant {
                    found: text.to_string(),
                })?;
                let expected_rank = match position.side_to_move {
                    Color::White => 5,
                    Color::Black => 2,
                };
                if sq.rank() != expected_rank {
                    return Err(FenError::InvalidEnPassant {
                        found: text.to_string(),
                    });
                }
                Some(sq)
            }
        };

        if let Some(text) = parts.get(4) {
            position.halfmove_clock = parse_counter(text)?;
        }
        if let Some(text) = parts.get(5) {
            position.fullmove_number = parse_counter(text)?;
        }

        for color in Color::BOTH {
            let found = position
                .pieces_of(ColoredPiece::new(color, Piece::King))
                .popcount();
            if found != 1 {
                return Err(FenError::KingCount {
                    color: color.to_string(),
                    found,
                });
            }
        }

        position.refresh_check_status();
        Ok(position)
    }

    fn parse_placement(&mut self, placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    file += skip as usize;
                    continue;
                }
                let piece =
                    ColoredPiece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                self.set_piece(piece, Square::new(rank, file as u8));
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        Ok(())
    }

    /// Serialize the position as a six-field FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastleSide::King),
            'Q' => (Color::White, CastleSide::Queen),
            'k' => (Color::Black, CastleSide::King),
            'q' => (Color::Black, CastleSide::Queen),
            _ => return Err(FenError::InvalidCastling { char: c }),
        };
        rights.set(color, side);
    }
    Ok(rights)
}

fn parse_counter(text: &str) -> Result<u32, FenError> {
    text.parse().map_err(|_| FenError::InvalidCounter {
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}
