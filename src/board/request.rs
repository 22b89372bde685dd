//! Text move requests: `<piece> <from> <to>`, e.g. `p e2 e4`.

use std::fmt;
use std::str::FromStr;

use super::error::MoveParseError;
use super::types::{Piece, Square};

/// A move as typed by a player. The piece code carries no color; it is
/// resolved against the side to move when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl FromStr for MoveRequest {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let [piece, from, to] = tokens.as_slice() else {
            return Err(MoveParseError::WrongTokenCount {
                found: tokens.len(),
            });
        };

        let mut chars = piece.chars();
        let piece = match (chars.next().and_then(Piece::from_char), chars.next()) {
            (Some(kind), None) => kind,
            _ => {
                return Err(MoveParseError::InvalidPiece {
                    token: piece.to_string(),
                })
            }
        };

        Ok(MoveRequest {
            piece,
            from: parse_square(from)?,
            to: parse_square(to)?,
        })
    }
}

fn parse_square(token: &str) -> Result<Square, MoveParseError> {
    let valid = token.len() == 2
        && token.as_bytes()[0].is_ascii_lowercase()
        && token.as_bytes()[1].is_ascii_digit();
    let parsed = if valid { token.parse().ok() } else { None };
    parsed.ok_or_else(|| MoveParseError::InvalidSquare {
        token: token.to_string(),
    })
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.piece.to_char(), self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pawn_push() {
        let request: MoveRequest = "p e2 e4".parse().unwrap();
        assert_eq!(request.piece, Piece::Pawn);
        assert_eq!(request.from, "e2".parse().unwrap());
        assert_eq!(request.to, "e4".parse().unwrap());
    }

    #[test]
    fn test_piece_code_is_case_insensitive() {
        let request: MoveRequest = "N g1 f3".parse().unwrap();
        assert_eq!(request.piece, Piece::Knight);
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        assert!("  q   d1  h5 ".parse::<MoveRequest>().is_ok());
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(
            "e2 e4".parse::<MoveRequest>(),
            Err(MoveParseError::WrongTokenCount { found: 2 })
        );
        assert_eq!(
            "".parse::<MoveRequest>(),
            Err(MoveParseError::WrongTokenCount { found: 0 })
        );
    }

    #[test]
    fn test_invalid_piece() {
        assert_eq!(
            "x e2 e4".parse::<MoveRequest>(),
            Err(MoveParseError::InvalidPiece {
                token: "x".to_string()
            })
        );
        assert!("pp e2 e4".parse::<MoveRequest>().is_err());
    }

    #[test]
    fn test_invalid_square() {
        for bad in ["p e9 e4", "p i2 e4", "p e2 4e", "p E2 e4", "p e2 e44"] {
            assert!(
                matches!(
                    bad.parse::<MoveRequest>(),
                    Err(MoveParseError::InvalidSquare { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_matches_input_grammar() {
        let request: MoveRequest = "K e1 g1".parse().unwrap();
        assert_eq!(request.to_string(), "k e1 g1");
    }
}
