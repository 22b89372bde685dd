//! Error types for position operations.

use std::fmt;

use super::types::{ColoredPiece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few fields (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in placement field
    InvalidPiece { char: char },
    /// Placement field does not describe exactly eight ranks
    InvalidRankCount { found: usize },
    /// A rank does not describe exactly eight files
    InvalidFileCount { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { found: String },
    /// A color does not have exactly one king
    KingCount { color: String, found: u32 },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidFileCount { rank, files } => {
                write!(f, "Rank {rank} of FEN placement covers {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move request text that does not match `[kqrnbp] [a-h][1-8] [a-h][1-8]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Wrong number of whitespace-separated tokens
    WrongTokenCount { found: usize },
    /// Piece code is not one of k, q, r, n, b, p
    InvalidPiece { token: String },
    /// Square token is not a file letter followed by a rank digit
    InvalidSquare { token: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::WrongTokenCount { found } => write!(
                f,
                "Expected '<piece> <from> <to>' (3 tokens), found {found} tokens"
            ),
            MoveParseError::InvalidPiece { token } => {
                write!(f, "Invalid piece code '{token}', expected one of k, q, r, n, b, p")
            }
            MoveParseError::InvalidSquare { token } => {
                write!(f, "Invalid square '{token}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Why a requested move was rejected. The position is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square does not hold the named piece
    PieceNotFound { piece: ColoredPiece, square: Square },
    /// The destination holds a piece of the mover's own color
    DestinationOccupied { square: Square },
    /// The side to move is in check and the move leaves it in check
    CheckNotResolved,
    /// The destination is not reachable by a legal move of the piece
    NotLegal { piece: ColoredPiece, from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::PieceNotFound { piece, square } => {
                write!(f, "No {piece} on {square}")
            }
            MoveError::DestinationOccupied { square } => {
                write!(f, "Destination {square} holds a piece of the same color")
            }
            MoveError::CheckNotResolved => {
                write!(f, "King is in check and the move does not resolve it")
            }
            MoveError::NotLegal { piece, from, to } => {
                write!(f, "{piece} on {from} cannot legally move to {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
