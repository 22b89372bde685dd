//! Chess position state, attack tables and move legality.
//!
//! Uses bitboards throughout: one 64-bit set per piece identity, with magic
//! lookups for sliding pieces. Legality is decided by reversible probes on
//! the position itself.
//!
//! # Example
//! ```
//! use chess_position::board::{Piece, Position, Square};
//!
//! let mut position = Position::new();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! position.play(Piece::Pawn, e2, e4).unwrap();
//! assert_eq!(position.en_passant(), Some("e3".parse().unwrap()));
//! ```

mod attack_tables;
mod display;
mod error;
mod fen;
mod history;
mod make_unmake;
mod movegen;
mod request;
mod state;
mod trial;
mod types;

#[cfg(test)]
mod tests;

pub use attack_tables::AttackTables;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use history::{Capture, MoveHistory, MoveRecord, RecordKind};
pub use movegen::{AttackInfo, PieceMove};
pub use request::MoveRequest;
pub use state::{CheckStatus, Position, START_FEN};
pub use trial::Trial;
pub use types::{
    Bitboard, BitboardIter, CastleSide, CastlingRights, Color, ColoredPiece, Piece, Square,
};
