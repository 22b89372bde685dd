pub mod board;

pub use board::{
    AttackTables, Bitboard, Color, ColoredPiece, MoveRecord, MoveRequest, Piece, Position, Square,
};
