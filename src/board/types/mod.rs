//! Core chess types.
//!
//! This module contains the value types used throughout the position engine:
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds, colors, and the twelve identities
//! - `Square` - board square index (a1 = 0 .. h8 = 63)
//! - `Bitboard` - 64-bit square set
//! - `CastlingRights` and `CastleSide` - castling state

mod bitboard;
mod castling;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSide, CastlingRights};
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;
