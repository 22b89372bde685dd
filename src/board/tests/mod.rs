//! Position tests.
//!
//! Tests are organized into separate files by category:
//! - `fen.rs` - FEN parsing, validation and serialization
//! - `make_unmake.rs` - Apply/undo correctness and rule-state bookkeeping
//! - `legality.rs` - Pins, checks, en passant and castling legality
//! - `perft.rs` - Move tree node counts against known values
//! - `proptest.rs` - Property-based tests over random games


use crate::board::types::Square;

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}
