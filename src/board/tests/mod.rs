//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against known perft values
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Castling, en passant, promotion and check handling
//! - `proptest.rs` - Property-based tests

mod make_unmake;

use crate::board::{Move, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn find_move(position: &Position, uci: &str) -> Option<Move> {
    position
        .generate_legal_moves()
        .into_iter()
        .find(|m| m.to_string() == uci)
}

pub(super) fn has_move(position: &Position, uci: &str) -> bool {
    find_move(position, uci).is_some()
}
