//! Chess position model and rules.
//!
//! A `Position` is a 64-square mailbox plus side to move, castling rights,
//! en passant target and move clocks. It is a plain `Copy` value: legality
//! of a candidate move is checked by making it on a copy.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_bridge::board::Position;
//!
//! let position = Position::new();
//! let moves = position.generate_legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, LineError, MoveError, MoveParseError, SquareError};
pub use state::{Position, START_FEN};
pub use types::{format_line, CastlingRights, Cell, Color, Move, Piece, Square};

pub(crate) use types::{Undo, PROMOTION_PIECES};
