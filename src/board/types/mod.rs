//! Core chess types.
//!
//! - `Piece`, `Color` and `Cell` - piece kinds, colors and square contents
//! - `Square` - board square as a 0-63 index
//! - `Move` - move with its undo snapshot
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{format_line, Move};
pub use piece::{Cell, Color, Piece};
pub use square::Square;

pub(crate) use moves::Undo;
pub(crate) use piece::PROMOTION_PIECES;
