//! Move representation with its undo snapshot.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingRights;
use super::piece::{Cell, Piece};
use super::square::Square;

/// State recorded by `make_move` so that `unmake_move` can restore the
/// position without recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct Undo {
    pub(crate) moved: Cell,
    pub(crate) captured: Cell,
    pub(crate) is_castle: bool,
    pub(crate) is_en_passant: bool,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

/// A chess move.
///
/// Moves come out of `Position::generate_legal_moves` already carrying the
/// undo snapshot recorded when the legality filter applied them. Calling
/// `Position::make_move` refreshes that snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) promotion: Option<Piece>,
    pub(crate) undo: Undo,
}

impl Move {
    /// Create a bare move; the snapshot is filled in when the move is made.
    #[must_use]
    pub fn new(from: Square, to: Square, promotion: Option<Piece>) -> Self {
        Move {
            from,
            to,
            promotion,
            undo: Undo::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<Piece> {
        self.promotion
    }

    /// Piece that stood on the from-square before the move was made
    #[inline]
    #[must_use]
    pub const fn moved(&self) -> Cell {
        self.undo.moved
    }

    /// Piece removed by the move, including an en passant victim
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Cell {
        self.undo.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        !self.undo.captured.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        self.undo.is_castle
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        self.undo.is_en_passant
    }

    /// True if this move and `other` describe the same from/to/promotion
    #[inline]
    #[must_use]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }
}

/// UCI long algebraic form, e.g. `e2e4` or `e7e8q`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}

/// Join moves into a space-separated UCI move history.
#[must_use]
pub fn format_line(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
