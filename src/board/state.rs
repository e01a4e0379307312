use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CastlingRights, Cell, Color, Piece, Square};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A complete chess position.
///
/// This is a plain value: copying it copies the whole board, which is how
/// candidate moves are tried and discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    #[cfg_attr(feature = "serde", serde(with = "cells_serde"))]
    pub(crate) cells: [Cell; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// The standard opening position
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            position.set(Square::at(0, file), Cell::Occupied(Color::White, *piece));
            position.set(Square::at(7, file), Cell::Occupied(Color::Black, *piece));
            position.set(Square::at(1, file), Cell::Occupied(Color::White, Piece::Pawn));
            position.set(Square::at(6, file), Cell::Occupied(Color::Black, Piece::Pawn));
        }

        position.castling = CastlingRights::all();
        position
    }

    /// An empty board, White to move, no rights, clocks at 0 and 1
    #[must_use]
    pub fn empty() -> Self {
        Position {
            cells: [Cell::Empty; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// The 64 square contents, a1 first
    #[inline]
    #[must_use]
    pub fn cells(&self) -> [Cell; 64] {
        self.cells
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.index()] = cell;
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_empty()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// True once a hundred plies have passed without a pawn move or capture
    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Board diagram, rank 8 first, `.` for empty squares
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                write!(f, " {}", self.cell(Square::at(rank, file)).to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(feature = "serde")]
mod cells_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Cell;

    pub(super) fn serialize<S: Serializer>(cells: &[Cell; 64], s: S) -> Result<S::Ok, S::Error> {
        cells.as_slice().serialize(s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[Cell; 64], D::Error> {
        let cells = Vec::<Cell>::deserialize(d)?;
        let found = cells.len();
        cells
            .try_into()
            .map_err(|_| D::Error::custom(format!("expected 64 cells, found {found}")))
    }
}
