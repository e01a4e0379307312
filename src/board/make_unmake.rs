use super::error::MoveError;
use super::{Cell, Color, Move, Piece, Position, Square, Undo};

/// Rook from/to files for a castle landing on `king_to_file`
#[inline]
const fn castle_rook_files(king_to_file: usize) -> (usize, usize) {
    if king_to_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Position {
    /// Apply `mv` in place and record its undo snapshot into the move.
    ///
    /// Castling and en passant are recognised from the position itself, so
    /// a bare `Move::new` works as well as a generated one. Fails without
    /// touching the position if the from-square is empty.
    pub fn make_move(&mut self, mv: &mut Move) -> Result<(), MoveError> {
        let moved = self.cell(mv.from);
        let Cell::Occupied(color, piece) = moved else {
            return Err(MoveError::EmptySource { square: mv.from });
        };

        let mut undo = Undo {
            moved,
            captured: Cell::Empty,
            is_castle: false,
            is_en_passant: false,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };

        if piece == Piece::Pawn
            && Some(mv.to) == self.en_passant
            && mv.from.file() != mv.to.file()
            && self.is_empty(mv.to)
        {
            let victim = Square::at(mv.from.rank(), mv.to.file());
            undo.is_en_passant = true;
            undo.captured = self.cell(victim);
            self.set(victim, Cell::Empty);
        } else {
            undo.captured = self.cell(mv.to);
        }

        let landed = match mv.promotion {
            Some(promo) if piece == Piece::Pawn => Cell::Occupied(color, promo),
            _ => moved,
        };
        self.set(mv.from, Cell::Empty);
        self.set(mv.to, landed);

        if piece == Piece::King
            && mv.from == Square::at(color.back_rank(), 4)
            && mv.to.rank() == mv.from.rank()
            && mv.to.file().abs_diff(mv.from.file()) == 2
        {
            let (rook_from, rook_to) = castle_rook_files(mv.to.file());
            let rank = mv.from.rank();
            let rook = self.cell(Square::at(rank, rook_from));
            self.set(Square::at(rank, rook_from), Cell::Empty);
            self.set(Square::at(rank, rook_to), rook);
            undo.is_castle = true;
        }

        if piece == Piece::King {
            self.castling.remove_color(color);
        }
        self.castling.touch_corner(mv.from);
        self.castling.touch_corner(mv.to);

        self.en_passant = if piece == Piece::Pawn && mv.to.rank().abs_diff(mv.from.rank()) == 2 {
            Some(Square::at(
                (mv.from.rank() + mv.to.rank()) / 2,
                mv.from.file(),
            ))
        } else {
            None
        };

        if piece == Piece::Pawn || !undo.captured.is_empty() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opponent();

        mv.undo = undo;
        Ok(())
    }

    /// Exact inverse of `make_move`, driven entirely by the move's snapshot.
    pub fn unmake_move(&mut self, mv: &Move) {
        let undo = &mv.undo;

        self.side_to_move = self.side_to_move.opponent();
        self.fullmove_number = undo.fullmove_number;
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;

        if undo.is_castle {
            let (rook_from, rook_to) = castle_rook_files(mv.to.file());
            let rank = mv.from.rank();
            let rook = self.cell(Square::at(rank, rook_to));
            self.set(Square::at(rank, rook_to), Cell::Empty);
            self.set(Square::at(rank, rook_from), rook);
        }

        self.set(mv.from, undo.moved);
        if undo.is_en_passant {
            self.set(mv.to, Cell::Empty);
            self.set(Square::at(mv.from.rank(), mv.to.file()), undo.captured);
        } else {
            self.set(mv.to, undo.captured);
        }
    }
}
