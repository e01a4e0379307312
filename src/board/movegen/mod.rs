mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Cell, Color, Move, Piece, Position, Square};

use sliders::{DIAGONALS, ORTHOGONALS};

impl Position {
    /// Every legal move for the side to move.
    ///
    /// Each returned move carries the undo snapshot recorded while it was
    /// tried. No ordering is guaranteed.
    #[must_use]
    pub fn generate_legal_moves(&self) -> Vec<Move> {
        let us = self.side_to_move;
        self.generate_pseudo_moves()
            .into_iter()
            .filter_map(|mut candidate| {
                let mut trial = *self;
                trial.make_move(&mut candidate).ok()?;
                (!trial.is_in_check(us)).then_some(candidate)
            })
            .collect()
    }

    /// Moves that obey piece movement rules but may leave the king in check
    pub(crate) fn generate_pseudo_moves(&self) -> Vec<Move> {
        let us = self.side_to_move;
        let mut moves = Vec::with_capacity(64);

        for from in Square::all() {
            let Some(piece) = self.friendly_piece(from, us) else {
                continue;
            };
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop => self.generate_slider_moves(from, &DIAGONALS, &mut moves),
                Piece::Rook => self.generate_slider_moves(from, &ORTHOGONALS, &mut moves),
                Piece::Queen => {
                    self.generate_slider_moves(from, &DIAGONALS, &mut moves);
                    self.generate_slider_moves(from, &ORTHOGONALS, &mut moves);
                }
                Piece::King => self.generate_king_moves(from, &mut moves),
            }
        }
        moves
    }

    #[inline]
    fn friendly_piece(&self, sq: Square, color: Color) -> Option<Piece> {
        match self.cell(sq) {
            Cell::Occupied(c, piece) if c == color => Some(piece),
            _ => None,
        }
    }

    /// Destination is on the board and not held by `color`
    #[inline]
    fn is_open_for(&self, sq: Square, color: Color) -> bool {
        self.cell(sq).color() != Some(color)
    }

    /// True if the side to move has no legal move and is in check
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && self.generate_legal_moves().is_empty()
    }

    /// True if the side to move has no legal move and is not in check
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && self.generate_legal_moves().is_empty()
    }
}
