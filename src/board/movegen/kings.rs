use super::super::{Cell, Color, Move, Piece, Position, Square};
use super::knights::KNIGHT_OFFSETS;
use super::sliders::{DIAGONALS, ORTHOGONALS};

/// King steps as (rank, file) deltas
pub(super) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.generate_leaper_moves(from, &KING_OFFSETS, moves);

        let us = self.side_to_move;
        let back_rank = us.back_rank();
        if from != Square::at(back_rank, 4) {
            return;
        }
        let them = us.opponent();
        let sq = |file: usize| Square::at(back_rank, file);

        if self.castling.has(us, true)
            && self.cell(sq(7)).is(us, Piece::Rook)
            && [5, 6].iter().all(|&f| self.is_empty(sq(f)))
            && [4, 5, 6].iter().all(|&f| !self.is_square_attacked(sq(f), them))
        {
            moves.push(Move::new(from, sq(6), None));
        }
        if self.castling.has(us, false)
            && self.cell(sq(0)).is(us, Piece::Rook)
            && [1, 2, 3].iter().all(|&f| self.is_empty(sq(f)))
            && [4, 3, 2].iter().all(|&f| !self.is_square_attacked(sq(f), them))
        {
            moves.push(Move::new(from, sq(2), None));
        }
    }

    /// Square of the first king of `color`, if there is one
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.cell(sq).is(color, Piece::King))
    }

    /// True if any piece of `attacker` attacks `square`
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let pawn_rank = -attacker.pawn_direction();
        for d_file in [-1, 1] {
            if let Some(from) = square.offset(pawn_rank, d_file) {
                if self.cell(from).is(attacker, Piece::Pawn) {
                    return true;
                }
            }
        }

        let leapers = [(&KNIGHT_OFFSETS, Piece::Knight), (&KING_OFFSETS, Piece::King)];
        for (offsets, piece) in leapers {
            for &(d_rank, d_file) in offsets {
                if let Some(from) = square.offset(d_rank, d_file) {
                    if self.cell(from).is(attacker, piece) {
                        return true;
                    }
                }
            }
        }

        let rays = [(&DIAGONALS, Piece::Bishop), (&ORTHOGONALS, Piece::Rook)];
        for (directions, slider) in rays {
            for &(d_rank, d_file) in directions {
                match self.first_on_ray(square, d_rank, d_file) {
                    Cell::Occupied(color, piece)
                        if color == attacker && (piece == slider || piece == Piece::Queen) =>
                    {
                        return true;
                    }
                    _ => {}
                }
            }
        }

        false
    }

    /// True if `color`'s king is attacked. A side without a king is never
    /// in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
