use super::super::{Cell, Move, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let dir = us.pawn_direction();

        let Some(forward) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(forward) {
            self.push_pawn_move(from, forward, moves);
            if from.rank() == us.pawn_start_rank() {
                if let Some(double) = forward.offset(dir, 0) {
                    if self.is_empty(double) {
                        moves.push(Move::new(from, double, None));
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(target) = from.offset(dir, d_file) else {
                continue;
            };
            match self.cell(target) {
                Cell::Occupied(color, _) if color != us => {
                    self.push_pawn_move(from, target, moves);
                }
                Cell::Empty
                    if self.en_passant == Some(target)
                        && self
                            .cell(Square::at(from.rank(), target.file()))
                            .is(us.opponent(), Piece::Pawn) =>
                {
                    moves.push(Move::new(from, target, None));
                }
                _ => {}
            }
        }
    }

    /// Push a pawn move, expanding it into the four promotions on the far rank
    fn push_pawn_move(&self, from: Square, to: Square, moves: &mut Vec<Move>) {
        if to.rank() == self.side_to_move.pawn_promotion_rank() {
            for promo in PROMOTION_PIECES {
                moves.push(Move::new(from, to, Some(promo)));
            }
        } else {
            moves.push(Move::new(from, to, None));
        }
    }
}
