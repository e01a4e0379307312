use super::super::{Move, Position, Square};

/// Knight jumps as (rank, file) deltas
pub(super) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        self.generate_leaper_moves(from, &KNIGHT_OFFSETS, moves);
    }

    /// Single-step moves from a fixed offset table, skipping friendly squares
    pub(super) fn generate_leaper_moves(
        &self,
        from: Square,
        offsets: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        let us = self.side_to_move;
        for &(d_rank, d_file) in offsets {
            if let Some(to) = from.offset(d_rank, d_file) {
                if self.is_open_for(to, us) {
                    moves.push(Move::new(from, to, None));
                }
            }
        }
    }
}
