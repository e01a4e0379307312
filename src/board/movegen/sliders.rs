use super::super::{Cell, Move, Position, Square};

/// Bishop rays as (rank, file) steps
pub(super) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rook rays as (rank, file) steps
pub(super) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Position {
    /// Walk each ray until the edge, a friendly piece (excluded) or an
    /// enemy piece (included as a capture).
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        let us = self.side_to_move;
        for &(d_rank, d_file) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_rank, d_file) {
                match self.cell(to) {
                    Cell::Empty => moves.push(Move::new(from, to, None)),
                    Cell::Occupied(color, _) => {
                        if color != us {
                            moves.push(Move::new(from, to, None));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }

    /// First occupied cell along a ray, if any
    pub(super) fn first_on_ray(&self, from: Square, d_rank: isize, d_file: isize) -> Cell {
        let mut current = from;
        while let Some(next) = current.offset(d_rank, d_file) {
            let cell = self.cell(next);
            if !cell.is_empty() {
                return cell;
            }
            current = next;
        }
        Cell::Empty
    }
}
