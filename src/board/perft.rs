use super::Position;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Walks the tree with make/unmake on `self`, which is left unchanged.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mut m in moves {
            if self.make_move(&mut m).is_ok() {
                nodes += self.perft(depth - 1);
                self.unmake_move(&m);
            }
        }

        nodes
    }
}
