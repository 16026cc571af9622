use super::{Board, MoveCursor};

impl Board {
    /// Count leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        if depth == 1 {
            return self.legal_moves().count() as u64;
        }

        let mut nodes = 0;
        let mut cursor = MoveCursor::new(self.turn());
        while let Some(mv) = cursor.next_move(self) {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.undo();
        }

        nodes
    }
}
