use crate::core::{
    board::Board,
    piece::{Piece, PieceKind, Position},
};

/// The board together with the active piece and its position.
///
/// All piece manipulation goes through the `try_*` operations, which
/// validate a candidate against the board and commit only on success, so a
/// `PlayField` never holds an illegally placed piece while the game is
/// running. The one exception is a failed [`PlayField::spawn`]: the
/// colliding piece is installed so the final frame can still draw it, and
/// the caller is expected to end the game instead of merging it.
#[derive(Debug, Clone)]
pub struct PlayField {
    pub(crate) board: Board,
    piece: Piece,
    position: Position,
}

impl PlayField {
    #[must_use]
    pub fn new(first: PieceKind) -> Self {
        let piece = Piece::new(first);
        let position = Position::spawn(piece.shape());
        Self {
            board: Board::EMPTY,
            piece,
            position,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Installs a fresh piece of `kind` at the spawn position and reports
    /// whether that placement is legal.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        self.piece = Piece::new(kind);
        self.position = Position::spawn(self.piece.shape());
        self.board.allows_placement(self.piece.shape(), self.position)
    }

    /// Moves the piece by `(dx, dy)` if the target placement is legal.
    /// On failure the position is unchanged.
    pub fn try_translate(&mut self, dx: i32, dy: i32) -> bool {
        let candidate = self.position.translated(dx, dy);
        if self.board.allows_placement(self.piece.shape(), candidate) {
            self.position = candidate;
            true
        } else {
            false
        }
    }

    /// Rotates the piece 90° clockwise in place if the rotated shape fits
    /// at the current position. No wall kicks: a blocked rotation is
    /// discarded and the original orientation kept.
    pub fn try_rotate(&mut self) -> bool {
        let rotated = self.piece.shape().rotated_cw();
        if self.board.allows_placement(&rotated, self.position) {
            self.piece.replace_shape(rotated);
            true
        } else {
            false
        }
    }

    /// Drops the piece to the maximal legal depth below its current
    /// position.
    pub fn drop_to_floor(&mut self) {
        while self.try_translate(0, 1) {}
    }

    /// Settles the active piece and spawns the next one.
    ///
    /// Merges the piece into the board, clears full rows, then installs a
    /// piece of `next` at the spawn position. Returns the number of cleared
    /// rows and whether the spawn placement was legal.
    pub fn complete_drop(&mut self, next: PieceKind) -> (usize, bool) {
        self.merge_piece();
        let cleared = self.board.clear_full_rows();
        let spawned = self.spawn(next);
        (cleared, spawned)
    }

    /// Writes every occupied cell of the piece into the board.
    ///
    /// # Panics
    ///
    /// Panics when a cell falls outside the grid; a landed piece with
    /// out-of-range cells is an invariant violation.
    fn merge_piece(&mut self) {
        let kind = self.piece.kind();
        for (dx, dy) in self.piece.shape().occupied_cells() {
            let (x, y) = self.position.cell(dx, dy);
            let x = usize::try_from(x).expect("settled piece cell left of the board");
            let y = usize::try_from(y).expect("settled piece cell above the board");
            self.board.set_cell(x, y, kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::CellProbe;

    #[test]
    fn translate_commits_on_success_and_rolls_back_on_failure() {
        let mut field = PlayField::new(PieceKind::O);
        assert_eq!(field.position(), Position::new(4, 0));

        assert!(field.try_translate(-1, 0));
        assert_eq!(field.position(), Position::new(3, 0));

        // Walk into the left wall; position must stay put on the failure.
        for _ in 0..3 {
            field.try_translate(-1, 0);
        }
        assert_eq!(field.position(), Position::new(0, 0));
        assert!(!field.try_translate(-1, 0));
        assert_eq!(field.position(), Position::new(0, 0));
    }

    #[test]
    fn o_piece_descends_to_row_18_and_settles_there() {
        // Empty 10x20 board, O spawns at x = 4: rows y and y + 1 are
        // occupied, so y = 18 is the deepest legal position.
        let mut field = PlayField::new(PieceKind::O);
        for step in 1..=18 {
            assert!(field.try_translate(0, 1), "descent {step}");
        }
        assert_eq!(field.position(), Position::new(4, 18));
        assert!(!field.try_translate(0, 1));
        assert_eq!(field.position(), Position::new(4, 18));

        let (cleared, spawned) = field.complete_drop(PieceKind::T);
        assert_eq!(cleared, 0);
        assert!(spawned);
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(field.board().probe(x, y), CellProbe::Occupied);
        }
    }

    #[test]
    fn drop_to_floor_reaches_the_bottom_row() {
        let mut field = PlayField::new(PieceKind::I);
        field.drop_to_floor();
        assert_eq!(field.position(), Position::new(3, 19));
    }

    #[test]
    fn rotation_is_rejected_at_the_right_wall() {
        // Vertical I hugging the right wall: the horizontal form would
        // span columns 9..13 and is refused, keeping shape and position.
        let mut field = PlayField::new(PieceKind::I);
        assert!(field.try_rotate());
        assert_eq!(field.piece().shape().height(), 4);
        while field.try_translate(1, 0) {}
        assert_eq!(field.position(), Position::new(9, 0));

        assert!(!field.try_rotate());
        assert_eq!(field.piece().shape().height(), 4);
        assert_eq!(field.position(), Position::new(9, 0));
    }

    #[test]
    fn rotation_is_rejected_when_blocked_by_settled_cells() {
        let mut field = PlayField::new(PieceKind::I);
        // Occupy the cell the vertical form would need.
        field.board.set_cell(3, 1, PieceKind::O);
        assert!(!field.try_rotate());
        assert_eq!(field.piece().shape().height(), 1);
    }

    #[test]
    fn spawn_reports_collision_but_still_installs_the_piece() {
        let mut field = PlayField::new(PieceKind::O);
        field.drop_to_floor();
        for x in 2..=7 {
            field.board.set_cell(x, 0, PieceKind::L);
            field.board.set_cell(x, 1, PieceKind::L);
        }
        assert!(!field.spawn(PieceKind::T));
        assert_eq!(field.piece().kind(), PieceKind::T);
        assert_eq!(field.position(), Position::new(3, 0));
    }
}
