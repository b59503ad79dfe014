use crate::core::{
    board::Board,
    piece::{Piece, Position},
};

use super::{GameStats, PieceSeed, PieceSource, play_field::PlayField};

/// Session lifecycle. `GameOver` is terminal: every operation on a finished
/// session is a no-op, and a restart is modeled by the owner constructing a
/// fresh [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionStatus {
    Running,
    GameOver,
}

/// One complete game: the play field, the piece generator, the score, and
/// the lifecycle status.
///
/// The session is driven from outside by two event streams that its owner
/// serializes: a gravity timer calling [`Session::tick`] and player
/// commands calling the `try_*`/[`Session::hard_drop`] operations. Every
/// operation completes synchronously, so readers (the renderer) always
/// observe a fully settled state.
#[derive(Debug, Clone)]
pub struct Session {
    field: PlayField,
    source: PieceSource,
    stats: GameStats,
    status: SessionStatus,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Starts a session with a randomly seeded piece source.
    #[must_use]
    pub fn new() -> Self {
        Self::from_source(PieceSource::new())
    }

    /// Starts a session with a deterministic piece sequence.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::from_source(PieceSource::with_seed(seed))
    }

    fn from_source(mut source: PieceSource) -> Self {
        let field = PlayField::new(source.next_kind());
        Self {
            field,
            source,
            stats: GameStats::new(),
            status: SessionStatus::Running,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.field.board()
    }

    #[must_use]
    pub fn piece(&self) -> &Piece {
        self.field.piece()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.field.position()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// One gravity step: move the piece down, or land it if it cannot move.
    ///
    /// Landing merges the piece, clears full rows, scores them, and spawns
    /// the next piece; a spawn with no legal placement ends the game.
    pub fn tick(&mut self) {
        if !self.status.is_running() {
            return;
        }
        if self.field.try_translate(0, 1) {
            return;
        }
        self.land();
    }

    pub fn try_move_left(&mut self) -> bool {
        self.status.is_running() && self.field.try_translate(-1, 0)
    }

    pub fn try_move_right(&mut self) -> bool {
        self.status.is_running() && self.field.try_translate(1, 0)
    }

    pub fn try_soft_drop(&mut self) -> bool {
        self.status.is_running() && self.field.try_translate(0, 1)
    }

    pub fn try_rotate(&mut self) -> bool {
        self.status.is_running() && self.field.try_rotate()
    }

    /// Drops the piece to its maximal depth and lands it immediately,
    /// running the same landing sequence as [`Session::tick`].
    pub fn hard_drop(&mut self) {
        if !self.status.is_running() {
            return;
        }
        self.field.drop_to_floor();
        self.land();
    }

    fn land(&mut self) {
        let (cleared, spawned) = self.field.complete_drop(self.source.next_kind());
        self.stats.record_lock(cleared);
        if !spawned {
            self.status = SessionStatus::GameOver;
        }
    }
}
