//! Game state module - composes the core components
//!
//! Ties together board, falling piece, RNG and scoring: spawn order, tick
//! orchestration, line-clear accounting and best-record tracking. No ambient
//! globals: input handlers and the runner receive an explicit `&mut
//! GameState`.

use crate::core::board::Board;
use crate::core::piece::{FallingPiece, TickOutcome};
use crate::core::rng::SimpleRng;
use crate::types::{BestScores, InputEvent, POINTS_PER_ROW};

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: FallingPiece,
    next: FallingPiece,
    rng: SimpleRng,
    started: bool,
    game_over: bool,
    /// Soft-drop held flag, set by input and consulted at the next tick.
    soft_drop: bool,
    score: u32,
    lines: u32,
    best: BestScores,
    /// Set when a best record was exceeded; consumed by the runner, which
    /// owns the persistence write.
    best_dirty: bool,
}

impl GameState {
    /// Create a new session with the given RNG seed and previously stored
    /// best records.
    pub fn new(seed: u32, best: BestScores) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Self::random_piece(&mut rng);
        let next = Self::random_piece(&mut rng);
        Self {
            board: Board::new(),
            active,
            next,
            rng,
            started: false,
            game_over: false,
            soft_drop: false,
            score: 0,
            lines: 0,
            best,
            best_dirty: false,
        }
    }

    fn random_piece(rng: &mut SimpleRng) -> FallingPiece {
        let kind = rng.random_kind();
        let color = rng.random_color();
        FallingPiece::new(kind, color)
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn best(&self) -> BestScores {
        self.best
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &FallingPiece {
        &self.active
    }

    #[cfg(test)]
    pub fn active_mut(&mut self) -> &mut FallingPiece {
        &mut self.active
    }

    pub fn next_piece(&self) -> &FallingPiece {
        &self.next
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Apply a discrete input event.
    ///
    /// Movement and rotation are ignored before the game starts and after
    /// game over; `Start` is idempotent.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Start => self.started = true,
            _ if !self.started || self.game_over => {}
            InputEvent::Rotate => {
                self.active.rotate(&self.board);
            }
            InputEvent::MoveLeft => {
                self.active.try_move(&self.board, -1, 0);
            }
            InputEvent::MoveRight => {
                self.active.try_move(&self.board, 1, 0);
            }
            InputEvent::SoftDropStart => self.soft_drop = true,
            InputEvent::SoftDropEnd => self.soft_drop = false,
        }
    }

    /// Run one logical tick. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }

        match self.active.tick(&mut self.board, self.soft_drop) {
            TickOutcome::Idle => false,
            TickOutcome::Descended => true,
            TickOutcome::Locked { top_out } => {
                self.on_lock(top_out);
                true
            }
        }
    }

    /// Post-lock orchestration: clear rows, score them, then either halt on
    /// top-out or promote the queued piece.
    fn on_lock(&mut self, top_out: bool) {
        let cleared = self.board.clear_completed_rows();
        self.on_rows_cleared(cleared);

        if top_out {
            self.game_over = true;
        } else {
            self.spawn_next();
        }
    }

    /// The queued piece becomes active; a fresh random piece is queued.
    fn spawn_next(&mut self) {
        self.active = self.next;
        self.next = Self::random_piece(&mut self.rng);
    }

    fn on_rows_cleared(&mut self, n: u32) {
        if n == 0 {
            return;
        }
        self.score += POINTS_PER_ROW * n;
        self.lines += n;

        if self.score > self.best.score {
            self.best.score = self.score;
            self.best_dirty = true;
        }
        if self.lines > self.best.lines {
            self.best.lines = self.lines;
            self.best_dirty = true;
        }
    }

    /// Take the pending best-record update, if any.
    ///
    /// Returns the records to persist exactly once per new record; the next
    /// call returns None until another record falls.
    pub fn take_best_update(&mut self) -> Option<BestScores> {
        if self.best_dirty {
            self.best_dirty = false;
            Some(self.best)
        } else {
            None
        }
    }
}
