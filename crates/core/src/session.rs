//! Session module - the game state machine
//!
//! A session owns the board, the falling piece, the score and the piece
//! generator. Commands and gravity ticks are the only ways it changes; every
//! candidate placement is checked with [`collides`] before it is committed.

use log::{debug, info};

use crate::active::ActivePiece;
use crate::board::Board;
use crate::collision::collides;
use crate::rng::{PieceGenerator, UniformGenerator};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, GameStatus, LockEvent};

#[derive(Debug)]
pub struct Session {
    board: Board,
    active: ActivePiece,
    generator: Box<dyn PieceGenerator>,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    status: GameStatus,
    quit: bool,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Session {
    /// New game with a seeded uniform generator.
    pub fn new(seed: u32) -> Self {
        Self::with_generator(Box::new(UniformGenerator::new(seed)))
    }

    /// New game on an empty board.
    pub fn with_generator(generator: Box<dyn PieceGenerator>) -> Self {
        Self::with_board(Board::new(), generator)
    }

    /// New game on a prepared board.
    ///
    /// The first piece is spawned immediately; if it already collides the
    /// session starts in `GameOver`.
    pub fn with_board(board: Board, mut generator: Box<dyn PieceGenerator>) -> Self {
        let active = ActivePiece::spawn(generator.next_kind());
        let status = if collides(&board, &active) {
            info!("first piece {:?} blocked at spawn", active.kind());
            GameStatus::GameOver
        } else {
            GameStatus::Running
        };

        Self {
            board,
            active,
            generator,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            status,
            quit: false,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running && !self.quit
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Quit was requested or the game is over.
    pub fn is_finished(&self) -> bool {
        self.quit || self.status == GameStatus::GameOver
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a command. Returns whether anything changed.
    ///
    /// Only `Quit` is accepted once the session is finished.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Quit {
            let changed = !self.quit;
            self.quit = true;
            return changed;
        }

        if !self.is_running() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.try_commit(self.active.translated(-1, 0)),
            GameAction::MoveRight => self.try_commit(self.active.translated(1, 0)),
            // An explicit down press never locks, even when blocked.
            GameAction::SoftDown => self.try_commit(self.active.translated(0, 1)),
            GameAction::Rotate => self.try_commit(self.active.rotated()),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::Quit => false,
        }
    }

    /// One gravity step: fall a row, or lock when the row below is blocked.
    ///
    /// Returns the lock event when the piece locked. No-op once finished.
    pub fn gravity_tick(&mut self) -> Option<LockEvent> {
        if !self.is_running() {
            return None;
        }

        if self.try_commit(self.active.translated(0, 1)) {
            None
        } else {
            Some(self.lock_active())
        }
    }

    /// Drop to the resting row and lock there.
    fn hard_drop(&mut self) -> LockEvent {
        while self.try_commit(self.active.translated(0, 1)) {}
        self.lock_active()
    }

    fn try_commit(&mut self, candidate: ActivePiece) -> bool {
        if collides(&self.board, &candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Merge, clear rows, score, spawn the next piece.
    fn lock_active(&mut self) -> LockEvent {
        self.board.merge(&self.active);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let lines_cleared = self.board.clear_full_rows() as u32;
        let score_delta = line_clear_score(lines_cleared);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.score = self.score.saturating_add(score_delta);

        debug!(
            "locked {:?} at ({}, {}), cleared {} line(s), +{}",
            self.active.kind(),
            self.active.x(),
            self.active.y(),
            lines_cleared,
            score_delta
        );

        let event = LockEvent {
            lines_cleared,
            score_delta,
        };
        self.last_event = Some(event);

        self.spawn_next();
        event
    }

    fn spawn_next(&mut self) {
        let next = ActivePiece::spawn(self.generator.next_kind());
        self.active = next;

        if collides(&self.board, &next) {
            info!(
                "spawn of {:?} blocked, game over with score {} ({} cells stacked)",
                next.kind(),
                self.score,
                self.board.occupied_count()
            );
            self.status = GameStatus::GameOver;
        } else {
            debug!("spawned {:?}", next.kind());
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.score = self.score;
        out.lines = self.lines;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
