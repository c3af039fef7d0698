//! Fixed-cadence driver for a [`Session`].
//!
//! Each iteration polls at most one input event, advances the gravity
//! accumulator by the time since the previous iteration, renders, and then
//! sleeps out the rest of the tick. Gravity speed is therefore independent of
//! the polling rate, and the loop keeps falling pieces with no key pressed.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info, trace};

use crate::clock::Clock;
use crate::config::GameConfig;
use crate::core::{GameSnapshot, Session};
use crate::ports::{InputPort, RenderPort};
use crate::timing::GravityTimer;
use crate::types::{GameAction, GameStatus};

/// Why [`GameLoop::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    GameOver,
}

impl LoopExit {
    fn of(session: &Session) -> Option<Self> {
        if session.quit_requested() {
            Some(LoopExit::Quit)
        } else if session.status() == GameStatus::GameOver {
            Some(LoopExit::GameOver)
        } else {
            None
        }
    }
}

pub struct GameLoop<C: Clock> {
    clock: C,
    tick: Duration,
    gravity: GravityTimer,
    last_step: Duration,
    iterations: u64,
    /// Reused every frame.
    snapshot: GameSnapshot,
}

impl<C: Clock> GameLoop<C> {
    pub fn new(clock: C, config: &GameConfig) -> Self {
        Self::with_timing(clock, config.tick, config.gravity_interval)
    }

    pub fn with_timing(clock: C, tick: Duration, gravity_interval: Duration) -> Self {
        let last_step = clock.elapsed();
        Self {
            clock,
            tick,
            gravity: GravityTimer::new(gravity_interval),
            last_step,
            iterations: 0,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// One iteration: input, gravity, render.
    ///
    /// Returns the exit reason once the session is finished. The frame for
    /// that iteration has already been rendered.
    pub fn step<I, R>(
        &mut self,
        session: &mut Session,
        input: &mut I,
        render: &mut R,
    ) -> Result<Option<LoopExit>>
    where
        I: InputPort + ?Sized,
        R: RenderPort + ?Sized,
    {
        self.iterations += 1;

        if let Some(event) = input.poll()? {
            let action = GameAction::from(event);
            let changed = session.apply_action(action);
            trace!("{:?} -> {} (changed: {})", event, action.as_str(), changed);
        }

        let now = self.clock.elapsed();
        let elapsed = now.saturating_sub(self.last_step);
        self.last_step = now;

        if self.gravity.advance(elapsed) {
            session.gravity_tick();
        }

        if let Some(event) = session.take_last_event() {
            debug!(
                "lock: {} line(s), +{} (score {})",
                event.lines_cleared,
                event.score_delta,
                session.score()
            );
        }

        session.snapshot_into(&mut self.snapshot);
        render.render(&self.snapshot)?;

        Ok(LoopExit::of(session))
    }

    /// Step until quit or game over, sleeping out each tick.
    pub fn run<I, R>(
        &mut self,
        session: &mut Session,
        input: &mut I,
        render: &mut R,
    ) -> Result<LoopExit>
    where
        I: InputPort + ?Sized,
        R: RenderPort + ?Sized,
    {
        info!(
            "loop start: tick {:?}, gravity {:?}",
            self.tick,
            self.gravity.interval()
        );

        loop {
            let started = self.clock.elapsed();
            if let Some(exit) = self.step(session, input, render)? {
                info!(
                    "loop exit: {:?} after {} iterations, score {}, lines {}, pieces {}",
                    exit,
                    self.iterations,
                    session.score(),
                    session.lines(),
                    session.pieces_locked()
                );
                return Ok(exit);
            }
            let spent = self.clock.elapsed().saturating_sub(started);
            self.clock.sleep(self.tick.saturating_sub(spent));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::core::SequenceGenerator;
    use crate::ports::{RecordingRender, ScriptedInput};
    use crate::types::{PieceKind, RawEvent};

    const TICK: Duration = Duration::from_millis(10);
    const GRAVITY: Duration = Duration::from_millis(500);

    fn o_session() -> Session {
        Session::with_generator(Box::new(SequenceGenerator::repeat(PieceKind::O)))
    }

    #[test]
    fn gravity_fires_after_interval_not_every_poll() {
        let mut game = GameLoop::with_timing(ManualClock::new(), TICK, GRAVITY);
        let mut session = o_session();
        let mut input = ScriptedInput::default();
        let mut render = RecordingRender::default();

        for _ in 0..50 {
            game.step(&mut session, &mut input, &mut render).unwrap();
            game.clock_mut().advance(TICK);
        }
        assert_eq!(session.active().y(), 0);

        game.step(&mut session, &mut input, &mut render).unwrap();
        assert_eq!(session.active().y(), 1);
        assert_eq!(render.frames.len(), 51);
    }

    #[test]
    fn one_event_per_iteration() {
        let mut game = GameLoop::with_timing(ManualClock::new(), TICK, GRAVITY);
        let mut session = o_session();
        let mut input = ScriptedInput::new([Some(RawEvent::Left), Some(RawEvent::Left)]);
        let mut render = RecordingRender::default();

        game.step(&mut session, &mut input, &mut render).unwrap();
        assert_eq!(session.active().x(), 2);
        assert_eq!(input.remaining(), 1);

        game.step(&mut session, &mut input, &mut render).unwrap();
        assert_eq!(session.active().x(), 1);
    }

    #[test]
    fn quit_renders_final_frame_then_exits() {
        let mut game = GameLoop::with_timing(ManualClock::new(), TICK, GRAVITY);
        let mut session = o_session();
        let mut input = ScriptedInput::new([None, None, Some(RawEvent::Quit)]);
        let mut render = RecordingRender::default();

        let exit = game.run(&mut session, &mut input, &mut render).unwrap();
        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(render.frames.len(), 3);
        assert_eq!(game.clock().elapsed(), TICK * 2);
    }
}
