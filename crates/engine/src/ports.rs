//! Boundaries between the loop and the outside world.
//!
//! The loop only sees decoded events coming in and snapshots going out; raw
//! mode, escape sequences and drawing live behind these traits.

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::types::RawEvent;

/// Non-blocking source of input events.
pub trait InputPort {
    /// Return the next pending event, or `None` immediately if there is none.
    fn poll(&mut self) -> Result<Option<RawEvent>>;
}

/// Sink for one frame per loop iteration.
pub trait RenderPort {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

impl<T: InputPort + ?Sized> InputPort for &mut T {
    fn poll(&mut self) -> Result<Option<RawEvent>> {
        (**self).poll()
    }
}

impl<T: RenderPort + ?Sized> RenderPort for &mut T {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }
}

/// Replays a fixed list of poll results, then reports no input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    events: std::collections::VecDeque<Option<RawEvent>>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = Option<RawEvent>>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputPort for ScriptedInput {
    fn poll(&mut self) -> Result<Option<RawEvent>> {
        Ok(self.events.pop_front().flatten())
    }
}

/// Keeps every rendered snapshot.
#[derive(Debug, Clone, Default)]
pub struct RecordingRender {
    pub frames: Vec<GameSnapshot>,
}

impl RenderPort for RecordingRender {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.frames.push(*snapshot);
        Ok(())
    }
}
