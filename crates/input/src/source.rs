//! Crossterm-backed input port.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use log::trace;

use crate::engine::InputPort;
use crate::map::map_key_event;
use crate::types::RawEvent;

/// Reads pending terminal events without blocking.
///
/// Raw mode must already be enabled by `TerminalScreen`. Each `poll` consumes at
/// most one terminal event; unmapped keys and non-key events yield `None`.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until any key press arrives. Used for the start and end screens.
    pub fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl InputPort for TerminalInput {
    fn poll(&mut self) -> Result<Option<RawEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                let mapped = map_key_event(key);
                trace!("key {:?} -> {:?}", key.code, mapped);
                Ok(mapped)
            }
            _ => Ok(None),
        }
    }
}
