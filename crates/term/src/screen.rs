//! Render port backed by the real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use log::trace;

use crate::core::GameSnapshot;
use crate::encode::encode_frame;
use crate::engine::RenderPort;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};

/// Fallback when the terminal size cannot be queried.
const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

/// Owns the terminal session: raw mode, alternate screen, and the pair of
/// framebuffers each frame is diffed between.
pub struct TerminalScreen {
    stdout: io::Stdout,
    view: GameView,
    /// What the terminal currently shows; `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    next: FrameBuffer,
    out: Vec<u8>,
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: GameView::default(),
            shown: None,
            next: FrameBuffer::new(0, 0),
            out: Vec::with_capacity(64 * 1024),
        }
    }

    /// Enable raw mode and switch to the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()?;
        self.shown = None;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw the start screen.
    pub fn show_title(&mut self) -> Result<()> {
        self.next = self.view.render_title(viewport());
        self.shown = None;
        self.present()
    }

    /// Encode `next` against what is on screen, write it, then swap buffers.
    fn present(&mut self) -> Result<()> {
        self.out.clear();
        let emitted = encode_frame(self.shown.as_ref(), &self.next, &mut self.out)?;
        if emitted > 0 {
            trace!("frame: {} cells, {} bytes", emitted, self.out.len());
            self.flush()?;
        }

        match self.shown.as_mut() {
            Some(shown) => std::mem::swap(shown, &mut self.next),
            None => {
                let blank = FrameBuffer::new(0, 0);
                self.shown = Some(std::mem::replace(&mut self.next, blank));
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl RenderPort for TerminalScreen {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.view.render_into(snapshot, viewport(), &mut self.next);
        self.present()
    }
}

fn viewport() -> Viewport {
    match terminal::size() {
        Ok((w, h)) => Viewport::new(w, h),
        Err(_) => DEFAULT_VIEWPORT,
    }
}
