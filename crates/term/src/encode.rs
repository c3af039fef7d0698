//! Frame encoding: framebuffer contents to crossterm command bytes.
//!
//! Nothing here touches stdout. [`crate::TerminalScreen`] writes the bytes.

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Unchanged cells between two changed ones are reprinted instead of skipped
/// when the gap is at most this wide. A well cell is two columns, so a moved
/// piece usually leaves one or two cell gaps that a cursor jump costs more for.
const MAX_BRIDGE: usize = 4;

/// Remembers the last emitted style so a run of equal cells sends one SGR.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn draw(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.current != Some(cell.style) {
            let colors = Colors::new(color(cell.style.fg), color(cell.style.bg));
            out.queue(SetColors(colors))?;
            let weight = if cell.style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(weight))?;
            self.current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

/// Encode `next`, diffing against `prev` when it has the same size.
///
/// Returns how many cells were emitted. Without a usable previous frame the
/// screen is cleared and every cell is drawn.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    let emitted = match prev {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            encode_changes(prev, next, out)?
        }
        _ => encode_full(next, out)?,
    };

    if emitted > 0 {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(emitted)
}

fn encode_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for &cell in fb.row(y) {
            pen.draw(out, cell)?;
        }
    }
    Ok(fb.width() as usize * fb.height() as usize)
}

fn encode_changes(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    let mut pen = Pen::default();
    let mut emitted = 0;

    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        if old == new {
            continue;
        }
        for (start, end) in changed_spans(old, new) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for &cell in &new[start..end] {
                pen.draw(out, cell)?;
            }
            emitted += end - start;
        }
    }
    Ok(emitted)
}

/// Half-open column ranges where `old` and `new` differ, with short
/// unchanged gaps folded into the surrounding span.
fn changed_spans(old: &[Cell], new: &[Cell]) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for x in (0..new.len()).filter(|&x| old[x] != new[x]) {
        match spans.last_mut() {
            Some((_, end)) if x - *end <= MAX_BRIDGE => *end = x + 1,
            _ => spans.push((x, x + 1)),
        }
    }
    spans
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(text: &str) -> Vec<Cell> {
        text.chars()
            .map(|ch| Cell {
                ch,
                style: CellStyle::default(),
            })
            .collect()
    }

    #[test]
    fn spans_bridge_short_gaps() {
        let old = row_of("..........");
        // Changes at 1..3 and 5..6: the two-column gap is reprinted.
        let new = row_of(".XX..X....");
        assert_eq!(changed_spans(&old, &new), vec![(1, 6)]);
    }

    #[test]
    fn spans_split_on_long_gaps() {
        let old = row_of("............");
        let new = row_of("X.........XX");
        assert_eq!(changed_spans(&old, &new), vec![(0, 1), (10, 12)]);
    }

    #[test]
    fn identical_frames_emit_nothing() {
        let mut a = FrameBuffer::new(4, 2);
        a.put_str(0, 0, "ab", CellStyle::default());
        let b = a.clone();

        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&a), &b, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn changed_cell_is_the_only_one_sent() {
        let a = FrameBuffer::new(30, 3);
        let mut b = a.clone();
        b.put_char(20, 1, 'Z', CellStyle::default().bold());

        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&a), &b, &mut out).unwrap(), 1);
        assert!(String::from_utf8_lossy(&out).contains('Z'));
    }

    #[test]
    fn size_change_redraws_everything() {
        let a = FrameBuffer::new(3, 2);
        let mut b = FrameBuffer::new(4, 2);
        b.put_str(0, 0, "abcd", CellStyle::default());
        b.put_str(0, 1, "wxyz", CellStyle::default());

        let mut out = Vec::new();
        assert_eq!(encode_frame(Some(&a), &b, &mut out).unwrap(), 8);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("abcd"));
        assert!(text.contains("wxyz"));

        out.clear();
        assert_eq!(encode_frame(None, &b, &mut out).unwrap(), 8);
    }
}
