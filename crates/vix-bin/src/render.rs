//! Snapshot renderer.
//!
//! Sole consumer of `core_render::RenderSnapshot`; draws the visible text
//! rectangle, `~` fillers past the end of the buffer, the status line, and
//! parks the terminal cursor at the snapshot's screen position. All writes
//! are queued and flushed once per frame.

use std::io::{Stdout, Write, stdout};

use anyhow::Result;
use core_render::RenderSnapshot;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

pub struct Renderer {
    out: Stdout,
}

impl Renderer {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    pub fn draw(&mut self, snapshot: &RenderSnapshot) -> Result<()> {
        queue!(self.out, Hide)?;
        for (row, line) in snapshot.lines.iter().enumerate() {
            queue!(
                self.out,
                MoveTo(0, row as u16),
                Clear(ClearType::CurrentLine)
            )?;
            if line.past_end {
                queue!(self.out, Print("~"))?;
            } else {
                queue!(self.out, Print(&line.text))?;
            }
        }
        let status_row = snapshot.lines.len() as u16;
        queue!(
            self.out,
            MoveTo(0, status_row),
            Clear(ClearType::CurrentLine),
            Print(&snapshot.status)
        )?;
        queue!(
            self.out,
            MoveTo(snapshot.cursor_col as u16, snapshot.cursor_row as u16),
            Show
        )?;
        self.out.flush()?;
        Ok(())
    }
}
