//! Terminal session management: raw mode plus alternate screen, behind a
//! small backend trait so the engine's frontend never talks to crossterm's
//! terminal API directly and tests can substitute a no-op backend.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::stdout;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    /// Current (rows, cols) of the terminal.
    fn size(&self) -> Result<(u16, u16)>;
}

/// Crossterm-backed terminal session.
pub struct CrosstermBackend {
    entered: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter raw mode and return a guard that restores the terminal on drop,
    /// including on panic unwind.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen)?;
            self.entered = true;
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
        }
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = crossterm::terminal::size()?;
        Ok((rows, cols))
    }
}

/// RAII guard restoring the terminal even when the caller early-returns.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        // Restoration failure at teardown has no recovery path.
        let _ = self.backend.leave();
    }
}
