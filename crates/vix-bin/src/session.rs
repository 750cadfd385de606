//! The synchronous dispatch loop.
//!
//! One iteration per event: bring the viewport to the cursor, hand a render
//! snapshot to the renderer, block for the next input event, dispatch it.
//! Resize events adjust the viewport inline; everything else flows through
//! the mode state machine until it reports quit.

use anyhow::Result;
use core_actions::dispatch;
use core_events::InputEvent;
use core_render::{Viewport, build_snapshot};
use core_state::EditorState;
use tracing::debug;

use crate::render::Renderer;

/// Rows reserved below the text area.
const STATUS_ROWS: u16 = 1;

pub struct EditorSession {
    state: EditorState,
    viewport: Viewport,
    renderer: Renderer,
}

impl EditorSession {
    pub fn new(state: EditorState, term_rows: u16, term_cols: u16) -> Self {
        Self {
            state,
            viewport: Viewport::new(
                term_rows.saturating_sub(STATUS_ROWS) as usize,
                term_cols as usize,
            ),
            renderer: Renderer::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.viewport.scroll_to(self.state.cursor);
            let message = self.state.take_status();
            let snapshot = build_snapshot(&self.state, &self.viewport, message.as_deref());
            self.renderer.draw(&snapshot)?;

            match core_input::read_event()? {
                InputEvent::Resize { rows, cols } => {
                    debug!(target: "session", rows, cols, "resize");
                    self.viewport
                        .resize(rows.saturating_sub(STATUS_ROWS) as usize, cols as usize);
                }
                InputEvent::Key(key) => {
                    let result = dispatch(&mut self.state, key);
                    if result.quit {
                        debug!(target: "session", "quit");
                        return Ok(());
                    }
                }
            }
        }
    }
}
