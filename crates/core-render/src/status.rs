//! Status line composition.
//!
//! Format: `{MODE} "{file}" line {n} of {total} --{pct}%-- col {c}` where
//! `n` is 1-based, `c` is 0-based (matching what the cursor arithmetic
//! exposes), and `pct` is the completion percentage through the buffer.
//! A pending one-shot message (save confirmation or failure) displaces the
//! whole line for one render tick.

use std::path::Path;

use core_state::Mode;

/// Everything the status line needs, borrowed from session state.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub file_name: &'a Path,
    /// 0-based cursor row.
    pub line: usize,
    pub total_lines: usize,
    /// 0-based cursor column.
    pub col: usize,
    pub message: Option<&'a str>,
}

pub fn format_status(ctx: &StatusContext<'_>) -> String {
    if let Some(msg) = ctx.message {
        return msg.to_string();
    }
    let total = ctx.total_lines.max(1);
    let pct = (ctx.line + 1) * 100 / total;
    format!(
        "{} \"{}\" line {} of {} --{}%-- col {}",
        ctx.mode.label(),
        ctx.file_name.display(),
        ctx.line + 1,
        total,
        pct,
        ctx.col,
    )
}
