//! File load/save boundary.
//!
//! Loading is forgiving: an unreadable path yields the minimal single-line
//! buffer and the session proceeds. Saving is strict: a write failure is
//! surfaced to the user as a status message rather than silently ignored,
//! and logged. Both calls are synchronous full-file operations.

use std::io;
use std::path::{Path, PathBuf};

use core_state::EditorState;
use core_text::Buffer;
use thiserror::Error;
use tracing::{info, warn};

/// Failure to persist the buffer. Non-fatal; reported on the status bar.
#[derive(Debug, Error)]
#[error("write \"{path}\": {source}", path = .path.display())]
pub struct SaveError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Read a file into a buffer. Missing or unreadable files produce a single
/// empty line instead of an error.
pub fn open_buffer(path: &Path) -> Buffer {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            info!(target: "io", path = %path.display(), bytes = content.len(), "opened");
            Buffer::from_content(&content)
        }
        Err(e) => {
            warn!(target: "io", path = %path.display(), error = %e, "open_failed_starting_empty");
            Buffer::new()
        }
    }
}

/// Write the buffer to `path` as a full overwrite, one line break after
/// every line including the last.
pub fn save_buffer(buffer: &Buffer, path: &Path) -> Result<(), SaveError> {
    std::fs::write(path, buffer.to_content()).map_err(|source| SaveError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(target: "io", path = %path.display(), lines = buffer.line_count(), "saved");
    Ok(())
}

/// Save the session buffer to its file and surface the outcome as a
/// one-shot status message.
pub fn save_with_status(state: &mut EditorState) {
    match save_buffer(&state.buffer, &state.file_name) {
        Ok(()) => {
            let msg = format!("Saved \"{}\"", state.file_name.display());
            state.set_status(msg);
        }
        Err(e) => {
            tracing::error!(target: "io", error = %e, "save_failed");
            state.set_status(format!("Save failed: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_file_yields_single_empty_line() {
        let dir = tempfile::tempdir().unwrap();
        let buffer = open_buffer(&dir.path().join("absent.txt"));
        assert!(buffer.is_sole_empty_line());
    }

    #[test]
    fn save_then_open_round_trips_line_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let buffer = Buffer::from_content("first\nsecond");
        save_buffer(&buffer, &path).unwrap();
        // Saved form always carries the trailing break.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        let reloaded = open_buffer(&path);
        assert_eq!(reloaded, buffer);
    }

    #[test]
    fn save_to_unwritable_path_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        // The directory itself is not a writable file target.
        let err = save_buffer(&Buffer::new(), dir.path()).unwrap_err();
        assert_eq!(err.path, dir.path());
    }
}
