//! Buffer <-> file content codec.
//!
//! Loading splits raw content on `\n` and, when more than one segment
//! resulted, drops a single trailing empty segment (the artifact of a final
//! line break). Saving emits a `\n` after every line including the last, so
//! a saved file always ends in a line break even when the loaded one did
//! not. The asymmetry is intentional and kept stable; round-tripping is
//! exact modulo that final break.

use crate::Line;

/// Split raw file content into buffer lines.
pub fn from_content(raw: &str) -> Vec<Line> {
    let mut segments: Vec<&str> = raw.split('\n').collect();
    if segments.len() > 1 && segments.last() == Some(&"") {
        segments.pop();
    }
    segments.iter().map(|s| s.chars().collect()).collect()
}

/// Join buffer lines back into file content, one `\n` after each line.
pub fn to_content(lines: &[Line]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.extend(line.iter());
        out.push('\n');
    }
    out
}
