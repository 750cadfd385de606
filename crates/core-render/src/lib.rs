//! Render-side view of editor state: viewport scroll arithmetic, status
//! line composition, and the per-tick [`snapshot::RenderSnapshot`] handed to
//! whatever actually draws. No crate below the binary touches a terminal
//! surface; the core stays headless and testable with synthetic input.

pub mod snapshot;
pub mod status;
pub mod viewport;

pub use snapshot::{RenderLine, RenderSnapshot, build_snapshot};
pub use viewport::Viewport;
