//! Key dispatch and file IO for the editing engine.
//!
//! `dispatcher` holds the mode state machine: a single transition function
//! from (mode, key) to mutated session state. `io_ops` owns the load/save
//! boundary. Both operate purely on `core-state`/`core-text` values, so the
//! whole engine can be exercised headlessly with synthetic key sequences.

pub mod dispatcher;
pub mod io_ops;

pub use dispatcher::{DispatchResult, dispatch};
