//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `json` - JSON argument parsing (inline, @file, stdin)

pub mod io;
pub mod json;
