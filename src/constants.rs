//! constants.rs
//!
//! Crate-wide constants shared by the stream layer and the boundary code.

/// Default header terminator for headed streams. Everything up to and
/// including this unit is copied to the sink unencoded.
pub const HEADER_TERMINATOR: u8 = b'\n';

/// Prompt shown before a single-line console read.
pub const CONSOLE_PROMPT: &str = "Provide text to encode: ";
