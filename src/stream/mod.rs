//! stream/mod.rs
//!
//! Source/sink plumbing and the encoders that drive a cipher between them.

pub mod encoder;
pub mod io;

pub use encoder::{EncodeOutcome, HeadedStreamEncoder, StreamEncoder};
pub use io::{open_input, open_output, InputSource, OutputSink, Sink, UnitReader};
