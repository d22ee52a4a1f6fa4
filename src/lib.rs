//! textcipher
//!
//! Character-stream transcoder built around two classical, reversible
//! substitution ciphers: an additive (Caesar-style) cipher over a fixed
//! printable alphabet, and a bitwise XOR cipher. Per-unit keys are pulled
//! from a [`keystream::KeyStream`], which repeats a scalar or a finite key
//! sequence indefinitely.
//!
//! These are classical, breakable ciphers. Nothing here is
//! cryptographically secure.
//!
//! # Architecture
//!
//! ```text
//! KeyStream   (scalar or cyclic sequence of integer keys)
//!     ↓ one key per unit
//! Coder       (Additive over the printable alphabet | BitwiseXor)
//!     ↓ encode_unit
//! StreamEncoder / HeadedStreamEncoder
//!     (pulls units from a UnitReader, pushes through a Sink)
//! ```
//!
//! # Examples
//!
//! Encode a string to an in-memory sink and decode it back:
//!
//! ```
//! use textcipher::cipher::Coder;
//! use textcipher::keystream::KeyStream;
//! use textcipher::stream::{open_input, open_output, InputSource, OutputSink, StreamEncoder};
//!
//! # fn main() -> Result<(), textcipher::types::CodecError> {
//! let reader = open_input(InputSource::Literal("dude lol".into()))?;
//! let sink = open_output(OutputSink::Memory)?;
//! let coder = Coder::additive(KeyStream::scalar(2));
//!
//! let outcome = StreamEncoder::new(reader, sink, coder).encode()?;
//! assert_eq!(outcome.collected_string().as_deref(), Some("fwfg\"nqn"));
//!
//! let reader = open_input(InputSource::Literal("fwfg\"nqn".into()))?;
//! let sink = open_output(OutputSink::Memory)?;
//! let coder = Coder::additive(KeyStream::scalar(-2));
//!
//! let outcome = StreamEncoder::new(reader, sink, coder).encode()?;
//! assert_eq!(outcome.collected_string().as_deref(), Some("dude lol"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Cipher core
pub mod alphabet;
pub mod cipher;
pub mod keystream;

// Stream layer
pub mod stream;

// Boundary and observability
pub mod config;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::cipher::{AdditiveCipher, Coder, XorCipher};
    pub use crate::config::{CoderSpec, EncodeJob, JobSpec, KeySpec};
    pub use crate::keystream::{KeyStream, KeyValue};
    pub use crate::stream::{
        open_input, open_output, EncodeOutcome, HeadedStreamEncoder, InputSource, OutputSink,
        Sink, StreamEncoder, UnitReader,
    };
    pub use crate::types::CodecError;
}
