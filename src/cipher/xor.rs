//! cipher/xor.rs
//!
//! Bitwise XOR cipher over the full byte range.
//!
//! Self-inverse: re-encoding with a key stream positioned identically to the
//! encoding pass returns the original unit. Scalar keys satisfy this
//! trivially; sequence keys need a stream rewound to the same cycle offset
//! (see [`crate::keystream::KeyStream::restarted`]).

use crate::keystream::KeyStream;
use crate::types::CodecError;

/// XOR substitution; no alphabet restriction.
#[derive(Debug, Clone)]
pub struct XorCipher {
    keys: KeyStream,
}

impl XorCipher {
    pub fn new(keys: KeyStream) -> Self {
        Self { keys }
    }

    /// XOR `unit` with the low byte of the next key value.
    ///
    /// Infallible in practice; the `Result` keeps the capability surface
    /// uniform across both cipher variants.
    pub fn encode_unit(&mut self, unit: u8) -> Result<u8, CodecError> {
        Ok(unit ^ self.keys.get() as u8)
    }
}
