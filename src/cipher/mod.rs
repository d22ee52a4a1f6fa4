//! cipher/mod.rs
//!
//! The two cipher algorithms behind the stream encoders.
//!
//! [`Coder`] is a closed tagged variant over the capability
//! `encode_unit(u8) -> Result<u8, CodecError>`. Each variant owns its
//! [`KeyStream`] and pulls exactly one key value per encoded unit.

mod additive;
mod xor;

pub use additive::AdditiveCipher;
pub use xor::XorCipher;

use crate::keystream::KeyStream;
use crate::types::CodecError;

/// Cipher selection. Exactly two algorithms exist; open extension is not a
/// goal, so an enum beats a trait object here.
#[derive(Debug, Clone)]
pub enum Coder {
    Additive(AdditiveCipher),
    Xor(XorCipher),
}

impl Coder {
    /// Additive (Caesar-style) cipher over the printable alphabet.
    pub fn additive(keys: KeyStream) -> Self {
        Coder::Additive(AdditiveCipher::new(keys))
    }

    /// Bitwise XOR cipher over the full byte range.
    pub fn xor(keys: KeyStream) -> Self {
        Coder::Xor(XorCipher::new(keys))
    }

    /// Transform one unit, consuming one key value from the key stream.
    pub fn encode_unit(&mut self, unit: u8) -> Result<u8, CodecError> {
        match self {
            Coder::Additive(cipher) => cipher.encode_unit(unit),
            Coder::Xor(cipher) => cipher.encode_unit(unit),
        }
    }
}
