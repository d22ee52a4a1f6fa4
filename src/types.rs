//! types.rs
//!
//! Unified error type for the cipher core and its boundary layers.

use std::fmt;
use std::io;

/// Unified error covering key construction, alphabet membership,
/// configuration, and I/O.
///
/// - Ergonomic `From<io::Error>` enables `?` across the stream layer.
/// - Key and alphabet errors abort the current encode immediately; the sink
///   keeps whatever it has already accepted.
#[derive(Debug)]
pub enum CodecError {
    /// A sequence-backed key stream was constructed with zero elements.
    InvalidKey,

    /// Input unit is not a member of the additive cipher's alphabet.
    UnsupportedCharacter(u8),

    /// Boundary-layer configuration error, raised before any I/O begins.
    Config(String),

    /// Underlying storage or console access failed.
    Io(io::Error),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidKey => {
                write!(f, "key sequence must contain at least one element")
            }
            CodecError::UnsupportedCharacter(unit) => {
                write!(
                    f,
                    "unit 0x{unit:02x} is not a member of the printable alphabet"
                )
            }
            CodecError::Config(msg) => write!(f, "configuration error: {msg}"),
            CodecError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodecError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        CodecError::Io(e)
    }
}
