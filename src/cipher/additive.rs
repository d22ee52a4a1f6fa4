//! cipher/additive.rs
//!
//! Additive (Caesar-style) cipher over the fixed printable alphabet.
//!
//! The shift operates on alphabet *positions*, not raw code points: the
//! unit's index in the sorted table moves by the key amount and wraps modulo
//! the table size, so output is always a printable alphabet member. Inverting
//! a pass takes the same cipher keyed by the negated key stream.

use crate::alphabet::{index_of, normalize_shift, ALPHABET, ALPHABET_LEN};
use crate::keystream::KeyStream;
use crate::types::CodecError;

/// Caesar-style substitution over the printable alphabet.
#[derive(Debug, Clone)]
pub struct AdditiveCipher {
    keys: KeyStream,
}

impl AdditiveCipher {
    pub fn new(keys: KeyStream) -> Self {
        Self { keys }
    }

    /// Shift `unit` within the alphabet by the next key value.
    ///
    /// Fails with [`CodecError::UnsupportedCharacter`] when `unit` is not an
    /// alphabet member. The membership check runs before the key pull, so a
    /// rejected unit consumes no key value.
    pub fn encode_unit(&mut self, unit: u8) -> Result<u8, CodecError> {
        let index = index_of(unit).ok_or(CodecError::UnsupportedCharacter(unit))? as i64;
        let key = normalize_shift(self.keys.get());
        let len = ALPHABET_LEN as i64;

        // index in [0, len) and key in (-len, len): one step of wrap suffices.
        let mut shifted = index + key;
        if shifted > len - 1 {
            shifted -= len;
        } else if shifted < 0 {
            shifted += len;
        }

        Ok(ALPHABET[shifted as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn additive(key: i64) -> AdditiveCipher {
        AdditiveCipher::new(KeyStream::scalar(key))
    }

    #[test]
    fn positive_key_shifts_forward() {
        assert_eq!(additive(3).encode_unit(b'a').unwrap(), b'd');
    }

    #[test]
    fn negative_key_shifts_backward() {
        assert_eq!(additive(-3).encode_unit(b'a').unwrap(), b'^');
    }

    #[test]
    fn wraps_past_the_table_end() {
        // 'z' sits at index 90; 90 + 38 = 128 wraps to 33 = 'A'.
        assert_eq!(additive(38).encode_unit(b'z').unwrap(), b'A');
        // '~' is the last entry; one step lands on the first, ' '.
        assert_eq!(additive(1).encode_unit(b'~').unwrap(), b' ');
    }

    #[test]
    fn wraps_before_the_table_start() {
        assert_eq!(additive(-1).encode_unit(b' ').unwrap(), b'~');
    }

    #[test]
    fn oversized_key_reduces_modulo_table_size() {
        // 255 % 95 = 65, sign preserved.
        let direct = additive(255).encode_unit(b'a').unwrap();
        let reduced = additive(65).encode_unit(b'a').unwrap();
        assert_eq!(direct, reduced);

        let direct = additive(-255).encode_unit(b'a').unwrap();
        let reduced = additive(-65).encode_unit(b'a').unwrap();
        assert_eq!(direct, reduced);
        assert_eq!(direct, b' ');
    }

    #[test]
    fn non_alphabet_unit_is_rejected() {
        let err = additive(3).encode_unit(b'\n').unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedCharacter(b'\n')));
    }

    #[test]
    fn sequence_key_advances_per_unit() {
        let keys = KeyStream::cycle([1i64, 2]).unwrap();
        let mut cipher = AdditiveCipher::new(keys);
        assert_eq!(cipher.encode_unit(b'a').unwrap(), b'b');
        assert_eq!(cipher.encode_unit(b'a').unwrap(), b'c');
        assert_eq!(cipher.encode_unit(b'a').unwrap(), b'b');
    }
}
