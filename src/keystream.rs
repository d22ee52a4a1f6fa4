//! keystream.rs
//!
//! Unbounded, cyclic source of integer key values.
//!
//! A [`KeyStream`] wraps either a single scalar key or a finite, non-empty
//! key sequence. `get()` can be called unboundedly many times: a scalar
//! stream always returns the same value, a sequence stream wraps back to its
//! first element after the last one, indefinitely.

use crate::types::CodecError;

/// One key element before normalization. Integers pass through unchanged
/// (negatives included); characters map to their code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyValue {
    Number(i64),
    Letter(char),
}

impl KeyValue {
    /// Normalized integer form of this key element.
    pub fn as_int(self) -> i64 {
        match self {
            KeyValue::Number(n) => n,
            KeyValue::Letter(c) => c as i64,
        }
    }
}

impl From<i64> for KeyValue {
    fn from(n: i64) -> Self {
        KeyValue::Number(n)
    }
}

impl From<i32> for KeyValue {
    fn from(n: i32) -> Self {
        KeyValue::Number(n.into())
    }
}

impl From<char> for KeyValue {
    fn from(c: char) -> Self {
        KeyValue::Letter(c)
    }
}

/// Cyclic key source driving per-unit encoding.
///
/// Position state exists only for sequence-backed streams and advances one
/// element per `get()` call. Not meant to be shared between ciphers; clone
/// or [`restarted`](KeyStream::restarted) per consumer instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStream {
    Scalar(i64),
    Sequence { keys: Vec<i64>, cursor: usize },
}

impl KeyStream {
    /// Key stream that always yields the same value.
    pub fn scalar(key: impl Into<KeyValue>) -> Self {
        KeyStream::Scalar(key.into().as_int())
    }

    /// Key stream cycling over `keys` indefinitely.
    ///
    /// Fails with [`CodecError::InvalidKey`] when `keys` is empty.
    pub fn cycle<I>(keys: I) -> Result<Self, CodecError>
    where
        I: IntoIterator,
        I::Item: Into<KeyValue>,
    {
        let keys: Vec<i64> = keys.into_iter().map(|k| k.into().as_int()).collect();
        if keys.is_empty() {
            return Err(CodecError::InvalidKey);
        }
        Ok(KeyStream::Sequence { keys, cursor: 0 })
    }

    /// Key stream cycling over the code points of `text`.
    pub fn from_text(text: &str) -> Result<Self, CodecError> {
        Self::cycle(text.chars())
    }

    /// Next key value. Never terminates; sequence streams wrap in place.
    pub fn get(&mut self) -> i64 {
        match self {
            KeyStream::Scalar(key) => *key,
            KeyStream::Sequence { keys, cursor } => {
                let key = keys[*cursor];
                *cursor += 1;
                if *cursor == keys.len() {
                    *cursor = 0;
                }
                key
            }
        }
    }

    /// Same keys with every sign flipped, position rewound to the start.
    /// Feeding an additive cipher's output through an additive cipher keyed
    /// by the negated stream restores the original text.
    pub fn negated(&self) -> Self {
        match self {
            KeyStream::Scalar(key) => KeyStream::Scalar(-key),
            KeyStream::Sequence { keys, .. } => KeyStream::Sequence {
                keys: keys.iter().map(|k| -k).collect(),
                cursor: 0,
            },
        }
    }

    /// Same keys, position rewound to the start. XOR decoding needs a stream
    /// positioned exactly as the encoding pass started.
    pub fn restarted(&self) -> Self {
        match self {
            KeyStream::Scalar(key) => KeyStream::Scalar(*key),
            KeyStream::Sequence { keys, .. } => KeyStream::Sequence {
                keys: keys.clone(),
                cursor: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_stream_repeats_forever() {
        let mut keys = KeyStream::scalar(7);
        for _ in 0..100 {
            assert_eq!(keys.get(), 7);
        }
    }

    #[test]
    fn sequence_stream_cycles() {
        let mut keys = KeyStream::cycle([1i64, 2, 3]).unwrap();
        let pulled: Vec<i64> = (0..7).map(|_| keys.get()).collect();
        assert_eq!(pulled, vec![1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn text_stream_yields_code_points() {
        let mut keys = KeyStream::from_text("abc").unwrap();
        let pulled: Vec<i64> = (0..4).map(|_| keys.get()).collect();
        assert_eq!(pulled, vec![97, 98, 99, 97]);
    }

    #[test]
    fn char_scalar_normalizes_to_code_point() {
        let mut keys = KeyStream::scalar('a');
        assert_eq!(keys.get(), 97);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let err = KeyStream::cycle(Vec::<i64>::new()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidKey));
    }

    #[test]
    fn negated_rewinds_and_flips() {
        let mut keys = KeyStream::cycle([1i64, -2, 3]).unwrap();
        keys.get();
        let mut neg = keys.negated();
        assert_eq!(neg.get(), -1);
        assert_eq!(neg.get(), 2);
        assert_eq!(neg.get(), -3);
    }

    #[test]
    fn restarted_rewinds_position() {
        let mut keys = KeyStream::cycle([5i64, 6]).unwrap();
        keys.get();
        let mut fresh = keys.restarted();
        assert_eq!(fresh.get(), 5);
    }
}
