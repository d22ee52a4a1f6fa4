#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use textcipher::alphabet::{ALPHABET, ALPHABET_LEN};
    use textcipher::cipher::{AdditiveCipher, Coder, XorCipher};
    use textcipher::keystream::KeyStream;
    use textcipher::types::CodecError;

    // --- KeyStream ---

    #[test]
    fn sequence_keystream_cycles_indefinitely() {
        let mut keys = KeyStream::cycle([1i64, 2, 3]).unwrap();
        let pulled: Vec<i64> = (0..7).map(|_| keys.get()).collect();
        assert_eq!(pulled, vec![1, 2, 3, 1, 2, 3, 1]);

        // Keep going well past one loop.
        for _ in 0..3000 {
            keys.get();
        }
        assert_eq!(keys.get(), 2);
    }

    #[test]
    fn text_keystream_cycles_code_points() {
        let mut keys = KeyStream::from_text("abc").unwrap();
        let pulled: Vec<i64> = (0..6).map(|_| keys.get()).collect();
        assert_eq!(pulled, vec![97, 98, 99, 97, 98, 99]);
    }

    #[test]
    fn scalar_keystream_is_constant() {
        let mut keys = KeyStream::scalar(-9);
        assert_eq!(keys.get(), -9);
        assert_eq!(keys.get(), -9);
    }

    #[test]
    fn empty_keystream_fails_with_invalid_key() {
        assert!(matches!(
            KeyStream::cycle(Vec::<i64>::new()),
            Err(CodecError::InvalidKey)
        ));
        assert!(matches!(
            KeyStream::from_text(""),
            Err(CodecError::InvalidKey)
        ));
    }

    // --- Additive cipher ---

    #[test]
    fn additive_encodes_with_positive_key() {
        let mut cipher = AdditiveCipher::new(KeyStream::scalar(3));
        assert_eq!(cipher.encode_unit(b'a').unwrap(), b'd');
    }

    #[test]
    fn additive_encodes_with_negative_key() {
        let mut cipher = AdditiveCipher::new(KeyStream::scalar(-3));
        assert_eq!(cipher.encode_unit(b'a').unwrap(), b'^');
    }

    #[test]
    fn additive_oversized_key_matches_reduced_key() {
        for unit in [b' ', b'0', b'a', b'z', b'~'] {
            let mut large = AdditiveCipher::new(KeyStream::scalar(255));
            let mut reduced = AdditiveCipher::new(KeyStream::scalar(255 % ALPHABET_LEN as i64));
            assert_eq!(
                large.encode_unit(unit).unwrap(),
                reduced.encode_unit(unit).unwrap()
            );
        }
    }

    #[test]
    fn additive_rejects_non_alphabet_unit() {
        let mut cipher = AdditiveCipher::new(KeyStream::scalar(1));
        assert!(matches!(
            cipher.encode_unit(b'\n'),
            Err(CodecError::UnsupportedCharacter(b'\n'))
        ));
        assert!(matches!(
            cipher.encode_unit(0x80),
            Err(CodecError::UnsupportedCharacter(0x80))
        ));
    }

    // --- Xor cipher ---

    #[test]
    fn xor_encodes_printable() {
        let mut cipher = XorCipher::new(KeyStream::scalar(3));
        // 97 ^ 3 = 98
        assert_eq!(cipher.encode_unit(b'a').unwrap(), b'b');
    }

    #[test]
    fn coder_dispatches_both_variants() {
        let mut additive = Coder::additive(KeyStream::scalar(3));
        let mut xor = Coder::xor(KeyStream::scalar(3));
        assert_eq!(additive.encode_unit(b'a').unwrap(), b'd');
        assert_eq!(xor.encode_unit(b'a').unwrap(), b'b');
    }

    // --- Algebraic properties ---

    proptest! {
        #[test]
        fn prop_additive_negated_key_round_trips(idx in 0usize..ALPHABET_LEN, key in any::<i32>()) {
            let unit = ALPHABET[idx];
            let mut enc = AdditiveCipher::new(KeyStream::scalar(key as i64));
            let mut dec = AdditiveCipher::new(KeyStream::scalar(-(key as i64)));
            let coded = enc.encode_unit(unit).unwrap();
            prop_assert!(ALPHABET.contains(&coded));
            prop_assert_eq!(dec.encode_unit(coded).unwrap(), unit);
        }

        #[test]
        fn prop_additive_sequence_round_trips(
            text_idx in proptest::collection::vec(0usize..ALPHABET_LEN, 1..64),
            keys in proptest::collection::vec(any::<i16>(), 1..8),
        ) {
            let keys: Vec<i64> = keys.into_iter().map(i64::from).collect();
            let stream = KeyStream::cycle(keys).unwrap();
            let mut enc = AdditiveCipher::new(stream.clone());
            let mut dec = AdditiveCipher::new(stream.negated());
            for idx in text_idx {
                let unit = ALPHABET[idx];
                let coded = enc.encode_unit(unit).unwrap();
                prop_assert_eq!(dec.encode_unit(coded).unwrap(), unit);
            }
        }

        #[test]
        fn prop_xor_is_self_inverse(unit in any::<u8>(), key in any::<i64>()) {
            let mut enc = XorCipher::new(KeyStream::scalar(key));
            let mut dec = XorCipher::new(KeyStream::scalar(key));
            let coded = enc.encode_unit(unit).unwrap();
            prop_assert_eq!(dec.encode_unit(coded).unwrap(), unit);
        }
    }
}
