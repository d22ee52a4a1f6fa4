//! alphabet.rs
//!
//! Fixed printable alphabet for the additive cipher.
//!
//! The table is assembled from four character classes — space, decimal
//! digits, ASCII letters, ASCII punctuation — and sorted ascending by code
//! point at compile time. The additive cipher shifts positions within this
//! table, never raw code points, so its output always stays printable.

/// Number of entries in the printable alphabet (1 + 10 + 52 + 32).
pub const ALPHABET_LEN: usize = 95;

/// ASCII punctuation, matching the classic `!..~` punctuation set.
const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const fn build_alphabet() -> [u8; ALPHABET_LEN] {
    let mut table = [0u8; ALPHABET_LEN];
    let mut n = 0;

    table[n] = b' ';
    n += 1;

    let mut c = b'0';
    while c <= b'9' {
        table[n] = c;
        n += 1;
        c += 1;
    }

    let mut c = b'A';
    while c <= b'Z' {
        table[n] = c;
        n += 1;
        c += 1;
    }

    let mut c = b'a';
    while c <= b'z' {
        table[n] = c;
        n += 1;
        c += 1;
    }

    let mut i = 0;
    while i < PUNCTUATION.len() {
        table[n] = PUNCTUATION[i];
        n += 1;
        i += 1;
    }

    // Insertion sort; the classes overlap nowhere, so no duplicates arise.
    let mut i = 1;
    while i < ALPHABET_LEN {
        let mut j = i;
        while j > 0 && table[j - 1] > table[j] {
            let tmp = table[j - 1];
            table[j - 1] = table[j];
            table[j] = tmp;
            j -= 1;
        }
        i += 1;
    }

    table
}

/// Sorted printable alphabet, fixed for the lifetime of the process.
pub const ALPHABET: [u8; ALPHABET_LEN] = build_alphabet();

/// Smallest code point in the alphabet.
pub const MIN_CODE: u8 = ALPHABET[0];

/// Largest code point in the alphabet.
pub const MAX_CODE: u8 = ALPHABET[ALPHABET_LEN - 1];

/// Position of `unit` in the alphabet, or `None` if it is not a member.
pub fn index_of(unit: u8) -> Option<usize> {
    ALPHABET.binary_search(&unit).ok()
}

/// Reduce a key of any magnitude into `(-ALPHABET_LEN, ALPHABET_LEN)`,
/// preserving its sign. Shifting by the reduced key lands on the same
/// alphabet entry as shifting by the original.
pub fn normalize_shift(key: i64) -> i64 {
    let len = ALPHABET_LEN as u64;
    if key.unsigned_abs() >= len {
        ((key.unsigned_abs() % len) as i64) * key.signum()
    } else {
        key
    }
}
