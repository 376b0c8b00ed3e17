use rand::Rng;
use rand::RngExt;

/// The characters eligible for selection: uppercase and lowercase ASCII
/// letters, digits, and the 32 standard ASCII punctuation symbols.
/// 94 entries, no duplicates.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789\
                              !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Length of the key emitted by the CLI.
pub const KEY_LENGTH: usize = 256;

/// Generates a random key of the given length.
///
/// Each position is filled by an independent, uniform draw from [`ALPHABET`]
/// (with replacement, so adjacent repeats are possible). Length 0 yields an
/// empty string.
///
/// Uniformity is the only distribution guarantee made here; callers that need
/// a specific unpredictability property should verify the backing RNG
/// themselves.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::rng(), length)
}

/// Generates a random key of the given length from a caller-supplied RNG.
pub fn generate_with<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}
