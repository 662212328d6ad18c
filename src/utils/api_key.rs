use rand::Rng;
use rand::distr::Alphanumeric;
use subtle::ConstantTimeEq;

pub const MIN_API_KEY_LENGTH: usize = 16;
pub const DEFAULT_API_KEY_LENGTH: usize = 32;
pub const MAX_API_KEY_COUNT: usize = 20;

/// Random alphanumeric string drawn from the thread-local CSPRNG.
pub fn random_alphanumeric(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Generates `count` independent API keys of `length` characters.
pub fn generate_api_keys(length: usize, count: usize) -> Vec<String> {
    (0..count).map(|_| random_alphanumeric(length)).collect()
}

/// Compares a presented key with the configured one in constant time.
///
/// Keys of different length never match; the length itself is not secret.
pub fn keys_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}
