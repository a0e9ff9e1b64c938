//! Password hashing: iterated SHA-256 with a per-user salt.
//!
//! The stored digest is `HASH_ROUNDS` chained applications of SHA-256, with
//! the salt mixed into the first round. Salts and digests are hex-encoded
//! for storage.

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Hash iteration count.
pub const HASH_ROUNDS: u32 = 100_000;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Digest length in bytes (SHA-256).
pub const DIGEST_LEN: usize = 32;

/// Generate a fresh random salt.
#[must_use]
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

/// Derive the storage digest for a password.
#[must_use]
pub fn hash_password(password: &str, salt: &[u8; SALT_LEN]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let mut digest = hasher.finalize();
    for _ in 1..HASH_ROUNDS {
        digest = Sha256::digest(digest);
    }
    digest.into()
}

/// Check a candidate password against a stored digest.
#[must_use]
pub fn verify_password(password: &str, salt: &[u8; SALT_LEN], expected: &[u8; DIGEST_LEN]) -> bool {
    let actual = hash_password(password, salt);
    // Fold the whole comparison so it cannot short-circuit.
    actual
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// Hex-encode bytes for storage.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a fixed-length hex field from a user record.
///
/// `username` names the record in the [`Error::MalformedRecord`] produced
/// on bad length or non-hex content.
pub fn decode_hex<const N: usize>(field: &str, username: &str) -> Result<[u8; N]> {
    if field.len() != 2 * N {
        return Err(Error::MalformedRecord(username.to_string()));
    }
    let mut out = [0u8; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let pair = field
            .get(2 * i..2 * i + 2)
            .ok_or_else(|| Error::MalformedRecord(username.to_string()))?;
        *slot = u8::from_str_radix(pair, 16)
            .map_err(|_| Error::MalformedRecord(username.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashing_is_deterministic() {
        let salt = [7u8; SALT_LEN];
        assert_eq!(hash_password("hunter2", &salt), hash_password("hunter2", &salt));
    }

    #[test]
    fn test_salt_changes_digest() {
        let a = hash_password("hunter2", &[1u8; SALT_LEN]);
        let b = hash_password("hunter2", &[2u8; SALT_LEN]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_password_changes_digest() {
        let salt = [7u8; SALT_LEN];
        assert_ne!(hash_password("hunter2", &salt), hash_password("hunter3", &salt));
    }

    #[test]
    fn test_verify_round_trip() {
        let salt = generate_salt();
        let digest = hash_password("hunter2", &salt);
        assert!(verify_password("hunter2", &salt, &digest));
        assert!(!verify_password("hunter3", &salt, &digest));
    }

    #[test]
    fn test_generated_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_hex_round_trip() {
        let salt = generate_salt();
        let encoded = encode_hex(&salt);
        let decoded: [u8; SALT_LEN] = decode_hex(&encoded, "ada").unwrap();
        assert_eq!(decoded, salt);
    }

    #[test]
    fn test_hex_rejects_bad_length_and_content() {
        assert!(decode_hex::<SALT_LEN>("abcd", "ada").is_err());
        let bad = "zz".repeat(SALT_LEN);
        assert!(decode_hex::<SALT_LEN>(&bad, "ada").is_err());
    }
}
