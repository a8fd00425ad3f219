//! Salted password hashing with PBKDF2-HMAC-SHA1.
//!
//! Hashes stored by existing Wapitia deployments depend on these parameters;
//! changing them invalidates every stored hash.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha1::Sha1;
use zeroize::{Zeroize, Zeroizing};

pub const ITERATIONS: u32 = 10_000;

/// Derived key length in bits.
pub const KEY_LENGTH: usize = 256;

/// Hash `password` with `salt`. The password buffer is zeroed afterwards,
/// so callers must not rely on its contents once this returns.
#[must_use]
pub fn hash(password: &mut [u8], salt: &[u8]) -> Vec<u8> {
    let mut key = vec![0_u8; KEY_LENGTH / 8];
    pbkdf2::pbkdf2_hmac::<Sha1>(password, salt, ITERATIONS, &mut key);
    password.zeroize();
    key
}

/// Hash `password` with `salt` and encode the result as padded standard
/// base64, the form stored in user tables.
#[must_use]
pub fn encrypt(password: &str, salt: &[u8]) -> String {
    let mut buf = Zeroizing::new(password.as_bytes().to_vec());
    STANDARD.encode(hash(&mut buf, salt))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn hash_has_key_length() {
        let mut pw = *b"password";
        let key = hash(&mut pw, b"salt");
        assert_eq!(key.len(), 32);
    }

    #[test]
    fn hash_clears_password_buffer() {
        let mut pw = *b"password";
        let key = hash(&mut pw, b"salt");
        assert_eq!(pw, [0_u8; 8]);
        assert_ne!(key, vec![0_u8; 32]);
    }

    #[test]
    fn encrypt_known_values() {
        assert_eq!(
            encrypt("password", b"salt"),
            "osJkYYaChHS3VFkaVHwY8TLYjXRMFSZVpHAWGhoFITU="
        );
        assert_eq!(
            encrypt("wapiti", b"NaCl-2019"),
            "1AYUxGKoSX0TDcfEH8ckZqS1c/wHwqBrSOjJKKAEU/I="
        );
        assert_eq!(
            encrypt("", b"salt"),
            "sBo4jj9EEHw9otN5nJb/64e8lkK4dG9ochhBRzJ3/4g="
        );
    }

    #[test]
    fn salt_changes_hash() {
        assert_ne!(encrypt("wapiti", b"a"), encrypt("wapiti", b"b"));
    }
}
