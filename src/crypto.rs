//! Core encryption and decryption primitives.

use aes_gcm::Aes256Gcm;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use getrandom::fill as getrandom;

use crate::kdf::DerivedKey;
use crate::types::VaultError;

/// AEAD nonce length (96 bits, AES-GCM).
pub const NONCE_LEN: usize = 12;

/// AEAD authentication tag length (128 bits).
pub const TAG_LEN: usize = 16;

/// Generate a cryptographically secure random nonce.
///
/// A nonce must never repeat under the same key, so every encryption draws a
/// fresh one from the OS CSPRNG.
pub fn generate_nonce() -> Result<[u8; NONCE_LEN], VaultError> {
    let mut nonce = [0u8; NONCE_LEN];
    getrandom(&mut nonce).map_err(|_| VaultError::Io(std::io::Error::other("OS RNG unavailable")))?;
    Ok(nonce)
}

/// Encrypt plaintext under the derived key with a fresh random nonce.
///
/// # Returns
///
/// The nonce used and the ciphertext with the 16-byte tag appended. No
/// associated data is bound in; fields outside the ciphertext rely on the
/// fixed container layout.
pub fn encrypt(
    plaintext: &[u8],
    key: &DerivedKey,
) -> Result<([u8; NONCE_LEN], Vec<u8>), VaultError> {
    let cipher =
        Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| VaultError::Invalid("key length"))?;
    let nonce = generate_nonce()?;
    let ciphertext = cipher
        .encrypt(GenericArray::from_slice(&nonce), plaintext)
        .map_err(|_| VaultError::Invalid("payload too large for a single AEAD message"))?;
    Ok((nonce, ciphertext))
}

/// Decrypt ciphertext-with-tag under the derived key.
///
/// # Errors
///
/// Returns `VaultError::Authentication` when tag verification fails — wrong
/// key, or any corruption of nonce, ciphertext, or tag. No partial plaintext
/// is released.
pub fn decrypt(
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    key: &DerivedKey,
) -> Result<Vec<u8>, VaultError> {
    let cipher =
        Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| VaultError::Invalid("key length"))?;
    cipher
        .decrypt(GenericArray::from_slice(nonce), ciphertext)
        .map_err(|_| VaultError::Authentication)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    #[test]
    fn nonces_are_fresh() {
        let a = generate_nonce().unwrap();
        let b = generate_nonce().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn empty_plaintext_is_tag_only() {
        let key: DerivedKey = Zeroizing::new([7u8; 32]);
        let (nonce, ct) = encrypt(b"", &key).unwrap();
        assert_eq!(ct.len(), TAG_LEN);
        assert_eq!(decrypt(&nonce, &ct, &key).unwrap(), b"");
    }
}
