//! Corruption anywhere in a container must be detected, with the right error.

use vaultfile::{
    DerivedKey, HEADER_LEN, KEY_LEN, NONCE_LEN, VaultError, decrypt_bytes, encrypt_bytes,
};
use zeroize::Zeroizing;

fn raw_key(byte: u8) -> DerivedKey {
    Zeroizing::new([byte; KEY_LEN])
}

/// Flip single bits across the ciphertext region (first byte, middle, and the
/// tag at the end) and expect authentication failure every time.
#[test]
fn tamper_ciphertext_fails() {
    let key = raw_key(1);
    let msg = b"message to protect";
    let clean = encrypt_bytes(msg, &key).unwrap();

    let positions = [HEADER_LEN, (HEADER_LEN + clean.len()) / 2, clean.len() - 1];
    for pos in positions {
        let mut ct = clean.clone();
        ct[pos] ^= 0x01;
        assert!(
            matches!(decrypt_bytes(&ct, &key), Err(VaultError::Authentication)),
            "flip at byte {pos} went undetected"
        );
    }
}

/// The nonce feeds tag verification, so corrupting it must also fail closed.
#[test]
fn tamper_nonce_fails() {
    let key = raw_key(1);
    let mut ct = encrypt_bytes(b"payload", &key).unwrap();
    ct[0] ^= 0x80;
    assert!(matches!(
        decrypt_bytes(&ct, &key),
        Err(VaultError::Authentication)
    ));
}

/// The checksum region is not covered by the AEAD tag; a flip there passes
/// authentication and must be caught by the post-decryption integrity check.
#[test]
fn tamper_checksum_fails_integrity() {
    let key = raw_key(1);
    let mut ct = encrypt_bytes(b"payload", &key).unwrap();
    ct[NONCE_LEN] ^= 0x01;
    assert!(matches!(
        decrypt_bytes(&ct, &key),
        Err(VaultError::Integrity)
    ));
}

#[test]
fn wrong_key_still_fails() {
    let ct = encrypt_bytes(b"payload", &raw_key(1)).unwrap();
    assert!(matches!(
        decrypt_bytes(&ct, &raw_key(2)),
        Err(VaultError::Authentication)
    ));
}

#[test]
fn truncated_container_is_malformed() {
    let key = raw_key(1);
    let ct = encrypt_bytes(b"payload", &key).unwrap();
    for len in [0, 1, HEADER_LEN - 1, HEADER_LEN] {
        assert!(
            matches!(
                decrypt_bytes(&ct[..len], &key),
                Err(VaultError::MalformedContainer)
            ),
            "len={len}"
        );
    }
}
