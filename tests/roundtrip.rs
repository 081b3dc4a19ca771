//! Password-based end-to-end round trips.

use secrecy::SecretString;
use vaultfile::{VaultError, decrypt_bytes, derive_key, encrypt_bytes};

/// Same password derived twice must open what the first derivation sealed.
#[test]
fn bytes_round_trip_across_derivations() {
    let k1 = derive_key(&SecretString::new("correct horse battery staple".into())).unwrap();
    let k2 = derive_key(&SecretString::new("correct horse battery staple".into())).unwrap();
    assert_eq!(*k1, *k2);

    let msg = b"message to protect";
    let ct = encrypt_bytes(msg, &k1).unwrap();
    assert_eq!(decrypt_bytes(&ct, &k2).unwrap(), msg);
}

#[test]
fn wrong_password_fails() {
    let right = derive_key(&SecretString::new("right".into())).unwrap();
    let wrong = derive_key(&SecretString::new("wrong".into())).unwrap();

    let ct = encrypt_bytes(b"not so secret", &right).unwrap();
    assert!(matches!(
        decrypt_bytes(&ct, &wrong),
        Err(VaultError::Authentication)
    ));
}
