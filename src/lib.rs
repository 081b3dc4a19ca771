#![forbid(unsafe_code)]
//! # vaultfile — password-protected containers for files and directory trees.
//!
//! `vaultfile` encrypts a file or an entire directory into a single
//! tamper-evident container and reverses the process. Keys are derived from a
//! password with Argon2id; payloads are sealed with AES-256-GCM, and the
//! container carries a SHA-256 checksum of the plaintext as a second,
//! independent integrity check.
//!
//! ## Container layout
//! ```text
//! [nonce (12)] [checksum (32)] [ciphertext ‖ tag (>= 16)]
//! ```
//! Directory trees are packed into a single archive of path+content entries
//! before sealing; extraction validates every entry path against the
//! destination, so a crafted container cannot write outside it.
//!
//! ## Example: encrypt and decrypt a byte buffer
//! ```no_run
//! use vaultfile::{derive_key, encrypt_bytes, decrypt_bytes};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("correct horse".into());
//! let key = derive_key(&password).unwrap();
//!
//! let container = encrypt_bytes(b"attack at dawn", &key).unwrap();
//! let plaintext = decrypt_bytes(&container, &key).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```
//!
//! ## Example: directory mode
//! ```no_run
//! use std::path::Path;
//! use vaultfile::{derive_key, encrypt_directory, decrypt_directory};
//! use secrecy::SecretString;
//!
//! let key = derive_key(&SecretString::new("pw".into())).unwrap();
//! let out = encrypt_directory(Path::new("photos"), None, &key, false).unwrap();
//! decrypt_directory(&out, Some(Path::new("restored")), &key).unwrap();
//! ```
//!
//! Safety notes
//! - Protects data at rest. Does not defend against compromised hosts/side channels.

mod archive;
mod checksum;
mod container;
mod crypto;
mod file;
mod kdf;
mod types;
mod vault;

// Re-export public API from modules
pub use archive::{ArchiveEntry, pack, unpack};
pub use checksum::{CHECKSUM_LEN, checksum, checksum_file, to_hex_lower};
pub use container::{Container, HEADER_LEN, MIN_CONTAINER_LEN};
pub use crypto::{NONCE_LEN, TAG_LEN, generate_nonce};
pub use file::{DIR_SUFFIX, FILE_SUFFIX, default_decrypt_path, default_encrypt_path};
pub use kdf::{DerivedKey, KEY_LEN, derive_key};
pub use types::VaultError;
pub use vault::{
    decrypt_bytes, decrypt_directory, decrypt_file, encrypt_bytes, encrypt_directory, encrypt_file,
};

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    fn raw_key(byte: u8) -> DerivedKey {
        Zeroizing::new([byte; KEY_LEN])
    }

    #[test]
    fn round_trip_small() {
        let key = raw_key(1);
        let ct = encrypt_bytes(b"hi", &key).unwrap();
        assert_eq!(decrypt_bytes(&ct, &key).unwrap(), b"hi");
    }

    #[test]
    fn wrong_key_fails() {
        let ct = encrypt_bytes(b"data", &raw_key(1)).unwrap();
        assert!(matches!(
            decrypt_bytes(&ct, &raw_key(2)),
            Err(VaultError::Authentication)
        ));
    }

    #[test]
    fn short_buffer_is_malformed() {
        assert!(matches!(
            decrypt_bytes(&[0u8; 10], &raw_key(1)),
            Err(VaultError::MalformedContainer)
        ));
    }
}
