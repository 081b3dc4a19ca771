//! Library error type.

use thiserror::Error;

/// Library error type (no panics for expected failures).
///
/// Every operation surfaces its failure synchronously through one of these
/// variants. Nothing is retried and no partial plaintext is ever returned.
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    /// Password hashing failed (resource exhaustion inside Argon2).
    #[error("key derivation failed")]
    KeyDerivation,
    /// AEAD tag verification failed: wrong password, tampering, or corruption.
    #[error("authentication failed: wrong password or corrupted container")]
    Authentication,
    /// The plaintext checksum did not match the one stored in the container.
    #[error("checksum mismatch after decryption")]
    Integrity,
    /// The input is too short to hold a container header.
    #[error("malformed container")]
    MalformedContainer,
    /// An archive entry would resolve outside the extraction destination.
    #[error("archive entry escapes the destination directory: {0}")]
    PathTraversal(String),
    /// The packed archive could not be encoded or decoded.
    #[error("malformed archive")]
    Archive(#[from] bincode::Error),
    #[error("invalid argument: {0}")]
    Invalid(&'static str),
}
