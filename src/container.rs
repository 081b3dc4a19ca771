//! On-disk container format.
//!
//! A container is the fixed-order concatenation
//! `[nonce (12)][checksum (32)][ciphertext ‖ tag]` and is the sole unit of
//! persistence for an encrypted artifact. There is no magic number and no
//! version field; format changes are not backward compatible.

use crate::checksum::CHECKSUM_LEN;
use crate::crypto::{NONCE_LEN, TAG_LEN};
use crate::types::VaultError;

/// Byte offset where the ciphertext begins.
pub const HEADER_LEN: usize = NONCE_LEN + CHECKSUM_LEN;

/// Smallest valid container: header plus the tag of an empty ciphertext.
pub const MIN_CONTAINER_LEN: usize = HEADER_LEN + TAG_LEN;

/// Parsed container envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub nonce: [u8; NONCE_LEN],
    pub checksum: [u8; CHECKSUM_LEN],
    /// AEAD output; the last 16 bytes are the authentication tag.
    pub ciphertext: Vec<u8>,
}

impl Container {
    /// Serialize to the wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.checksum);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Parse the wire layout.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::MalformedContainer` when `bytes` is shorter than
    /// [`MIN_CONTAINER_LEN`]. No cryptographic checks happen here.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VaultError> {
        if bytes.len() < MIN_CONTAINER_LEN {
            return Err(VaultError::MalformedContainer);
        }
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[..NONCE_LEN]);
        let mut checksum = [0u8; CHECKSUM_LEN];
        checksum.copy_from_slice(&bytes[NONCE_LEN..HEADER_LEN]);
        Ok(Self {
            nonce,
            checksum,
            ciphertext: bytes[HEADER_LEN..].to_vec(),
        })
    }
}
