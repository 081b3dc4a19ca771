//! Plaintext integrity checksum.
//!
//! The container stores a SHA-256 hash of the plaintext next to the AEAD
//! ciphertext. The tag already authenticates the ciphertext; this hash is a
//! second, independent corruption sentinel and lets callers compare the
//! plaintext identity of two differently-encrypted containers without
//! comparing plaintexts.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::types::VaultError;

/// Checksum length in bytes (SHA-256 digest).
pub const CHECKSUM_LEN: usize = 32;

/// Hash a byte slice.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    Sha256::digest(data).into()
}

/// Hash a file (streaming) without loading it into memory.
pub fn checksum_file(path: &Path) -> Result<[u8; CHECKSUM_LEN], VaultError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buf = vec![0u8; 64 * 1024];
    let mut h = Sha256::default();
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        h.update(&buf[..n]);
    }
    Ok(h.finalize().into())
}

/// Helper to hex-encode (lower-case) for display or logs.
pub fn to_hex_lower(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}
