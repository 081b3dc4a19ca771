//! Password-based key derivation.
//!
//! Turns a password into a 256-bit symmetric key using Argon2id. Parameters
//! are fixed: derivation must be deterministic so the same password always
//! opens a container encrypted with it.
//!
//! # Security Guidelines
//!
//! When handling passwords and derived keys:
//! - Pass passwords as `SecretString` from the `secrecy` crate
//! - Derived keys are wrapped in `Zeroizing` and wiped on drop
//! - Derive once per operation; never persist the key

use argon2::{Algorithm, Argon2, Params, Version};
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::types::VaultError;

/// Derived key length in bytes (AES-256 key).
pub const KEY_LEN: usize = 32;

/// Argon2id iteration count.
const T_COST: u32 = 10;

/// Argon2id memory cost in KiB (64 MiB).
const MEM_KIB: u32 = 65536;

/// Argon2id lane count.
const PARALLELISM: u32 = 1;

/// Salt shared by every derivation. Identical passwords therefore produce
/// identical keys across unrelated containers; the container format carries
/// no salt field.
// TODO: switch to a random per-container salt once the format grows a header
// that can store it.
const SALT: &[u8] = b"static-salt-for-mvp-demo-app";

/// A 256-bit symmetric key, wiped from memory when dropped.
pub type DerivedKey = Zeroizing<[u8; KEY_LEN]>;

/// Derive a 32-byte key from a password using Argon2id.
///
/// # Errors
///
/// Returns `VaultError::KeyDerivation` if the hash cannot run (memory
/// allocation failure). There is no other failure mode.
pub fn derive_key(password: &SecretString) -> Result<DerivedKey, VaultError> {
    let params = Params::new(MEM_KIB, T_COST, PARALLELISM, Some(KEY_LEN))
        .map_err(|_| VaultError::KeyDerivation)?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut out = Zeroizing::new([0u8; KEY_LEN]);
    argon2
        .hash_password_into(password.expose_secret().as_bytes(), SALT, out.as_mut())
        .map_err(|_| VaultError::KeyDerivation)?;

    Ok(out)
}
