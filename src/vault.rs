//! The blocking operations exposed to callers.
//!
//! Each call runs the full pipeline synchronously in one thread and returns
//! the path it wrote. There is no shared state between operations, so
//! independent calls may run concurrently from separate threads; front-ends
//! that need responsiveness offload these calls to their own background
//! context.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::archive;
use crate::checksum::checksum;
use crate::container::Container;
use crate::crypto;
use crate::file::{self, DIR_SUFFIX, FILE_SUFFIX};
use crate::kdf::DerivedKey;
use crate::types::VaultError;

/// Encrypt a byte payload into container bytes.
///
/// Pipeline: checksum the plaintext, seal it under a fresh nonce, wrap
/// everything in the container layout.
pub fn encrypt_bytes(plaintext: &[u8], key: &DerivedKey) -> Result<Vec<u8>, VaultError> {
    let (nonce, ciphertext) = crypto::encrypt(plaintext, key)?;
    let container = Container {
        nonce,
        checksum: checksum(plaintext),
        ciphertext,
    };
    Ok(container.to_bytes())
}

/// Decrypt container bytes back into the payload.
///
/// The AEAD tag is verified first; the stored plaintext checksum is then
/// re-verified as an independent corruption check.
pub fn decrypt_bytes(data: &[u8], key: &DerivedKey) -> Result<Vec<u8>, VaultError> {
    let container = Container::from_bytes(data)?;
    let plaintext = crypto::decrypt(&container.nonce, &container.ciphertext, key)?;
    if checksum(&plaintext) != container.checksum {
        return Err(VaultError::Integrity);
    }
    Ok(plaintext)
}

/// Encrypt a single file into a container on disk.
///
/// When `output` is `None`, ".enc" is appended to the input name. Returns the
/// path written.
pub fn encrypt_file(
    input: &Path,
    output: Option<&Path>,
    key: &DerivedKey,
    force: bool,
) -> Result<PathBuf, VaultError> {
    let plaintext = Zeroizing::new(fs::read(input)?);
    let bytes = encrypt_bytes(&plaintext, key)?;
    let out = file::default_encrypt_path(input, output, FILE_SUFFIX);
    file::write_all_atomic(&out, &bytes, force)?;
    Ok(out)
}

/// Decrypt a single-file container back to a file.
///
/// When `output` is `None`, the ".enc" suffix is stripped (or ".dec" is
/// appended). Returns the path written.
pub fn decrypt_file(
    input: &Path,
    output: Option<&Path>,
    key: &DerivedKey,
    force: bool,
) -> Result<PathBuf, VaultError> {
    let data = fs::read(input)?;
    let plaintext = Zeroizing::new(decrypt_bytes(&data, key)?);
    let out = file::default_decrypt_path(input, output);
    file::write_all_atomic(&out, &plaintext, force)?;
    Ok(out)
}

/// Pack a directory tree and encrypt the archive into a container on disk.
///
/// When `output` is `None`, ".encdir" is appended to the directory name.
/// Returns the path written.
pub fn encrypt_directory(
    input_dir: &Path,
    output: Option<&Path>,
    key: &DerivedKey,
    force: bool,
) -> Result<PathBuf, VaultError> {
    let archive = Zeroizing::new(archive::pack(input_dir)?);
    let bytes = encrypt_bytes(&archive, key)?;
    let out = file::default_encrypt_path(input_dir, output, DIR_SUFFIX);
    file::write_all_atomic(&out, &bytes, force)?;
    Ok(out)
}

/// Decrypt a directory container and extract the tree under `output_dir`.
///
/// When `output_dir` is `None`, the ".encdir" suffix is stripped. Extraction
/// validates every entry path against the destination; a traversal attempt
/// aborts with `VaultError::PathTraversal` and entries already extracted are
/// left in place. Returns the destination directory.
pub fn decrypt_directory(
    input: &Path,
    output_dir: Option<&Path>,
    key: &DerivedKey,
) -> Result<PathBuf, VaultError> {
    let data = fs::read(input)?;
    let archive = Zeroizing::new(decrypt_bytes(&data, key)?);
    let dest = file::default_decrypt_path(input, output_dir);
    archive::unpack(&archive, &dest)?;
    Ok(dest)
}
