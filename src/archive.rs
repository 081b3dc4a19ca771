//! Directory tree packing and traversal-safe extraction.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::types::VaultError;

/// One record of a packed tree: a posix-style path relative to the packing
/// root, a directory flag, and (for files) the raw content bytes.
///
/// Directory entries carry no content. Paths never contain a leading `/` or
/// `..` segments; [`unpack`] rejects archives that violate this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub path: String,
    pub is_dir: bool,
    pub data: Vec<u8>,
}

/// Pack a directory tree into a single byte buffer.
///
/// Walks depth-first. Sibling order is whatever the directory listing yields,
/// so archive bytes are not reproducible across filesystems; unpacking does
/// not depend on order. Symlinks and other special files are skipped.
///
/// # Errors
///
/// Returns `VaultError::Io` on read failures and `VaultError::Invalid` for
/// file names that are not valid UTF-8.
pub fn pack(root: &Path) -> Result<Vec<u8>, VaultError> {
    let mut entries = Vec::new();
    for item in WalkDir::new(root).min_depth(1) {
        let item = item.map_err(|e| VaultError::Io(e.into()))?;
        let rel = item
            .path()
            .strip_prefix(root)
            .map_err(|_| VaultError::Invalid("walked entry outside the pack root"))?;
        let path = posix_relative(rel)?;
        if item.file_type().is_dir() {
            entries.push(ArchiveEntry {
                path,
                is_dir: true,
                data: Vec::new(),
            });
        } else if item.file_type().is_file() {
            let data = fs::read(item.path())?;
            entries.push(ArchiveEntry {
                path,
                is_dir: false,
                data,
            });
        }
    }
    Ok(bincode::serialize(&entries)?)
}

/// Unpack an archive into `dest`, creating the destination if needed.
///
/// Every entry path is validated before that entry writes anything: absolute
/// paths and `..` components are rejected outright, and the resolved location
/// is canonicalized after directory creation and must still be a descendant
/// of the destination root. A violation aborts the whole operation with
/// `VaultError::PathTraversal`.
///
/// Entries extracted before a failure are left in place; callers that need
/// all-or-nothing semantics should unpack into a fresh directory and move it
/// on success.
pub fn unpack(archive: &[u8], dest: &Path) -> Result<(), VaultError> {
    let entries: Vec<ArchiveEntry> = bincode::deserialize(archive)?;
    fs::create_dir_all(dest)?;
    let root = dest.canonicalize()?;

    for entry in &entries {
        let rel = relative_components(&entry.path)?;
        let target = root.join(&rel);
        if entry.is_dir {
            fs::create_dir_all(&target)?;
            if !target.canonicalize()?.starts_with(&root) {
                return Err(VaultError::PathTraversal(entry.path.clone()));
            }
        } else {
            let parent = target
                .parent()
                .ok_or_else(|| VaultError::PathTraversal(entry.path.clone()))?;
            fs::create_dir_all(parent)?;
            // Re-resolve through any symlinked intermediate directories before
            // the content write.
            let parent = parent.canonicalize()?;
            if !parent.starts_with(&root) {
                return Err(VaultError::PathTraversal(entry.path.clone()));
            }
            let name = target
                .file_name()
                .ok_or_else(|| VaultError::PathTraversal(entry.path.clone()))?;
            fs::write(parent.join(name), &entry.data)?;
        }
    }
    Ok(())
}

/// Render a walked path as the slash-separated relative form stored on the
/// wire.
fn posix_relative(rel: &Path) -> Result<String, VaultError> {
    let mut parts = Vec::new();
    for comp in rel.components() {
        match comp {
            Component::Normal(part) => {
                parts.push(
                    part.to_str()
                        .ok_or(VaultError::Invalid("non-UTF-8 file name"))?,
                );
            }
            _ => return Err(VaultError::Invalid("non-relative path in walk")),
        }
    }
    Ok(parts.join("/"))
}

/// Lexically validate an entry path: only normal components survive; `..`,
/// absolute paths, and empty paths are traversal attempts.
fn relative_components(raw: &str) -> Result<PathBuf, VaultError> {
    let mut clean = PathBuf::new();
    for comp in Path::new(raw).components() {
        match comp {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(VaultError::PathTraversal(raw.to_owned()));
            }
        }
    }
    if clean.as_os_str().is_empty() {
        return Err(VaultError::PathTraversal(raw.to_owned()));
    }
    Ok(clean)
}
