//! Output placement: atomic writes and the container naming convention.

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::types::VaultError;

/// Suffix appended to single-file containers.
pub const FILE_SUFFIX: &str = "enc";

/// Suffix appended to directory-tree containers.
pub const DIR_SUFFIX: &str = "encdir";

/// Atomically write data to a file using a temporary file.
///
/// The temp file is created in the target's directory, written, fsynced, and
/// then renamed into place, so a crash never leaves a half-written output.
///
/// # Errors
///
/// Returns `VaultError::Invalid` when the target exists and `force` is not
/// set, and `VaultError::Io` for underlying failures.
pub fn write_all_atomic(path: &Path, data: &[u8], force: bool) -> Result<(), VaultError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        Some(_) => Path::new("."),
        None => return Err(VaultError::Invalid("output path has no parent")),
    };
    fs::create_dir_all(parent)?;

    if path.exists() && !force {
        return Err(VaultError::Invalid("output exists; use --force to overwrite"));
    }

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Best-effort removal; rename below is the real overwrite on Unix.
    if path.exists() {
        fs::remove_file(path)?;
    }
    tmp.persist(path).map_err(|e| VaultError::Io(e.error))?;
    Ok(())
}

/// Output path for encryption: the given `output`, or the input name with the
/// container suffix appended (`report.pdf` -> `report.pdf.enc`,
/// `photos/` -> `photos.encdir`).
pub fn default_encrypt_path(input: &Path, output: Option<&Path>, suffix: &str) -> PathBuf {
    output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let mut name = input
            .file_name()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "out".into());
        name.push(format!(".{suffix}"));
        input.with_file_name(name)
    })
}

/// Output path for decryption: the given `output`, or the input with its
/// `.enc`/`.encdir` suffix stripped; `.dec` is appended when neither suffix
/// is present.
pub fn default_decrypt_path(input: &Path, output: Option<&Path>) -> PathBuf {
    output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let parent = input.parent().unwrap_or_else(|| Path::new(""));
        let file_name = input.file_name().unwrap_or_else(|| OsStr::new("out"));

        if let Some(name) = file_name.to_str() {
            if let Some(stripped) = name.strip_suffix(".enc") {
                return parent.join(stripped);
            }
            if let Some(stripped) = name.strip_suffix(".encdir") {
                return parent.join(stripped);
            }
            return parent.join(format!("{name}.dec"));
        }

        // Non-UTF-8 file name: just append ".dec".
        let mut os = file_name.to_os_string();
        os.push(".dec");
        parent.join(os)
    })
}
