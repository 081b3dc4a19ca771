//! Crafted archives must never write outside the extraction destination.

use std::fs;

use tempfile::tempdir;
use vaultfile::{ArchiveEntry, VaultError, unpack};

fn file_entry(path: &str, data: &[u8]) -> ArchiveEntry {
    ArchiveEntry {
        path: path.to_owned(),
        is_dir: false,
        data: data.to_vec(),
    }
}

fn encode(entries: Vec<ArchiveEntry>) -> Vec<u8> {
    bincode::serialize(&entries).unwrap()
}

#[test]
fn parent_dir_entry_rejected() {
    let base = tempdir().unwrap();
    let dest = base.path().join("a/b");

    let archive = encode(vec![file_entry("../../escape.txt", b"gotcha")]);
    let res = unpack(&archive, &dest);
    assert!(matches!(res, Err(VaultError::PathTraversal(_))));

    // Nothing may appear where the traversal pointed.
    assert!(!base.path().join("escape.txt").exists());
    assert!(!base.path().join("a/escape.txt").exists());
}

#[test]
fn absolute_path_entry_rejected() {
    let base = tempdir().unwrap();
    let dest = base.path().join("out");
    let escape = base.path().join("absolute-escape.txt");

    let archive = encode(vec![file_entry(
        escape.to_str().unwrap(),
        b"gotcha",
    )]);
    assert!(matches!(
        unpack(&archive, &dest),
        Err(VaultError::PathTraversal(_))
    ));
    assert!(!escape.exists());
}

#[test]
fn nested_parent_component_rejected() {
    let base = tempdir().unwrap();
    let dest = base.path().join("out");

    // The dotdot is buried behind a normal prefix; lexical normalization must
    // still catch it.
    let archive = encode(vec![file_entry("sub/../../escape.txt", b"gotcha")]);
    assert!(matches!(
        unpack(&archive, &dest),
        Err(VaultError::PathTraversal(_))
    ));
    assert!(!base.path().join("escape.txt").exists());
}

#[test]
fn empty_entry_path_rejected() {
    let base = tempdir().unwrap();
    let dest = base.path().join("out");

    let archive = encode(vec![file_entry("", b"gotcha")]);
    assert!(matches!(
        unpack(&archive, &dest),
        Err(VaultError::PathTraversal(_))
    ));
}

#[test]
fn curdir_components_are_harmless() {
    let base = tempdir().unwrap();
    let dest = base.path().join("out");

    let archive = encode(vec![file_entry("./sub/./ok.txt", b"fine")]);
    unpack(&archive, &dest).unwrap();
    assert_eq!(fs::read(dest.join("sub/ok.txt")).unwrap(), b"fine");
}

/// A traversal entry aborts the operation but earlier entries stay on disk;
/// extraction is not transactional.
#[test]
fn entries_before_failure_are_kept() {
    let base = tempdir().unwrap();
    let dest = base.path().join("out");

    let archive = encode(vec![
        file_entry("good.txt", b"kept"),
        file_entry("../evil.txt", b"gotcha"),
    ]);
    assert!(matches!(
        unpack(&archive, &dest),
        Err(VaultError::PathTraversal(_))
    ));
    assert_eq!(fs::read(dest.join("good.txt")).unwrap(), b"kept");
    assert!(!base.path().join("evil.txt").exists());
}

#[test]
fn garbage_archive_is_rejected() {
    let base = tempdir().unwrap();
    let dest = base.path().join("out");
    assert!(matches!(
        unpack(b"\xFF\xFF\xFF\xFF not an archive", &dest),
        Err(VaultError::Archive(_))
    ));
}
