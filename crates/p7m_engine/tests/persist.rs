use std::fs;

use p7m_engine::{ensure_output_dir, PersistError, StagedFile};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("p7m-to-pdf");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn existing_output_dir_is_left_alone() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("p7m-to-pdf");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("old.pdf"), "keep").unwrap();

    ensure_output_dir(&dir).unwrap();
    ensure_output_dir(&dir).unwrap();

    assert_eq!(fs::read_to_string(dir.join("old.pdf")).unwrap(), "keep");
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
}

#[test]
fn file_in_place_of_dir_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("p7m-to-pdf");
    fs::write(&path, "x").unwrap();

    let err = ensure_output_dir(&path).unwrap_err();
    assert!(matches!(err, PersistError::OutputDir { .. }));
}

#[test]
fn staged_file_replaces_target_on_commit() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("installer.exe");
    fs::write(&target, "stale").unwrap();

    let mut staged = StagedFile::new_in(temp.path()).unwrap();
    staged.write_chunk(b"fresh ").unwrap();
    staged.write_chunk(b"bytes").unwrap();
    let written = staged.commit(&target).unwrap();

    assert_eq!(written, target);
    assert_eq!(fs::read_to_string(&target).unwrap(), "fresh bytes");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn dropped_staged_file_leaves_nothing_behind() {
    let temp = TempDir::new().unwrap();
    {
        let mut staged = StagedFile::new_in(temp.path()).unwrap();
        staged.write_chunk(b"partial").unwrap();
    }

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}
