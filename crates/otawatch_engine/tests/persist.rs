use otawatch_engine::{atomic_write, ensure_dir};
use std::fs;
use tempfile::TempDir;

#[test]
fn creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_content() {
    let temp = TempDir::new().unwrap();

    let first = atomic_write(temp.path(), "index.html", b"hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "index.html");
    assert_eq!(fs::read(&first).unwrap(), b"hello");

    let second = atomic_write(temp.path(), "index.html", b"world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), b"world");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let result = atomic_write(&file_path, "index.html", b"data");
    assert!(result.is_err());
    assert!(!file_path.join("index.html").exists());
}
