//! Output Tests
//!
//! Tests for collision-free payload persistence.

use std::fs;

use fetchwire::output::{unique_path, write_payload};
use tempfile::TempDir;

// =============================================================================
// Disambiguation Tests
// =============================================================================

#[test]
fn test_unique_path_without_collision() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out.txt");

    assert_eq!(unique_path(&target), target);
}

#[test]
fn test_unique_path_increments_counter() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("out.txt");

    fs::write(&target, b"first").unwrap();
    assert_eq!(unique_path(&target), temp.path().join("out(1).txt"));

    fs::write(temp.path().join("out(1).txt"), b"second").unwrap();
    assert_eq!(unique_path(&target), temp.path().join("out(2).txt"));
}

#[test]
fn test_unique_path_without_extension() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("README");

    fs::write(&target, b"x").unwrap();
    assert_eq!(unique_path(&target), temp.path().join("README(1)"));
}

// =============================================================================
// Write Tests
// =============================================================================

#[test]
fn test_write_payload_persists_raw_bytes() {
    let temp = TempDir::new().unwrap();

    let written = write_payload(temp.path(), "data.bin", &[0x00, 0xFF, 0x80]).unwrap();

    assert_eq!(written, temp.path().join("data.bin"));
    assert_eq!(fs::read(&written).unwrap(), vec![0x00, 0xFF, 0x80]);
}

#[test]
fn test_write_payload_disambiguates_on_collision() {
    let temp = TempDir::new().unwrap();

    let first = write_payload(temp.path(), "out.txt", b"one").unwrap();
    let second = write_payload(temp.path(), "out.txt", b"two").unwrap();
    let third = write_payload(temp.path(), "out.txt", b"three").unwrap();

    assert_eq!(first, temp.path().join("out.txt"));
    assert_eq!(second, temp.path().join("out(1).txt"));
    assert_eq!(third, temp.path().join("out(2).txt"));

    // Earlier files are untouched.
    assert_eq!(fs::read(&first).unwrap(), b"one");
    assert_eq!(fs::read(&second).unwrap(), b"two");
    assert_eq!(fs::read(&third).unwrap(), b"three");
}
