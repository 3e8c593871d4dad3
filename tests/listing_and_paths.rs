use assert_fs::prelude::*;
use std::path::PathBuf;

use cmdfm::fs_ops::{create_directory, list_entries, ListMode};
use cmdfm::path::{join_name, parse_user_path};
use cmdfm::FmError;

#[test]
fn flat_and_recursive_listings() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").touch().unwrap();
    temp.child("sub/b.txt").touch().unwrap();
    temp.child("sub/inner/c.txt").touch().unwrap();

    let flat = list_entries(temp.path(), ListMode::Flat).unwrap();
    assert_eq!(flat.entry_count(), 2);
    assert!(flat.entries().all(|p| p.parent() == Some(temp.path())));

    let deep = list_entries(temp.path(), ListMode::Recursive).unwrap();
    assert_eq!(deep.entry_count(), 5);
    assert_eq!(deep.error_count(), 0);
    assert!(deep.entries().any(|p| p.ends_with("inner/c.txt")));
}

#[test]
fn empty_directory_lists_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    assert_eq!(list_entries(temp.path(), ListMode::Recursive).unwrap().entry_count(), 0);
}

#[test]
fn listing_a_missing_directory_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let err = list_entries(&temp.path().join("gone"), ListMode::Flat).unwrap_err();
    assert!(matches!(err, FmError::NotFound(_)));
}

#[test]
fn create_directory_twice_reports_already_exists() {
    let temp = assert_fs::TempDir::new().unwrap();
    let target = temp.path().join("x").join("y");
    create_directory(&target).unwrap();
    let err = create_directory(&target).unwrap_err();
    assert!(err.to_string().starts_with("Already exists"), "{err}");
}

#[test]
fn user_paths_accept_windows_forms_and_reject_reserved_characters() {
    assert_eq!(parse_user_path("\"C:\\Users\\me\\My Docs\" ").unwrap(), PathBuf::from("C:/Users/me/My Docs"));
    assert_eq!(parse_user_path("/var/tmp").unwrap(), PathBuf::from("/var/tmp"));
    for bad in ["", "   ", "a*b", "dir/what?", "x:y", "<in>", "pipe|d"] {
        assert!(matches!(parse_user_path(bad), Err(FmError::InvalidPath { .. })), "{bad:?}");
    }
}

#[test]
fn file_names_join_as_text() {
    let base = PathBuf::from("/data");
    assert_eq!(join_name(&base, "/a.txt").unwrap(), PathBuf::from("/data/a.txt"));
    assert_eq!(join_name(&base, "sub\\b.txt").unwrap(), PathBuf::from("/data/sub/b.txt"));
    assert!(join_name(&base, "/").is_err());
}
