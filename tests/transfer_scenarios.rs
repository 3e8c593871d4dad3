use assert_fs::prelude::*;
use std::fs;

use cmdfm::fs_ops::{open_text, TransferKind, TransferRequest};
use cmdfm::FmError;

fn dest_str(temp: &assert_fs::TempDir, rel: &str) -> String {
    temp.path().join(rel).to_string_lossy().into_owned()
}

#[test]
fn copy_keeps_source_and_writes_identical_bytes() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/a.txt").write_str("hello").unwrap();
    temp.child("dest").create_dir_all().unwrap();

    let req = TransferRequest::new(temp.path().join("src"), "a.txt", dest_str(&temp, "dest"), TransferKind::Copy);
    let dest = req.run(false).unwrap();

    assert_eq!(dest, temp.path().join("dest").join("a.txt"));
    assert_eq!(fs::read(&dest).unwrap(), b"hello");
    assert!(temp.path().join("src/a.txt").exists());
    // no temp files left next to the copy
    assert_eq!(fs::read_dir(temp.path().join("dest")).unwrap().count(), 1);
}

#[test]
fn move_removes_source() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/a.txt").write_str("hello").unwrap();
    temp.child("dest").create_dir_all().unwrap();

    let req = TransferRequest::new(temp.path().join("src"), "a.txt", dest_str(&temp, "dest"), TransferKind::Move);
    req.run(false).unwrap();

    assert!(!temp.path().join("src/a.txt").exists());
    assert_eq!(fs::read_to_string(temp.path().join("dest/a.txt")).unwrap(), "hello");
}

#[test]
fn missing_destination_directory_is_created_on_run() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/a.txt").write_str("hello").unwrap();

    let req = TransferRequest::new(
        temp.path().join("src"),
        "a.txt",
        dest_str(&temp, "new/deeper"),
        TransferKind::Copy,
    );
    assert!(req.plan().unwrap().dest_dir_missing);
    req.run(false).unwrap();
    assert!(temp.path().join("new/deeper/a.txt").is_file());
}

#[test]
fn nested_source_keeps_its_subdirectory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/sub/a.txt").write_str("x").unwrap();
    temp.child("dest").create_dir_all().unwrap();

    let req = TransferRequest::new(temp.path().join("src"), "sub\\a.txt", dest_str(&temp, "dest"), TransferKind::Copy);
    assert!(req.plan().unwrap().dest_dir_missing);
    let dest = req.run(false).unwrap();
    assert_eq!(dest, temp.path().join("dest").join("sub").join("a.txt"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "x");
    assert!(!temp.path().join("dest/a.txt").exists());
}

#[cfg(unix)]
#[test]
fn move_onto_a_hard_link_leaves_the_source_alone() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/a.txt").write_str("hello").unwrap();
    temp.child("dest").create_dir_all().unwrap();
    fs::hard_link(temp.path().join("src/a.txt"), temp.path().join("dest/a.txt")).unwrap();

    let req = TransferRequest::new(temp.path().join("src"), "a.txt", dest_str(&temp, "dest"), TransferKind::Move);
    assert!(matches!(req.run(true), Err(FmError::SameFile(_))));
    assert_eq!(fs::read_to_string(temp.path().join("src/a.txt")).unwrap(), "hello");
}

#[test]
fn declined_overwrite_leaves_destination_untouched() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/a.txt").write_str("new").unwrap();
    temp.child("dest/a.txt").write_str("old").unwrap();

    let req = TransferRequest::new(temp.path().join("src"), "a.txt", dest_str(&temp, "dest"), TransferKind::Move);
    let plan = req.plan().unwrap();
    assert!(plan.dest_file_exists);
    assert!(matches!(plan.execute(false), Err(FmError::AlreadyExists(_))));
    assert_eq!(fs::read_to_string(temp.path().join("dest/a.txt")).unwrap(), "old");
    assert!(temp.path().join("src/a.txt").exists());
}

#[test]
fn execute_notices_source_removed_after_planning() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/a.txt").write_str("x").unwrap();
    temp.child("dest").create_dir_all().unwrap();

    let req = TransferRequest::new(temp.path().join("src"), "a.txt", dest_str(&temp, "dest"), TransferKind::Copy);
    let plan = req.plan().unwrap();
    fs::remove_file(temp.path().join("src/a.txt")).unwrap();
    assert!(matches!(plan.execute(false), Err(FmError::NotAFile(_))));
}

#[test]
fn view_yields_every_line_including_unterminated_last() {
    let temp = assert_fs::TempDir::new().unwrap();
    let f = temp.child("notes.txt");
    f.write_str("one\r\ntwo\n\nfour").unwrap();
    let lines: Vec<String> = open_text(f.path()).unwrap().map(Result::unwrap).collect();
    assert_eq!(lines, vec!["one", "two", "", "four"]);

    assert!(open_text(temp.path()).is_err());
}
