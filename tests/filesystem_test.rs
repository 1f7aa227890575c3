//! Tests for the FileSystem boundary used by the store.

use std::fs;

use tempfile::TempDir;

use ally::fsio::{FileSystem, RealFileSystem};

#[test]
fn given_lines_when_write_lines_then_newline_terminated() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("x.cmd");
    let fs_io = RealFileSystem;

    fs_io
        .write_lines(&path, &["@echo off".into(), "dir %*".into()])
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "@echo off\ndir %*\n");
}

#[test]
fn given_existing_file_when_write_lines_then_replaced_whole() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("x.cmd");
    fs::write(&path, "an old script with much longer content\n").unwrap();
    let fs_io = RealFileSystem;

    fs_io.write_lines(&path, &["@echo off".into(), "dir".into()]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "@echo off\ndir\n");
}

#[test]
fn given_nested_entries_when_list_files_then_only_top_level_files() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.cmd"), "x").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub").join("b.cmd"), "x").unwrap();
    let fs_io = RealFileSystem;

    let files = fs_io.list_files(temp.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name().unwrap().to_str().unwrap(), "a.cmd");
}
