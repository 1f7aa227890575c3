//! I/O boundary for the alias store
//!
//! Abstracts the handful of filesystem operations the store needs,
//! allowing tests to substitute a mock implementation.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write lines to file, newline-terminated, replacing any existing
    /// content.
    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Enumerate plain files directly under `dir` (non-recursive), in
    /// whatever order the walk yields them.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> io::Result<()> {
        let mut content = lines.join("\n");
        content.push('\n');
        std::fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}
