//! File-backed alias store
//!
//! One `.cmd` script per alias under the data directory. The directory is
//! the single source of truth: there is no in-memory cache, every
//! operation reads the filesystem fresh.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::alias::{validate_name, Alias};
use crate::codec;
use crate::errors::{StoreError, StoreResult};
use crate::fsio::FileSystem;

pub struct AliasStore {
    dir: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl AliasStore {
    /// Open the store, creating the data directory if needed.
    pub fn open(dir: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> StoreResult<Self> {
        let dir = dir.into();
        fs.create_dir_all(&dir)
            .map_err(|e| StoreError::io(format!("creating data directory {}", dir.display()), e))?;
        Ok(Self { dir, fs })
    }

    /// Directory holding the alias scripts.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Register an alias, silently overwriting any existing one.
    pub fn register(&self, name: &str, value: &str) -> StoreResult<()> {
        validate_name(name)?;
        let path = self.script_path(name);
        let lines = codec::encode(value);
        debug!("registering {} -> {}", name, path.display());
        self.fs
            .write_lines(&path, &lines)
            .map_err(|e| StoreError::io(format!("writing {}", path.display()), e))
    }

    /// Delete an alias. Fails with `NotFound` if it does not exist.
    pub fn delete(&self, name: &str) -> StoreResult<()> {
        validate_name(name)?;
        let path = self.script_path(name);
        if !self.fs.exists(&path) {
            return Err(StoreError::NotFound(name.to_string()));
        }
        debug!("deleting {}", path.display());
        self.fs
            .remove_file(&path)
            .map_err(|e| StoreError::io(format!("deleting {}", path.display()), e))
    }

    /// Load a single alias by name.
    pub fn get(&self, name: &str) -> StoreResult<Alias> {
        validate_name(name)?;
        let path = self.script_path(name);
        if !self.fs.exists(&path) {
            return Err(StoreError::NotFound(name.to_string()));
        }
        self.load(&path)
    }

    /// Iterate over stored aliases, optionally restricted to names
    /// containing `filter`. The sequence is finite and restartable: it is
    /// re-derived from the directory on every call, decoded lazily, and
    /// yielded in enumeration order (not sorted).
    pub fn aliases<'a>(
        &'a self,
        filter: Option<&str>,
    ) -> StoreResult<impl Iterator<Item = StoreResult<Alias>> + 'a> {
        let files = self.script_files(filter)?;
        Ok(files.into_iter().map(move |path| self.load(&path)))
    }

    /// All aliases, unfiltered.
    pub fn list(&self) -> StoreResult<impl Iterator<Item = StoreResult<Alias>> + '_> {
        self.aliases(None)
    }

    /// Aliases whose name contains `query`.
    pub fn search<'a>(
        &'a self,
        query: &str,
    ) -> StoreResult<impl Iterator<Item = StoreResult<Alias>> + 'a> {
        self.aliases(Some(query))
    }

    /// Delete every alias, best-effort: every delete is attempted, and
    /// failures are aggregated instead of aborting the rest.
    pub fn clear(&self) -> StoreResult<()> {
        let mut failures = Vec::new();
        for path in self.script_files(None)? {
            if let Err(e) = self.fs.remove_file(&path) {
                failures.push(format!("{}: {}", path.display(), e));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(StoreError::ClearFailed { failures })
        }
    }

    fn script_path(&self, name: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", name, codec::SCRIPT_EXTENSION))
    }

    fn script_files(&self, filter: Option<&str>) -> StoreResult<Vec<PathBuf>> {
        let files = self
            .fs
            .list_files(&self.dir)
            .map_err(|e| StoreError::io(format!("listing {}", self.dir.display()), e))?;

        Ok(files
            .into_iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(codec::SCRIPT_EXTENSION))
            .filter(|p| match filter {
                Some(query) => file_stem(p).contains(query),
                None => true,
            })
            .collect())
    }

    fn load(&self, path: &Path) -> StoreResult<Alias> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| StoreError::io(format!("reading {}", path.display()), e))?;

        // Only the last line is significant; the header is discarded.
        let body = content.lines().last().unwrap_or_default();
        Ok(Alias::new(file_stem(path), codec::decode(body)))
    }
}

fn file_stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or_default()
}
