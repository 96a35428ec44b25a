// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only filesystem access used by collection discovery.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
}

impl FsError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        FsError::Io { path: path.to_path_buf(), source }
    }

    /// Short label used in discovery traces, e.g. `PermissionDenied`.
    pub fn kind(&self) -> String {
        match self {
            FsError::Io { source, .. } => format!("{:?}", source.kind()),
            FsError::Walk { .. } => "WalkError".to_string(),
        }
    }
}

/// The filesystem operations discovery needs.
pub trait FileSystem: Send + Sync {
    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Files directly inside `dir` with the given extension, sorted by path.
    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FsError>;

    /// Every directory named `name` anywhere below `root`. Symlinks are not followed.
    fn find_dirs_named(&self, root: &Path, name: &str) -> Result<Vec<PathBuf>, FsError>;

    fn read_to_string(&self, path: &Path) -> Result<String, FsError>;
}

impl<F: FileSystem + ?Sized> FileSystem for std::sync::Arc<F> {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FsError> {
        (**self).list_files(dir, extension)
    }

    fn find_dirs_named(&self, root: &Path, name: &str) -> Result<Vec<PathBuf>, FsError> {
        (**self).find_dirs_named(root, name)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        (**self).read_to_string(path)
    }
}

/// The real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FsError> {
        let entries = std::fs::read_dir(dir).map_err(|e| FsError::io(dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| FsError::io(dir, e))?.path();
            let matches_ext = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            if matches_ext && path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn find_dirs_named(&self, root: &Path, name: &str) -> Result<Vec<PathBuf>, FsError> {
        let mut found = Vec::new();
        for entry in WalkDir::new(root).follow_links(false).min_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                match e.into_io_error() {
                    Some(source) => FsError::Io { path, source },
                    None => FsError::Walk { path, message: "filesystem loop".to_string() },
                }
            })?;
            if entry.file_type().is_dir() && entry.file_name() == name {
                found.push(entry.into_path());
            }
        }
        Ok(found)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        std::fs::read_to_string(path).map_err(|e| FsError::io(path, e))
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{FileSystem, FsError};
    use parking_lot::Mutex;
    use std::collections::{BTreeMap, BTreeSet};
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeFsState {
        files: BTreeMap<PathBuf, String>,
        dirs: BTreeSet<PathBuf>,
        denied: BTreeSet<PathBuf>,
        accesses: usize,
    }

    impl FakeFsState {
        fn add_dir_chain(&mut self, dir: &Path) {
            for ancestor in dir.ancestors() {
                if ancestor.as_os_str().is_empty() {
                    break;
                }
                self.dirs.insert(ancestor.to_path_buf());
            }
        }

        fn check_denied(&self, path: &Path) -> Result<(), FsError> {
            if self.denied.iter().any(|d| path.starts_with(d)) {
                return Err(FsError::io(path, ErrorKind::PermissionDenied.into()));
            }
            Ok(())
        }
    }

    /// In-memory filesystem that counts every access.
    #[derive(Clone, Default)]
    pub struct FakeFileSystem {
        inner: Arc<Mutex<FakeFsState>>,
    }

    impl FakeFileSystem {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a file (and its parent directories).
        pub fn add_file(&self, path: impl Into<PathBuf>, contents: &str) {
            let path = path.into();
            let mut inner = self.inner.lock();
            if let Some(parent) = path.parent() {
                inner.add_dir_chain(parent);
            }
            inner.files.insert(path, contents.to_string());
        }

        /// Add an empty directory (and its parents).
        pub fn add_dir(&self, path: impl Into<PathBuf>) {
            self.inner.lock().add_dir_chain(&path.into());
        }

        /// Make reads and enumeration under `path` fail with `PermissionDenied`.
        pub fn deny(&self, path: impl Into<PathBuf>) {
            self.inner.lock().denied.insert(path.into());
        }

        /// Number of filesystem calls made so far.
        pub fn accesses(&self) -> usize {
            self.inner.lock().accesses
        }
    }

    impl FileSystem for FakeFileSystem {
        fn is_dir(&self, path: &Path) -> bool {
            let mut inner = self.inner.lock();
            inner.accesses += 1;
            inner.dirs.contains(path)
        }

        fn is_file(&self, path: &Path) -> bool {
            let mut inner = self.inner.lock();
            inner.accesses += 1;
            inner.files.contains_key(path)
        }

        fn list_files(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FsError> {
            let mut inner = self.inner.lock();
            inner.accesses += 1;
            inner.check_denied(dir)?;
            if !inner.dirs.contains(dir) {
                return Err(FsError::io(dir, ErrorKind::NotFound.into()));
            }
            Ok(inner
                .files
                .keys()
                .filter(|p| p.parent() == Some(dir))
                .filter(|p| {
                    p.extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
                })
                .cloned()
                .collect())
        }

        fn find_dirs_named(&self, root: &Path, name: &str) -> Result<Vec<PathBuf>, FsError> {
            let mut inner = self.inner.lock();
            inner.accesses += 1;
            inner.check_denied(root)?;
            if !inner.dirs.contains(root) {
                return Err(FsError::io(root, ErrorKind::NotFound.into()));
            }
            Ok(inner
                .dirs
                .iter()
                .filter(|d| d.starts_with(root) && d.as_path() != root)
                .filter(|d| d.file_name().is_some_and(|n| n == name))
                .cloned()
                .collect())
        }

        fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
            let mut inner = self.inner.lock();
            inner.accesses += 1;
            inner.check_denied(path)?;
            inner
                .files
                .get(path)
                .cloned()
                .ok_or_else(|| FsError::io(path, ErrorKind::NotFound.into()))
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeFileSystem;

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
