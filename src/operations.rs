//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that resources and tasks can be
//! unit-tested without touching the real filesystem.  Production code uses
//! [`SystemFileSystemOps`]; tests use `MockFileSystemOps`.

use std::io;
use std::path::Path;

/// Abstraction over the filesystem queries and writes a generation pass needs.
pub trait FileSystemOps: Send + Sync + std::fmt::Debug {
    /// Returns `true` if `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read the whole file at `path` as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create `path` and any missing parents.  Existing directories are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if any component cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// In-memory [`FileSystemOps`] for unit tests.
///
/// Seed directories and files with the builder methods, then inspect what a
/// resource or task wrote with [`file`](Self::file) and
/// [`writes`](Self::writes).  Paths listed with
/// [`with_failing`](Self::with_failing) reject every write.
///
/// ```ignore
/// let fs = MockFileSystemOps::new()
///     .with_dir("/work/demo")
///     .with_file("/work/demo/CMakeLists.txt", "old");
/// ```
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFileSystemOps {
    state: std::sync::Mutex<MockState>,
    failing: Vec<std::path::PathBuf>,
}

#[cfg(test)]
#[derive(Debug, Default)]
struct MockState {
    dirs: std::collections::BTreeSet<std::path::PathBuf>,
    files: std::collections::BTreeMap<std::path::PathBuf, String>,
    writes: Vec<std::path::PathBuf>,
}

#[cfg(test)]
impl MockFileSystemOps {
    /// Create an empty mock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing directory.
    #[must_use]
    pub fn with_dir(self, path: impl Into<std::path::PathBuf>) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.dirs.insert(path.into());
        }
        self
    }

    /// Seed an existing file.
    #[must_use]
    pub fn with_file(self, path: impl Into<std::path::PathBuf>, contents: &str) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.files.insert(path.into(), contents.to_string());
        }
        self
    }

    /// Make every write and directory creation at `path` fail.
    #[must_use]
    pub fn with_failing(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.failing.push(path.into());
        self
    }

    /// Current contents of the file at `path`, if any.
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<String> {
        self.state
            .lock()
            .ok()
            .and_then(|s| s.files.get(path).cloned())
    }

    /// Returns `true` if `path` is a known directory.
    #[must_use]
    pub fn has_dir(&self, path: &Path) -> bool {
        self.state.lock().is_ok_and(|s| s.dirs.contains(path))
    }

    /// Every path written or created, in call order.
    #[must_use]
    pub fn writes(&self) -> Vec<std::path::PathBuf> {
        self.state
            .lock()
            .map_or_else(|_| vec![], |s| s.writes.clone())
    }

    fn check_failing(&self, path: &Path) -> io::Result<()> {
        if self.failing.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        Ok(())
    }

    fn poisoned() -> io::Error {
        io::Error::other("mock state poisoned")
    }
}

#[cfg(test)]
impl FileSystemOps for MockFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        self.state
            .lock()
            .is_ok_and(|s| s.dirs.contains(path) || s.files.contains_key(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.has_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.file(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not found"))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check_failing(path)?;
        let mut state = self.state.lock().map_err(|_| Self::poisoned())?;
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            if state.files.contains_key(ancestor) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "file exists at directory path",
                ));
            }
            state.dirs.insert(ancestor.to_path_buf());
        }
        state.writes.push(path.to_path_buf());
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_failing(path)?;
        let mut state = self.state.lock().map_err(|_| Self::poisoned())?;
        if state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                "is a directory",
            ));
        }
        state.files.insert(path.to_path_buf(), contents.to_string());
        state.writes.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // SystemFileSystemOps
    // -----------------------------------------------------------------------

    #[test]
    fn system_create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        SystemFileSystemOps.create_dir_all(&nested).unwrap();
        SystemFileSystemOps.create_dir_all(&nested).unwrap();
        assert!(SystemFileSystemOps.is_dir(&nested));
    }

    #[test]
    fn system_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        SystemFileSystemOps.write(&file, "one").unwrap();
        SystemFileSystemOps.write(&file, "two").unwrap();
        assert_eq!(SystemFileSystemOps.read_to_string(&file).unwrap(), "two");
        assert!(SystemFileSystemOps.exists(&file));
        assert!(!SystemFileSystemOps.is_dir(&file));
    }

    // -----------------------------------------------------------------------
    // MockFileSystemOps
    // -----------------------------------------------------------------------

    #[test]
    fn mock_tracks_dirs_and_files() {
        let fs = MockFileSystemOps::new();
        fs.create_dir_all(Path::new("/w/demo/src")).unwrap();
        fs.write(Path::new("/w/demo/src/main.c"), "int main;").unwrap();
        assert!(fs.is_dir(Path::new("/w/demo")));
        assert!(fs.exists(Path::new("/w/demo/src/main.c")));
        assert_eq!(
            fs.read_to_string(Path::new("/w/demo/src/main.c")).unwrap(),
            "int main;"
        );
        assert_eq!(fs.writes().len(), 2);
    }

    #[test]
    fn mock_failing_path_rejects_writes() {
        let fs = MockFileSystemOps::new().with_failing("/w/x");
        let err = fs.write(Path::new("/w/x"), "").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.writes().is_empty());
    }

    #[test]
    fn mock_file_blocks_directory() {
        let fs = MockFileSystemOps::new().with_file("/w/src", "");
        assert!(fs.create_dir_all(Path::new("/w/src")).is_err());
    }
}
