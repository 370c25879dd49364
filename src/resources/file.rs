use std::io;
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::FsError;
use crate::operations::FileSystemOps;

/// A file with fixed contents.  Differing files are overwritten.
#[derive(Debug)]
pub struct FileResource<'a> {
    /// File path.
    pub path: PathBuf,
    /// Desired contents.
    pub contents: String,
    fs: &'a dyn FileSystemOps,
}

impl<'a> FileResource<'a> {
    /// Create a file resource.
    #[must_use]
    pub fn new(path: PathBuf, contents: String, fs: &'a dyn FileSystemOps) -> Self {
        Self { path, contents, fs }
    }
}

impl Resource for FileResource<'_> {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn current_state(&self) -> Result<ResourceState, FsError> {
        if self.fs.is_dir(&self.path) {
            return Ok(ResourceState::Invalid {
                reason: "is a directory".to_string(),
            });
        }
        if !self.fs.exists(&self.path) {
            return Ok(ResourceState::Missing);
        }
        // Unreadable or non-UTF-8 content is treated as stale and overwritten.
        match self.fs.read_to_string(&self.path) {
            Ok(current) if current == self.contents => Ok(ResourceState::Correct),
            Ok(current) => Ok(ResourceState::Incorrect {
                current: format!("{} bytes", current.len()),
            }),
            Err(e) => Ok(ResourceState::Incorrect {
                current: e.to_string(),
            }),
        }
    }

    fn apply(&self) -> Result<ResourceChange, FsError> {
        self.fs
            .write(&self.path, &self.contents)
            .map_err(|source| FsError::WriteFile {
                path: self.path.clone(),
                source,
            })?;
        Ok(ResourceChange::Applied)
    }

    fn conflict(&self, reason: &str) -> FsError {
        FsError::WriteFile {
            path: self.path.clone(),
            source: io::Error::new(io::ErrorKind::IsADirectory, reason.to_string()),
        }
    }
}
