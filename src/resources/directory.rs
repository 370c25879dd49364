use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};
use crate::error::FsError;
use crate::operations::FileSystemOps;

/// A directory that must exist.
#[derive(Debug)]
pub struct DirectoryResource<'a> {
    /// Directory path.
    pub path: PathBuf,
    fs: &'a dyn FileSystemOps,
}

impl<'a> DirectoryResource<'a> {
    /// Create a directory resource.
    #[must_use]
    pub fn new(path: PathBuf, fs: &'a dyn FileSystemOps) -> Self {
        Self { path, fs }
    }
}

impl Resource for DirectoryResource<'_> {
    fn description(&self) -> String {
        format!("{}/", self.path.display())
    }

    fn current_state(&self) -> Result<ResourceState, FsError> {
        if self.fs.is_dir(&self.path) {
            return Ok(ResourceState::Correct);
        }
        if self.fs.exists(&self.path) {
            return Ok(ResourceState::Invalid {
                reason: "exists and is not a directory".to_string(),
            });
        }
        Ok(ResourceState::Missing)
    }

    fn apply(&self) -> Result<ResourceChange, FsError> {
        if self.fs.is_dir(&self.path) {
            return Ok(ResourceChange::AlreadyCorrect);
        }
        self.fs
            .create_dir_all(&self.path)
            .map_err(|source| FsError::CreateDir {
                path: self.path.clone(),
                source,
            })?;
        Ok(ResourceChange::Applied)
    }

    fn conflict(&self, _reason: &str) -> FsError {
        FsError::NotADirectory(self.path.clone())
    }
}
