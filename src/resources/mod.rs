//! Idempotent resource primitives (check + apply pattern).
pub mod directory;
pub mod file;

pub use directory::DirectoryResource;
pub use file::FileResource;

use crate::error::FsError;

/// State of a filesystem resource relative to its desired state.
///
/// # Examples
///
/// ```
/// use cppgen::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let wrong = ResourceState::Incorrect { current: "12 bytes".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert!(matches!(wrong, ResourceState::Incorrect { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Resource exists but differs from the desired state.
    Incorrect {
        /// Short description of what is there now.
        current: String,
    },
    /// Resource cannot be applied, e.g. a file sits where a directory belongs.
    Invalid {
        /// Why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct.
    AlreadyCorrect,
}

/// A resource that can be checked and applied.
///
/// ```ignore
/// if resource.needs_change()? {
///     resource.apply()?;
/// }
/// ```
pub trait Resource {
    /// Human-readable description, used in log lines.
    fn description(&self) -> String;

    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined.
    fn current_state(&self) -> Result<ResourceState, FsError>;

    /// Bring the resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an [`FsError`] if the filesystem rejects the change.
    fn apply(&self) -> Result<ResourceChange, FsError>;

    /// Error reported when [`current_state`](Self::current_state) is
    /// [`ResourceState::Invalid`].
    fn conflict(&self, reason: &str) -> FsError;

    /// Returns `true` if [`apply`](Self::apply) would change anything.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`current_state`](Self::current_state).
    fn needs_change(&self) -> Result<bool, FsError> {
        Ok(matches!(
            self.current_state()?,
            ResourceState::Missing | ResourceState::Incorrect { .. }
        ))
    }
}
