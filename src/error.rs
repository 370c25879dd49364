//! Domain-specific error types for the project generator.
//!
//! Internal modules return typed errors (e.g., [`ConfigError`],
//! [`EnvironmentError`]) while the command boundary converts them to
//! [`anyhow::Error`] via the standard `?` operator.  Callers that embed the
//! generator can recover the typed error with `downcast_ref`.
//!
//! # Error hierarchy
//!
//! ```text
//! GenerateError
//! ├── Config(ConfigError)             : bad or missing user input
//! ├── Environment(EnvironmentError)   : build tool missing or unparseable
//! ├── Fs(FsError)                     : filesystem write failures
//! └── ExternalTool(ExternalToolError) : non-zero exit from a shelled-out command
//! ```
//!
//! Every error is terminal for the current run.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a generation pass.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Bad or missing user input.
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),

    /// A required external tool is missing or produced unparseable output.
    #[error("EnvironmentError: {0}")]
    Environment(#[from] EnvironmentError),

    /// A filesystem write failed.
    #[error("IOError: {0}")]
    Fs(#[from] FsError),

    /// A shelled-out command exited non-zero or could not be started.
    #[error("ExternalToolError: {0}")]
    ExternalTool(#[from] ExternalToolError),
}

impl GenerateError {
    /// Name of the error category, as reported to the user.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "ConfigError",
            Self::Environment(_) => "EnvironmentError",
            Self::Fs(_) => "IOError",
            Self::ExternalTool(_) => "ExternalToolError",
        }
    }
}

/// Errors that arise from user input and the defaults file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No project name was given, or it was blank.
    #[error("missing name: use -name to specify the project name")]
    MissingName,

    /// The name cannot be used as a directory and CMake target name.
    #[error("invalid name '{name}': {reason}")]
    InvalidName {
        /// Name as given.
        name: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The language is not one of `c`, `cpp`.
    #[error("unsupported language '{0}': supported options are cpp, c")]
    UnsupportedLanguage(String),

    /// The artifact type is not one of `executable`, `library`.
    #[error("unsupported artifact type '{0}': supported options are executable, library")]
    UnsupportedArtifactType(String),

    /// The package manager is not `vcpkg` (or `none`).
    #[error("unsupported package manager '{0}': only vcpkg is currently supported")]
    UnsupportedPackageManager(String),

    /// The git policy is not one of `ask`, `yes`, `no`.
    #[error("unsupported git policy '{0}': supported options are ask, yes, no")]
    UnsupportedGitPolicy(String),

    /// The defaults file could not be parsed.
    #[error("invalid defaults file {path}: {message}")]
    InvalidDefaults {
        /// Path to the defaults file.
        path: String,
        /// Parser message.
        message: String,
    },

    /// The defaults file could not be read.
    #[error("IO error reading defaults file {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that arise while probing the local toolchain.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    /// The tool is not on `PATH`.
    #[error("version detection failed: {0} not found on PATH")]
    ToolNotFound(String),

    /// The tool ran but its version could not be determined.
    #[error("version detection failed for {tool}: {reason}")]
    VersionDetectionFailed {
        /// Tool that was probed.
        tool: String,
        /// Why detection failed.
        reason: String,
    },
}

/// Errors that arise while materializing the project tree.
#[derive(Error, Debug)]
pub enum FsError {
    /// A directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Something other than a directory occupies a directory path.
    #[error("path collision: {} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Errors that arise from shelled-out commands.
#[derive(Error, Debug)]
pub enum ExternalToolError {
    /// The command could not be started.
    #[error("failed to execute: {command}: {source}")]
    Spawn {
        /// Command label.
        command: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The command exited with a non-zero status.
    #[error("{command} failed (exit {code}): {stderr}")]
    NonZeroExit {
        /// Command label.
        command: String,
        /// Exit code, or `-1` if terminated by a signal.
        code: i32,
        /// Trimmed standard error output.
        stderr: String,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::io;

    // -----------------------------------------------------------------------
    // ConfigError
    // -----------------------------------------------------------------------

    #[test]
    fn config_error_missing_name_display() {
        let e = ConfigError::MissingName;
        assert!(e.to_string().starts_with("missing name"));
    }

    #[test]
    fn config_error_unsupported_language_display() {
        let e = ConfigError::UnsupportedLanguage("rust".to_string());
        assert_eq!(
            e.to_string(),
            "unsupported language 'rust': supported options are cpp, c"
        );
    }

    #[test]
    fn config_error_unsupported_package_manager_display() {
        let e = ConfigError::UnsupportedPackageManager("conan".to_string());
        assert!(e.to_string().starts_with("unsupported package manager"));
        assert!(e.to_string().contains("conan"));
    }

    #[test]
    fn config_error_io_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::Io {
            path: "/home/u/.config/cppgen/config.toml".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert!(e.source().is_some());
    }

    // -----------------------------------------------------------------------
    // EnvironmentError
    // -----------------------------------------------------------------------

    #[test]
    fn environment_errors_mention_version_detection() {
        let missing = EnvironmentError::ToolNotFound("cmake".to_string());
        let unparsed = EnvironmentError::VersionDetectionFailed {
            tool: "cmake".to_string(),
            reason: "no version in output".to_string(),
        };
        assert!(missing.to_string().contains("version detection failed"));
        assert!(unparsed.to_string().contains("version detection failed"));
    }

    // -----------------------------------------------------------------------
    // FsError / ExternalToolError
    // -----------------------------------------------------------------------

    #[test]
    fn fs_error_not_a_directory_display() {
        let e = FsError::NotADirectory(PathBuf::from("demo/src"));
        assert_eq!(
            e.to_string(),
            "path collision: demo/src exists and is not a directory"
        );
    }

    #[test]
    fn external_tool_error_non_zero_exit_display() {
        let e = ExternalToolError::NonZeroExit {
            command: "git init".to_string(),
            code: 128,
            stderr: "fatal: not permitted".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "git init failed (exit 128): fatal: not permitted"
        );
    }

    // -----------------------------------------------------------------------
    // GenerateError conversions
    // -----------------------------------------------------------------------

    #[test]
    fn generate_error_categories() {
        let cases: Vec<(GenerateError, &str)> = vec![
            (ConfigError::MissingName.into(), "ConfigError"),
            (
                EnvironmentError::ToolNotFound("cmake".to_string()).into(),
                "EnvironmentError",
            ),
            (FsError::NotADirectory(PathBuf::from("x")).into(), "IOError"),
            (
                ExternalToolError::NonZeroExit {
                    command: "git".to_string(),
                    code: 1,
                    stderr: String::new(),
                }
                .into(),
                "ExternalToolError",
            ),
        ];
        for (err, category) in cases {
            assert_eq!(err.category(), category);
            assert!(err.to_string().starts_with(category));
        }
    }

    #[test]
    fn generate_error_downcasts_through_anyhow() {
        let e: anyhow::Error = GenerateError::from(ConfigError::MissingName).into();
        let typed = e
            .downcast_ref::<GenerateError>()
            .expect("should downcast to GenerateError");
        assert!(matches!(typed, GenerateError::Config(ConfigError::MissingName)));
    }

    // -----------------------------------------------------------------------
    // Send + Sync bounds
    // -----------------------------------------------------------------------

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<GenerateError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<EnvironmentError>();
        assert_send_sync::<FsError>();
        assert_send_sync::<ExternalToolError>();
    }
}
