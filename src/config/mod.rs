//! Project configuration: raw options, the validated descriptor, generation
//! profiles and the optional defaults file.
pub mod defaults;
pub mod descriptor;
pub mod profiles;

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub use defaults::{Defaults, ProjectFlags};
pub use descriptor::{
    ArtifactType, Language, PackageManager, ProjectDescriptor, ProjectOptions, validate_name,
};
pub use profiles::{ArtifactProfile, LanguageProfile};

/// Artifact type used when neither a flag nor the defaults file sets one.
pub const DEFAULT_ARTIFACT: &str = "executable";
/// Language used when neither a flag nor the defaults file sets one.
pub const DEFAULT_LANGUAGE: &str = "cpp";
/// Standard used when neither a flag nor the defaults file sets one.
pub const DEFAULT_STANDARD: &str = "11";

/// How the version-control initialization question is answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GitPolicy {
    /// Ask on stdin.
    #[default]
    Ask,
    /// Always initialize.
    Yes,
    /// Never initialize.
    No,
}

impl FromStr for GitPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" => Ok(Self::Ask),
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            _ => Err(ConfigError::UnsupportedGitPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for GitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ask => write!(f, "ask"),
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}
