//! The validated, immutable description of one generation run.
use std::fmt;
use std::str::FromStr;

use super::profiles::{ArtifactProfile, LanguageProfile};
use crate::error::{ConfigError, GenerateError};
use crate::platform::Platform;
use crate::tools::Toolchain;

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// C.
    C,
    /// C++.
    Cpp,
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "cpp" => Ok(Self::Cpp),
            _ => Err(ConfigError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C => write!(f, "c"),
            Self::Cpp => write!(f, "cpp"),
        }
    }
}

/// Kind of build target the project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    /// A standalone executable.
    Executable,
    /// A library.
    Library,
}

impl FromStr for ArtifactType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "executable" => Ok(Self::Executable),
            "library" => Ok(Self::Library),
            _ => Err(ConfigError::UnsupportedArtifactType(s.to_string())),
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Executable => write!(f, "executable"),
            Self::Library => write!(f, "library"),
        }
    }
}

/// Supported package manager integration.  Absence is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    /// Microsoft vcpkg in manifest mode.
    Vcpkg,
}

impl PackageManager {
    /// Parse an optional package-manager choice; `none` and blank mean no package manager.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedPackageManager`] for anything other
    /// than `vcpkg`, `none`, or a blank value.
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, ConfigError> {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            None => Ok(None),
            Some(v) if v.is_empty() || v == "none" => Ok(None),
            Some(v) if v == "vcpkg" => Ok(Some(Self::Vcpkg)),
            Some(_) => Err(ConfigError::UnsupportedPackageManager(
                value.unwrap_or_default().to_string(),
            )),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vcpkg => write!(f, "vcpkg"),
        }
    }
}

/// Raw, unvalidated inputs for one run, after flags and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    /// Project name; blank means missing.
    pub name: String,
    /// Artifact type (`executable` or `library`).
    pub artifact: String,
    /// Language (`c` or `cpp`).
    pub language: String,
    /// Free-form language standard token.
    pub standard: String,
    /// Package manager choice, if any.
    pub package_manager: Option<String>,
    /// CMake generator for the presets file.
    pub generator: String,
}

/// Trim `raw` and check that it works as both a directory name and a CMake
/// target name.
///
/// The name must be a single path component without whitespace: no `/` or
/// `\\`, and not `.` or `..`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingName`] for a blank name and
/// [`ConfigError::InvalidName`] otherwise.
///
/// # Examples
///
/// ```
/// use cppgen::config::validate_name;
///
/// assert_eq!(validate_name(" demo ").unwrap(), "demo");
/// assert!(validate_name("../escaped").is_err());
/// assert!(validate_name("my app").is_err());
/// ```
pub fn validate_name(raw: &str) -> Result<&str, ConfigError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ConfigError::MissingName);
    }
    let reason = if name == "." || name == ".." {
        Some("'.' and '..' are not project names")
    } else if name.contains(['/', '\\']) {
        Some("path separators are not allowed")
    } else if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Some("whitespace is not allowed")
    } else {
        None
    };
    reason.map_or(Ok(name), |reason| {
        Err(ConfigError::InvalidName {
            name: name.to_string(),
            reason,
        })
    })
}

/// Validated configuration for one generation pass.
///
/// Built once per invocation and never mutated.  The CMake language tag and
/// the source extension are not stored: they are read from the language's
/// [`LanguageProfile`], so they cannot drift from `language`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: String,
    artifact: ArtifactType,
    language: Language,
    standard: String,
    build_tool_version: String,
    package_manager: Option<PackageManager>,
    generator: String,
}

impl ProjectDescriptor {
    /// Validate `options` and probe the build tool.
    ///
    /// Checks run in a fixed order: name, language, artifact type, package
    /// manager, and only then the build-tool version probe.  Nothing touches
    /// the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Config`] for invalid input and
    /// [`GenerateError::Environment`] if the version probe fails.
    pub fn build(options: &ProjectOptions, tools: &dyn Toolchain) -> Result<Self, GenerateError> {
        let name = validate_name(&options.name)?;
        let language: Language = options.language.parse()?;
        let artifact: ArtifactType = options.artifact.parse()?;
        let package_manager = PackageManager::parse_optional(options.package_manager.as_deref())?;

        let build_tool_version = tools.build_tool_version()?;

        Ok(Self {
            name: name.to_string(),
            artifact,
            language,
            standard: options.standard.trim().to_string(),
            build_tool_version,
            package_manager,
            generator: options.generator.clone(),
        })
    }

    /// Assemble a descriptor from already-typed parts without probing any tool.
    ///
    /// The presets generator defaults to the current platform's; override it
    /// with [`with_generator`](Self::with_generator).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingName`] if `name` is blank and
    /// [`ConfigError::InvalidName`] if it is not a single path component.
    pub fn from_parts(
        name: &str,
        artifact: ArtifactType,
        language: Language,
        standard: &str,
        build_tool_version: &str,
        package_manager: Option<PackageManager>,
    ) -> Result<Self, ConfigError> {
        let name = validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            artifact,
            language,
            standard: standard.trim().to_string(),
            build_tool_version: build_tool_version.to_string(),
            package_manager,
            generator: Platform::detect().default_generator().to_string(),
        })
    }

    /// Replace the presets generator.
    #[must_use]
    pub fn with_generator(mut self, generator: &str) -> Self {
        self.generator = generator.to_string();
        self
    }

    /// Project name, used as the directory name and the build target name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Artifact type.
    #[must_use]
    pub const fn artifact(&self) -> ArtifactType {
        self.artifact
    }

    /// Source language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Language standard token (e.g. `17`).
    #[must_use]
    pub fn standard(&self) -> &str {
        &self.standard
    }

    /// Installed build-tool version.
    #[must_use]
    pub fn build_tool_version(&self) -> &str {
        &self.build_tool_version
    }

    /// Package manager, if one was requested.
    #[must_use]
    pub const fn package_manager(&self) -> Option<PackageManager> {
        self.package_manager
    }

    /// CMake generator written into the presets file.
    #[must_use]
    pub fn generator(&self) -> &str {
        &self.generator
    }

    /// Language profile.
    #[must_use]
    pub const fn language_profile(&self) -> &'static LanguageProfile {
        self.language.profile()
    }

    /// Artifact profile.
    #[must_use]
    pub const fn artifact_profile(&self) -> &'static ArtifactProfile {
        self.artifact.profile()
    }

    /// CMake language tag (`CXX` or `C`).
    #[must_use]
    pub const fn build_tag(&self) -> &'static str {
        self.language_profile().build_tag
    }

    /// Starter source extension (`cpp` or `c`).
    #[must_use]
    pub const fn file_extension(&self) -> &'static str {
        self.language_profile().extension
    }

    /// Path of the starter source file relative to the project root.
    #[must_use]
    pub fn main_source_path(&self) -> String {
        format!("src/main.{}", self.file_extension())
    }
}
