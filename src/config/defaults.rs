//! Optional user defaults file and the flag/defaults merge.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::descriptor::ProjectOptions;
use super::{DEFAULT_ARTIFACT, DEFAULT_LANGUAGE, DEFAULT_STANDARD, GitPolicy};
use crate::error::ConfigError;
use crate::platform::Platform;

/// File name of the defaults file inside the config directory.
pub const FILE_NAME: &str = "config.toml";

/// Values read from the defaults file.  Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    /// Default artifact type.
    #[serde(rename = "type")]
    pub artifact: Option<String>,
    /// Default language.
    #[serde(rename = "lang")]
    pub language: Option<String>,
    /// Default language standard.
    #[serde(rename = "std")]
    pub standard: Option<String>,
    /// Default package manager.
    #[serde(rename = "pkgmgr")]
    pub package_manager: Option<String>,
    /// Default presets generator.
    pub generator: Option<String>,
    /// Default git policy.
    pub git: Option<String>,
}

impl Defaults {
    /// Parse defaults from TOML text.  `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDefaults`] on malformed TOML or unknown keys.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidDefaults {
            path: origin.display().to_string(),
            message: e.message().to_string(),
        })
    }

    /// Load the defaults file.
    ///
    /// An explicit path must exist.  Without one, the per-user file is used
    /// when present and an empty set of defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content, &path)
    }
}

/// Resolve the per-user config directory from `XDG_CONFIG_HOME` and the home directory.
///
/// An empty `XDG_CONFIG_HOME` is ignored, as the XDG base directory rules require.
#[must_use]
pub fn config_dir_from(xdg_config_home: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_config_home
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("cppgen"));
    }
    home.filter(|h| !h.is_empty())
        .map(|h| PathBuf::from(h).join(".config").join("cppgen"))
}

/// Location of the implicit defaults file for the current user.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok();
    config_dir_from(xdg.as_deref(), home.as_deref()).map(|dir| dir.join(FILE_NAME))
}

/// Values given on the command line; `None` means the flag was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFlags {
    /// `-name`.
    pub name: Option<String>,
    /// `-type`.
    pub artifact: Option<String>,
    /// `-lang`.
    pub language: Option<String>,
    /// `-std`.
    pub standard: Option<String>,
    /// `-pkgmgr`.
    pub package_manager: Option<String>,
    /// `--generator`.
    pub generator: Option<String>,
    /// `--git`.
    pub git: Option<String>,
}

/// Merge flags over defaults over built-in values.
///
/// Only the git policy is validated here; every other value is validated when
/// the descriptor is built.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedGitPolicy`] for an unknown git policy.
pub fn resolve(
    flags: &ProjectFlags,
    defaults: &Defaults,
    platform: &Platform,
) -> Result<(ProjectOptions, GitPolicy), ConfigError> {
    // Blank values count as not given.
    fn pick(flag: Option<&String>, default: Option<&String>, builtin: &str) -> String {
        let given = |v: &&String| !v.trim().is_empty();
        flag.filter(given)
            .or_else(|| default.filter(given))
            .map_or_else(|| builtin.to_string(), Clone::clone)
    }

    let options = ProjectOptions {
        name: flags.name.clone().unwrap_or_default(),
        artifact: pick(
            flags.artifact.as_ref(),
            defaults.artifact.as_ref(),
            DEFAULT_ARTIFACT,
        ),
        language: pick(
            flags.language.as_ref(),
            defaults.language.as_ref(),
            DEFAULT_LANGUAGE,
        ),
        standard: pick(
            flags.standard.as_ref(),
            defaults.standard.as_ref(),
            DEFAULT_STANDARD,
        ),
        package_manager: flags
            .package_manager
            .clone()
            .or_else(|| defaults.package_manager.clone()),
        generator: pick(
            flags.generator.as_ref(),
            defaults.generator.as_ref(),
            platform.default_generator(),
        ),
    };

    let git = match flags.git.as_ref().or(defaults.git.as_ref()) {
        Some(value) => value.parse()?,
        None => GitPolicy::Ask,
    };

    Ok((options, git))
}
