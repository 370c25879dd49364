//! Generation profiles: data tables keyed by language and artifact type.
//!
//! Everything that varies with the language or the artifact type lives here,
//! so renderers read a profile instead of branching on strings.  The lookups
//! are exhaustive `match`es, so adding an enum variant fails to compile until
//! its profile exists.
use super::descriptor::{ArtifactType, Language};
use crate::templates::sources;

/// Everything that depends on the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Language tag passed to CMake's `project(... LANGUAGES <tag>)`.
    pub build_tag: &'static str,
    /// Extension of the starter source file.
    pub extension: &'static str,
    /// CMake variable that carries the language standard.
    pub standard_variable: &'static str,
    /// Precompiled header path relative to the project root, if the language uses one.
    pub precompiled_header: Option<&'static str>,
    /// Contents of the starter `src/main.<ext>`.
    pub main_source: &'static str,
    /// Contents of the precompiled header, paired with `precompiled_header`.
    pub header_source: Option<&'static str>,
}

/// Everything that depends on the artifact type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactProfile {
    /// CMake command that declares the target.
    pub directive: &'static str,
}

const CPP: LanguageProfile = LanguageProfile {
    build_tag: "CXX",
    extension: "cpp",
    standard_variable: "CMAKE_CXX_STANDARD",
    precompiled_header: Some("include/pch.hpp"),
    main_source: sources::CPP_MAIN,
    header_source: Some(sources::CPP_PCH),
};

const C: LanguageProfile = LanguageProfile {
    build_tag: "C",
    extension: "c",
    standard_variable: "CMAKE_C_STANDARD",
    precompiled_header: None,
    main_source: sources::C_MAIN,
    header_source: None,
};

const EXECUTABLE: ArtifactProfile = ArtifactProfile {
    directive: "add_executable",
};

const LIBRARY: ArtifactProfile = ArtifactProfile {
    directive: "add_library",
};

impl Language {
    /// The generation profile for this language.
    #[must_use]
    pub const fn profile(self) -> &'static LanguageProfile {
        match self {
            Self::Cpp => &CPP,
            Self::C => &C,
        }
    }
}

impl ArtifactType {
    /// The generation profile for this artifact type.
    #[must_use]
    pub const fn profile(self) -> &'static ArtifactProfile {
        match self {
            Self::Executable => &EXECUTABLE,
            Self::Library => &LIBRARY,
        }
    }
}
