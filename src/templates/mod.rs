//! Rendering of every generated file.
//!
//! All functions here are pure: the same descriptor always yields
//! byte-identical output, and nothing touches the filesystem.
pub mod cmake;
pub mod sources;
pub mod vcpkg;
pub mod vcs;

use crate::config::{PackageManager, ProjectDescriptor};

/// A file ready to be written, with a path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the project root, `/`-separated.
    pub path: String,
    /// Full file contents.
    pub contents: String,
}

impl RenderedFile {
    fn new(path: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Build manifest for the project.
#[must_use]
pub fn build_manifest(descriptor: &ProjectDescriptor) -> RenderedFile {
    RenderedFile::new(cmake::FILE_NAME, cmake::render(descriptor))
}

/// Package-manager files, empty when no package manager is configured.
#[must_use]
pub fn package_manager_files(descriptor: &ProjectDescriptor) -> Vec<RenderedFile> {
    match descriptor.package_manager() {
        Some(PackageManager::Vcpkg) => vec![
            RenderedFile::new(vcpkg::MANIFEST_FILE, vcpkg::render_manifest()),
            RenderedFile::new(vcpkg::PRESETS_FILE, vcpkg::render_presets(descriptor)),
        ],
        None => Vec::new(),
    }
}

/// Starter source file, plus the precompiled header when the language uses one.
#[must_use]
pub fn source_files(descriptor: &ProjectDescriptor) -> Vec<RenderedFile> {
    let profile = descriptor.language_profile();
    let mut files = vec![RenderedFile::new(
        descriptor.main_source_path(),
        profile.main_source,
    )];
    if let (Some(path), Some(contents)) = (profile.precompiled_header, profile.header_source) {
        files.push(RenderedFile::new(path, contents));
    }
    files
}

/// Every project file except the version-control files, in write order.
#[must_use]
pub fn project_files(descriptor: &ProjectDescriptor) -> Vec<RenderedFile> {
    let mut files = vec![build_manifest(descriptor)];
    files.extend(package_manager_files(descriptor));
    files.extend(source_files(descriptor));
    files
}

/// `.gitignore` and `.gitattributes`.
#[must_use]
pub fn vcs_files() -> Vec<RenderedFile> {
    vec![
        RenderedFile::new(vcs::FILES[0], vcs::GITIGNORE),
        RenderedFile::new(vcs::FILES[1], vcs::GITATTRIBUTES),
    ]
}
