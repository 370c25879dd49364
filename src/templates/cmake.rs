//! `CMakeLists.txt` rendering.
use crate::config::ProjectDescriptor;

/// File name of the build manifest.
pub const FILE_NAME: &str = "CMakeLists.txt";

/// Render the build manifest for `descriptor`.
///
/// The output is a pure function of the descriptor.
#[must_use]
pub fn render(descriptor: &ProjectDescriptor) -> String {
    let name = descriptor.name();
    let lang = descriptor.language_profile();
    let target = descriptor.artifact_profile();

    let mut blocks = vec![
        format!(
            "cmake_minimum_required(VERSION {})",
            descriptor.build_tool_version()
        ),
        format!("project({name} LANGUAGES {})", lang.build_tag),
    ];

    let mut settings = vec![format!(
        "set({} {})",
        lang.standard_variable,
        descriptor.standard()
    )];
    if lang.precompiled_header.is_some() {
        settings.push("set(CMAKE_PCH_ENABLED ON)".to_string());
    }
    blocks.push(settings.join("\n"));

    let mut target_lines = vec![
        format!(
            "{}({name} {})",
            target.directive,
            descriptor.main_source_path()
        ),
        format!("target_include_directories({name} PRIVATE include)"),
    ];
    if let Some(header) = lang.precompiled_header {
        target_lines.push(format!("target_precompile_headers({name} PRIVATE {header})"));
    }
    blocks.push(target_lines.join("\n"));

    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}
