//! vcpkg manifest and CMake presets.
use serde_json::{Value, json};

use crate::config::ProjectDescriptor;

/// File name of the vcpkg manifest.
pub const MANIFEST_FILE: &str = "vcpkg.json";
/// File name of the CMake presets.
pub const PRESETS_FILE: &str = "CMakePresets.json";

const TOOLCHAIN_FILE: &str = "${sourceDir}/vcpkg/scripts/buildsystems/vcpkg.cmake";
const BINARY_DIR: &str = "${sourceDir}/build/${presetName}";
const CONFIGURATIONS: [&str; 2] = ["Debug", "Release"];

fn pretty(value: &Value) -> String {
    format!("{value:#}\n")
}

/// Render `vcpkg.json` with an empty dependency list.
#[must_use]
pub fn render_manifest() -> String {
    pretty(&json!({ "dependencies": [] }))
}

/// Render `CMakePresets.json` with one configure preset per build configuration.
#[must_use]
pub fn render_presets(descriptor: &ProjectDescriptor) -> String {
    let presets: Vec<Value> = CONFIGURATIONS
        .iter()
        .map(|config| {
            json!({
                "name": format!("{}-{config}", descriptor.name()),
                "generator": descriptor.generator(),
                "binaryDir": BINARY_DIR,
                "cacheVariables": {
                    "CMAKE_BUILD_TYPE": config,
                    "CMAKE_TOOLCHAIN_FILE": TOOLCHAIN_FILE,
                },
            })
        })
        .collect();

    pretty(&json!({
        "version": 3,
        "configurePresets": presets,
    }))
}
