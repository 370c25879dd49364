//! CMake project scaffolder for C and C++.
//!
//! Turns a handful of flags into a ready-to-build project directory: folder
//! layout, `CMakeLists.txt`, starter sources, optional vcpkg manifest and
//! presets, and an optional git repository.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: validate options into a [`config::ProjectDescriptor`]
//! - **[`templates`]**: render file contents from a descriptor
//! - **[`resources`]**: idempotent `check + apply` filesystem primitives
//! - **[`tasks`]**: ordered units of work wired to resources and tools
//! - **[`commands`]**: the `generate` pass and its command-line entry point
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod operations;
pub mod platform;
pub mod prompt;
pub mod resources;
pub mod tasks;
pub mod templates;
pub mod tools;
