//! emlauncher - Emscripten tool launcher for Bazel toolchains
//!
//! Runs `emcc`/`emar` through a hermetic interpreter with `EMSCRIPTEN` and
//! `EM_CONFIG` pointing into the workspace, then exits with the tool's status.

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod launcher;
pub mod tool;

pub use error::{LauncherError, Result};
pub use launcher::LaunchContext;
pub use tool::Tool;
