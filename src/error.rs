//! Error types for emlauncher
//!
//! Centralized error handling using thiserror.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::tool::Tool;

/// Exit status for an unrecognized launcher name.
pub const EXIT_CONFIGURATION: i32 = 1;

/// Exit status when the interpreter cannot be found (shell convention).
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit status when the interpreter is not executable (shell convention).
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// All error types that can occur while launching a tool
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The program was invoked under a name that maps to no tool
    #[error("Unknown launcher {0}")]
    UnknownLauncher(String),

    /// The child process could not be started
    #[error("failed to launch {tool} via {}: {source}", .interpreter.display())]
    Spawn {
        tool: Tool,
        interpreter: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LauncherError {
    /// Process exit status to report for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::UnknownLauncher(_) => EXIT_CONFIGURATION,
            LauncherError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => EXIT_CONFIGURATION,
            },
        }
    }
}

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, LauncherError>;
