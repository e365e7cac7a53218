//! The closed set of Emscripten tools the launcher can wrap.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::error::{LauncherError, Result};

/// A wrapped Emscripten tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Compiler front-end
    Emcc,
    /// Archiver
    Emar,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Emcc, Tool::Emar];

    /// Name the launcher binary is invoked under for this tool
    pub fn launcher_name(self) -> &'static str {
        match self {
            Tool::Emcc => "emcc_launcher",
            Tool::Emar => "emar_launcher",
        }
    }

    /// Canonical tool identifier
    pub fn name(self) -> &'static str {
        match self {
            Tool::Emcc => "emcc",
            Tool::Emar => "emar",
        }
    }

    /// File name of the tool's script inside the emscripten directory
    pub fn script_name(self) -> String {
        format!("{}.py", self.name())
    }

    /// Look up the tool for an invocation name (file stem, no extension)
    pub fn from_launcher_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.launcher_name() == name)
            .ok_or_else(|| LauncherError::UnknownLauncher(name.to_string()))
    }

    /// Select the tool from argv[0], ignoring directory and extension
    pub fn from_argv0(argv0: Option<&OsStr>) -> Result<Self> {
        let stem = argv0
            .and_then(|arg| Path::new(arg).file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_launcher_name(&stem)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
