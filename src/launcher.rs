//! Builds and runs the wrapped tool's command line.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::config::LaunchConfig;
use crate::env::Environment;
use crate::error::{LauncherError, Result};
use crate::tool::Tool;

/// Everything needed to run one tool once
#[derive(Debug, Clone)]
pub struct LaunchContext {
    pub config: LaunchConfig,
    pub emscripten_dir: PathBuf,
    pub environment: Environment,
}

impl LaunchContext {
    /// Resolve paths from `config` and derive the child environment from `base`
    pub fn new(config: LaunchConfig, base: &Environment) -> Self {
        let emscripten_dir = config.emscripten_dir();
        let config_file = config.config_file();
        log::debug!(
            "emscripten dir: {}, config: {}",
            emscripten_dir.display(),
            config_file.display()
        );

        let environment = base.with_emscripten(&emscripten_dir, &config_file);
        Self {
            config,
            emscripten_dir,
            environment,
        }
    }

    /// Resolve against the live process
    pub fn from_process() -> std::io::Result<Self> {
        Ok(Self::new(LaunchConfig::load()?, &Environment::capture()))
    }

    /// Path of the script implementing `tool`
    pub fn tool_binary_path(&self, tool: Tool) -> PathBuf {
        self.emscripten_dir.join(tool.script_name())
    }

    /// `<interpreter> <tool script> <args...>` with the child environment.
    ///
    /// The child gets exactly [`LaunchContext::environment`], nothing inherited
    /// beyond it. Standard streams are inherited.
    pub fn command<I, S>(&self, tool: Tool, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut cmd = Command::new(&self.config.interpreter);
        cmd.arg(self.tool_binary_path(tool));
        cmd.args(args.into_iter().map(Into::<OsString>::into));
        cmd.env_clear();
        cmd.envs(self.environment.iter());
        cmd
    }

    /// Run `tool` to completion and return its exit status code
    pub fn invoke<I, S>(&self, tool: Tool, args: I) -> Result<i32>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut cmd = self.command(tool, args);
        log::info!("running {:?}", cmd);

        let status = cmd.status().map_err(|source| {
            log::error!("failed to spawn {}: {}", tool, source);
            LauncherError::Spawn {
                tool,
                interpreter: self.config.interpreter.clone(),
                source,
            }
        })?;

        let code = exit_code(status);
        log::info!("{} exited with {} ({})", tool, code, status);
        Ok(code)
    }
}

/// Map a child's status to this process's exit status.
///
/// Signal deaths follow the shell convention of `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
