//! Entry point shared by the `emcc_launcher` and `emar_launcher` binaries.
//!
//! The tool is chosen from the name the process was invoked under, so the
//! same binary can be copied or symlinked under either name.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use colored::*;
use eyre::{Context, Result};
use log::info;

use crate::error::LauncherError;
use crate::launcher::LaunchContext;
use crate::tool::Tool;

const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

fn log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(PROJECT_NAME)
        .join("logs")
        .join(format!("{}.log", PROJECT_NAME))
}

/// Send logs to a file so the wrapped tool's output stays clean.
///
/// Does nothing unless `RUST_LOG` is set.
fn setup_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let log_file = log_file();
    if let Some(log_dir) = log_file.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .try_init()
        .context("Failed to install logger")?;

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn report(err: &LauncherError) {
    eprintln!("{} {}", "Error:".red(), err);
}

/// Select the tool from `argv0`, launch it with `args`, and return the
/// status this process should exit with.
pub fn run<I>(argv0: Option<OsString>, args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    let tool = match Tool::from_argv0(argv0.as_deref()) {
        Ok(tool) => tool,
        Err(err) => {
            log::error!("{}", err);
            report(&err);
            return err.exit_code();
        }
    };

    let ctx = match LaunchContext::from_process() {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{} failed to read current directory: {}", "Error:".red(), err);
            return 1;
        }
    };

    match ctx.invoke(tool, args) {
        Ok(code) => code,
        Err(err) => {
            report(&err);
            err.exit_code()
        }
    }
}

/// Process entry point: never returns.
pub fn main() -> ! {
    // A broken log setup must not break the build.
    let _ = setup_logging();

    let mut argv = std::env::args_os();
    let argv0 = argv.next();
    let code = run(argv0, argv);
    std::process::exit(code)
}
