//! Launcher settings read from the environment.
//!
//! Bazel rules hand the launcher its layout through environment variables:
//! the workspace root, the Emscripten installation and config file relative
//! to that root, and the interpreter that runs the tool scripts.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use crate::env::Environment;

/// Workspace root override; defaults to the current directory
pub const EXT_BUILD_ROOT: &str = "EXT_BUILD_ROOT";

/// Emscripten installation directory, relative to the workspace root
pub const EM_BIN_PATH: &str = "EM_BIN_PATH";

/// Emscripten config file, relative to the workspace root
pub const EM_CONFIG_PATH: &str = "EM_CONFIG_PATH";

/// Interpreter that runs the tool scripts
pub const EM_PYTHON_PATH: &str = "EM_PYTHON_PATH";

/// Interpreter used when `EM_PYTHON_PATH` is unset
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Directory under the installation that holds the tool scripts
pub const EMSCRIPTEN_DIR: &str = "emscripten";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub workspace_root: PathBuf,
    pub bin_dir: PathBuf,
    pub config_path: PathBuf,
    pub interpreter: PathBuf,
}

impl LaunchConfig {
    /// Load configuration from the live process environment
    pub fn load() -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::from_env(&Environment::capture(), &cwd))
    }

    /// Build configuration from an environment snapshot.
    ///
    /// `cwd` is only consulted when `EXT_BUILD_ROOT` is unset or empty.
    pub fn from_env(env: &Environment, cwd: &Path) -> Self {
        let workspace_root = match non_empty(env.get(EXT_BUILD_ROOT)) {
            Some(root) => PathBuf::from(root),
            None => {
                log::debug!("{} unset, using {}", EXT_BUILD_ROOT, cwd.display());
                cwd.to_path_buf()
            }
        };

        let bin_dir = PathBuf::from(env.get_or_empty(EM_BIN_PATH));
        let config_path = PathBuf::from(env.get_or_empty(EM_CONFIG_PATH));

        let interpreter = match non_empty(env.get(EM_PYTHON_PATH)) {
            Some(path) => resolve_interpreter(&workspace_root, Path::new(path)),
            None => PathBuf::from(DEFAULT_INTERPRETER),
        };

        Self {
            workspace_root,
            bin_dir,
            config_path,
            interpreter,
        }
    }

    /// `<workspace_root>/<bin_dir>/emscripten`
    pub fn emscripten_dir(&self) -> PathBuf {
        join_fragment(&self.workspace_root, &self.bin_dir).join(EMSCRIPTEN_DIR)
    }

    /// `<workspace_root>/<config_path>`
    pub fn config_file(&self) -> PathBuf {
        join_fragment(&self.workspace_root, &self.config_path)
    }
}

fn non_empty(value: Option<&OsStr>) -> Option<&OsStr> {
    value.filter(|v| !v.is_empty())
}

/// Join a relative fragment onto `root`; an empty fragment adds nothing
/// and an absolute one replaces the root.
pub fn join_fragment(root: &Path, fragment: &Path) -> PathBuf {
    if fragment.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(fragment)
    }
}

/// Bare names are left for `PATH` lookup, anything with a directory part
/// is anchored at the workspace root.
fn resolve_interpreter(workspace_root: &Path, path: &Path) -> PathBuf {
    let bare = path.components().count() == 1 && path.is_relative();
    if bare {
        path.to_path_buf()
    } else {
        join_fragment(workspace_root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        pairs.iter().copied().collect()
    }

    fn cwd() -> PathBuf {
        PathBuf::from("/cwd")
    }

    #[test]
    fn test_documented_layout() {
        let config = LaunchConfig::from_env(
            &env(&[
                (EXT_BUILD_ROOT, "/w"),
                (EM_BIN_PATH, "bin"),
                (EM_CONFIG_PATH, "cfg/em.cfg"),
            ]),
            &cwd(),
        );

        assert_eq!(config.workspace_root, PathBuf::from("/w"));
        assert_eq!(config.emscripten_dir(), PathBuf::from("/w/bin/emscripten"));
        assert_eq!(config.config_file(), PathBuf::from("/w/cfg/em.cfg"));
    }

    #[test]
    fn test_workspace_root_defaults_to_cwd() {
        let config = LaunchConfig::from_env(&env(&[(EM_BIN_PATH, "bin")]), &cwd());
        assert_eq!(config.workspace_root, cwd());
        assert_eq!(config.emscripten_dir(), PathBuf::from("/cwd/bin/emscripten"));
    }

    #[test]
    fn test_empty_workspace_root_defaults_to_cwd() {
        let config = LaunchConfig::from_env(&env(&[(EXT_BUILD_ROOT, "")]), &cwd());
        assert_eq!(config.workspace_root, cwd());
    }

    #[test]
    fn test_missing_fragments_are_empty() {
        let config = LaunchConfig::from_env(&env(&[(EXT_BUILD_ROOT, "/w")]), &cwd());
        assert_eq!(config.bin_dir, PathBuf::new());
        assert_eq!(config.emscripten_dir(), PathBuf::from("/w/emscripten"));
        assert_eq!(config.config_file(), PathBuf::from("/w"));
    }

    #[test]
    fn test_absolute_fragment_replaces_root() {
        let config = LaunchConfig::from_env(
            &env(&[(EXT_BUILD_ROOT, "/w"), (EM_CONFIG_PATH, "/etc/em.cfg")]),
            &cwd(),
        );
        assert_eq!(config.config_file(), PathBuf::from("/etc/em.cfg"));
    }

    #[test]
    fn test_default_interpreter() {
        let config = LaunchConfig::from_env(&env(&[]), &cwd());
        assert_eq!(config.interpreter, PathBuf::from(DEFAULT_INTERPRETER));
    }

    #[test]
    fn test_bare_interpreter_uses_path_lookup() {
        let config = LaunchConfig::from_env(
            &env(&[(EXT_BUILD_ROOT, "/w"), (EM_PYTHON_PATH, "python3.11")]),
            &cwd(),
        );
        assert_eq!(config.interpreter, PathBuf::from("python3.11"));
    }

    #[test]
    fn test_relative_interpreter_is_anchored_at_root() {
        let config = LaunchConfig::from_env(
            &env(&[
                (EXT_BUILD_ROOT, "/w"),
                (EM_PYTHON_PATH, "external/python/bin/python3"),
            ]),
            &cwd(),
        );
        assert_eq!(config.interpreter, PathBuf::from("/w/external/python/bin/python3"));
    }

    #[test]
    fn test_absolute_interpreter_kept() {
        let config = LaunchConfig::from_env(
            &env(&[(EXT_BUILD_ROOT, "/w"), (EM_PYTHON_PATH, "/usr/bin/python3")]),
            &cwd(),
        );
        assert_eq!(config.interpreter, PathBuf::from("/usr/bin/python3"));
    }

    #[test]
    fn test_load_uses_process_environment() {
        let config = LaunchConfig::load().unwrap();
        if std::env::var_os(EXT_BUILD_ROOT).is_none_or(|v| v.is_empty()) {
            assert_eq!(config.workspace_root, std::env::current_dir().unwrap());
        }
    }
}
