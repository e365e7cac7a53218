//! Environment snapshot handed to the wrapped tool.
//!
//! The launcher never mutates its own process environment. It copies it into
//! an [`Environment`], overrides the Emscripten pointers on the copy and gives
//! the copy to the child.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Tells Emscripten where its installation directory is
pub const EMSCRIPTEN: &str = "EMSCRIPTEN";

/// Tells Emscripten where its configuration file is
pub const EM_CONFIG: &str = "EM_CONFIG";

/// An owned copy of a process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
}

impl Environment {
    /// Copy the current process environment
    pub fn capture() -> Self {
        std::env::vars_os().collect()
    }

    /// Value of `key`, if present
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Value of `key`, treating an unset variable as empty
    pub fn get_or_empty(&self, key: impl AsRef<OsStr>) -> &OsStr {
        self.get(key).unwrap_or_default()
    }

    /// Set `key` on this copy only
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Return a copy with the Emscripten directory and config file overridden
    pub fn with_emscripten(&self, emscripten_dir: &Path, config_file: &Path) -> Self {
        let mut env = self.clone();
        env.set(EMSCRIPTEN, emscripten_dir);
        env.set(EM_CONFIG, config_file);
        env
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
