// src/core/environment.rs

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// A snapshot of the process inputs that discovery depends on: environment
/// variables and the working directory.
///
/// Resolution code reads from this value instead of the real process, so it can
/// be exercised with any environment without calling `env::set_var`.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
    current_dir: PathBuf,
}

impl Environment {
    /// Creates an empty environment rooted at `current_dir`.
    pub fn new(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            vars: HashMap::new(),
            current_dir: current_dir.into(),
        }
    }

    /// Captures the variables and working directory of the running process.
    ///
    /// Variables that are not valid Unicode are skipped. If the working directory
    /// cannot be read, `.` is used.
    pub fn from_process() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|e| {
            log::warn!("Could not read the current directory ({}); using '.'", e);
            PathBuf::from(".")
        });
        Self {
            vars: env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
            current_dir,
        }
    }

    /// Adds or replaces a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Returns the value of `name`, or `None` when it is unset.
    ///
    /// An empty value counts as set.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// The working directory relative paths are resolved against.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_distinguishes_unset_from_empty() {
        let env = Environment::new("/work").with_var("EMPTY", "");
        assert_eq!(env.var("EMPTY"), Some(""));
        assert_eq!(env.var("MISSING"), None);
        assert_eq!(env.current_dir(), Path::new("/work"));
    }

    #[test]
    fn test_from_process_captures_working_directory() {
        let env = Environment::from_process();
        assert_eq!(env.current_dir(), env::current_dir().unwrap().as_path());
    }
}
