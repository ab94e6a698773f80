// src/core/paths.rs

use crate::{
    constants::{BIN_FOLDER_ENV, CONFIG_DIR_NAME, CONFIG_FILENAME, USER_DIR_ENV},
    core::environment::Environment,
};
use std::path::{Path, PathBuf};

/// Returns the base directory the application runs from.
///
/// Resolution order:
/// 1. `KKFILEVIEW_BIN_FOLDER`
/// 2. `user_dir`
/// 3. The working directory of `env`
///
/// The result is made absolute against the working directory but is never checked
/// for existence; it is only a textual base for building further paths.
pub fn resolve_base_directory(env: &Environment) -> PathBuf {
    let raw = env
        .var(BIN_FOLDER_ENV)
        .or_else(|| env.var(USER_DIR_ENV))
        .map(PathBuf::from);

    let base = match raw {
        Some(path) => absolutize(env, &path),
        None => env.current_dir().to_path_buf(),
    };
    log::debug!("Resolved base directory: {}", base.display());
    base
}

/// Normalizes the base directory to the application's install root.
///
/// * If `<base>/bin` exists, the base itself is the root.
/// * If the base exists and is named `bin`, its parent is the root.
/// * Otherwise the first existing of the base and its parent is returned.
///
/// Returns `None` when none of these paths exist.
pub fn resolve_install_root(env: &Environment) -> Option<PathBuf> {
    let base = resolve_base_directory(env);

    if base.join("bin").exists() {
        return Some(dunce::simplified(&base).to_path_buf());
    }

    if base.exists() && is_bin_dir(&base) {
        return base.parent().map(|p| dunce::simplified(p).to_path_buf());
    }

    first_existing([Some(base.as_path()), base.parent()].into_iter().flatten())
}

/// Returns the application home: the base directory with a trailing `bin`
/// component stripped.
pub fn resolve_home_path(env: &Environment) -> PathBuf {
    let base = resolve_base_directory(env);
    if is_bin_dir(&base)
        && let Some(parent) = base.parent()
    {
        return parent.to_path_buf();
    }
    base
}

/// Returns the path of the customized configuration file
/// (`<home>/config/application.properties`).
pub fn customized_config_path(env: &Environment) -> PathBuf {
    resolve_home_path(env)
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILENAME)
}

fn is_bin_dir(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == "bin")
}

// Returns the first path that exists on disk.
fn first_existing<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Option<PathBuf> {
    paths
        .into_iter()
        .find(|p| p.exists())
        .map(|p| dunce::simplified(p).to_path_buf())
}

fn absolutize(env: &Environment, path: &Path) -> PathBuf {
    if path.as_os_str().is_empty() {
        env.current_dir().to_path_buf()
    } else if path.is_absolute() {
        path.to_path_buf()
    } else {
        env.current_dir().join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    #[cfg(unix)]
    fn test_base_directory_prefers_bin_folder_variable() {
        let env = Environment::new("/work")
            .with_var(USER_DIR_ENV, "/srv/user")
            .with_var(BIN_FOLDER_ENV, "/srv/app/bin");
        assert_eq!(resolve_base_directory(&env), PathBuf::from("/srv/app/bin"));
    }

    #[test]
    #[cfg(unix)]
    fn test_base_directory_falls_back_to_user_dir_then_cwd() {
        let env = Environment::new("/work").with_var(USER_DIR_ENV, "/srv/user");
        assert_eq!(resolve_base_directory(&env), PathBuf::from("/srv/user"));

        let env = Environment::new("/work");
        assert_eq!(resolve_base_directory(&env), PathBuf::from("/work"));
    }

    #[test]
    #[cfg(unix)]
    fn test_base_directory_resolves_relative_values_against_cwd() {
        let env = Environment::new("/work").with_var(BIN_FOLDER_ENV, "deploy");
        assert_eq!(resolve_base_directory(&env), PathBuf::from("/work/deploy"));
    }

    #[test]
    fn test_install_root_when_bin_subdirectory_exists() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();
        let env = Environment::new(dir.path());

        assert_eq!(resolve_install_root(&env), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_install_root_when_base_is_bin() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("bin");
        fs::create_dir(&bin).unwrap();
        let env = Environment::new("/unused").with_var(BIN_FOLDER_ENV, bin.to_str().unwrap());

        assert_eq!(resolve_install_root(&env), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_install_root_falls_back_to_existing_parent() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("not-created");
        let env =
            Environment::new("/unused").with_var(BIN_FOLDER_ENV, missing.to_str().unwrap());

        assert_eq!(resolve_install_root(&env), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_install_root_is_none_when_nothing_exists() {
        let env = Environment::new("/unused")
            .with_var(BIN_FOLDER_ENV, "/definitely/not/here/at/all");
        assert_eq!(resolve_install_root(&env), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_config_path_strips_trailing_bin() {
        let env = Environment::new("/work").with_var(BIN_FOLDER_ENV, "/srv/app/bin");
        assert_eq!(
            customized_config_path(&env),
            PathBuf::from("/srv/app/config/application.properties")
        );

        let env = Environment::new("/srv/app");
        assert_eq!(
            customized_config_path(&env),
            PathBuf::from("/srv/app/config/application.properties")
        );
    }
}
