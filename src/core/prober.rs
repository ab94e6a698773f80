// src/core/prober.rs

use crate::models::ProbePlan;
use std::fs;
use std::path::{Path, PathBuf};

/// The existence check used while probing candidates.
///
/// Implemented for any `Fn(&Path) -> bool`, so tests can substitute a closure for
/// the real filesystem.
pub trait FileProbe {
    /// Returns `true` if `path` is an existing regular file.
    fn is_regular_file(&self, path: &Path) -> bool;
}

/// Probes the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn is_regular_file(&self, path: &Path) -> bool {
        // Directories and broken symlinks don't count.
        match fs::metadata(path) {
            Ok(metadata) => metadata.is_file(),
            Err(_) => false,
        }
    }
}

impl<F> FileProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn is_regular_file(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Finds the first candidate directory containing `executable`.
///
/// Candidates are checked strictly in order; each check is a single stat with no
/// retry. A candidate that is malformed (for example, built from an unset
/// environment variable) is still checked and simply fails. An empty candidate
/// checks `executable` relative to the working directory.
///
/// Returns the matching candidate as an absolute path, or `None` if no candidate
/// matches. Not finding an installation is an ordinary outcome, not an error.
pub fn find_install_home<P, F>(executable: &Path, candidates: &[P], probe: &F) -> Option<PathBuf>
where
    P: AsRef<Path>,
    F: FileProbe + ?Sized,
{
    let mut file_path = PathBuf::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        file_path.push(candidate);
        file_path.push(executable);
        let found = probe.is_regular_file(&file_path);
        log::info!("Probing {} ... {}", file_path.display(), found);
        if found {
            return Some(make_absolute(candidate));
        }
        file_path.clear(); // clear but keep the allocation
    }

    None
}

/// Walks every pass of `plan` in order and returns the first match.
pub fn run_plan<F>(plan: &ProbePlan, probe: &F) -> Option<PathBuf>
where
    F: FileProbe + ?Sized,
{
    for (i, pass) in plan.passes.iter().enumerate() {
        log::debug!(
            "{} probe pass {}/{}: looking for '{}' in {} candidates",
            plan.family,
            i + 1,
            plan.passes.len(),
            pass.executable.display(),
            pass.candidates.len()
        );
        if let Some(home) = find_install_home(&pass.executable, &pass.candidates, probe) {
            return Some(home);
        }
    }
    None
}

fn make_absolute(path: &Path) -> PathBuf {
    match std::path::absolute(path) {
        Ok(abs) => dunce::simplified(&abs).to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}
