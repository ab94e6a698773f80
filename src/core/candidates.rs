//! Candidate install homes for each OS family.
//!
//! Lists are ordered newest-first: a newer major version wins over an older one,
//! and on Windows the 64-bit tree wins over the 32-bit one for the same version.

use crate::{
    constants::{
        EXECUTABLE_DEFAULT, EXECUTABLE_MAC, EXECUTABLE_MAC_41, EXECUTABLE_WINDOWS,
        PROGRAM_FILES_ENV, PROGRAM_FILES_X86_ENV,
    },
    core::{environment::Environment, paths},
    models::{OsFamily, ProbePass, ProbePlan},
};
use std::path::{Path, PathBuf};

/// Which `Program Files` tree a Windows candidate lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgramFiles {
    /// `%ProgramFiles%`: the 64-bit tree on a 64-bit host.
    Native,
    /// `%ProgramFiles(x86)%`: the 32-bit tree on a 64-bit host.
    X86,
}

/// Windows install directories, probed after `<base>/libreoffice`.
const WINDOWS_INSTALL_DIRS: &[(ProgramFiles, &str)] = &[
    (ProgramFiles::X86, "LibreOffice"),
    (ProgramFiles::Native, "LibreOffice 7"),
    (ProgramFiles::X86, "LibreOffice 7"),
    (ProgramFiles::Native, "LibreOffice 6"),
    (ProgramFiles::X86, "LibreOffice 6"),
    (ProgramFiles::Native, "LibreOffice 5"),
    (ProgramFiles::X86, "LibreOffice 5"),
    (ProgramFiles::Native, "LibreOffice 4"),
    (ProgramFiles::X86, "LibreOffice 4"),
    (ProgramFiles::X86, "OpenOffice 4"),
    (ProgramFiles::Native, "LibreOffice 3"),
    (ProgramFiles::X86, "LibreOffice 3"),
    (ProgramFiles::X86, "OpenOffice.org 3"),
];

/// macOS application bundles, probed once per executable layout.
const MACOS_BUNDLES: &[&str] = &[
    "/Applications/LibreOffice.app/Contents",
    "/Applications/OpenOffice.app/Contents",
    "/Applications/OpenOffice.org.app/Contents",
];

/// Released LibreOffice versions installed as `/opt/libreofficeX.Y` by the upstream packages.
const UNIX_OPT_VERSIONS: &[&str] = &[
    "6.0", "6.1", "6.2", "6.3", "6.4", "7.0", "7.1", "7.2", "7.3", "7.4", "7.5",
];

/// System prefixes used by distribution packages, probed after the versioned `/opt` dirs.
const UNIX_SYSTEM_DIRS: &[&str] = &[
    "/usr/lib64/libreoffice",
    "/usr/lib/libreoffice",
    "/usr/local/lib64/libreoffice",
    "/usr/local/lib/libreoffice",
    "/opt/libreoffice",
    "/usr/lib64/openoffice",
    "/usr/lib64/openoffice.org3",
    "/usr/lib64/openoffice.org",
    "/usr/lib/openoffice",
    "/usr/lib/openoffice.org3",
    "/usr/lib/openoffice.org",
    "/opt/openoffice4",
    "/opt/openoffice.org3",
];

/// Builds the probe plan for `family`.
///
/// `development` is an extra candidate (typically a bundled build next to the
/// application) checked before every other candidate of each pass.
pub fn plan_for(family: OsFamily, env: &Environment, development: Option<&Path>) -> ProbePlan {
    let mut plan = match family {
        OsFamily::Windows => windows_plan(env),
        OsFamily::MacOs => macos_plan(),
        OsFamily::Unix => unix_plan(),
    };

    if let Some(dev) = development {
        for pass in &mut plan.passes {
            pass.candidates.insert(0, dev.to_path_buf());
        }
    }
    plan
}

/// The Windows plan: `program/soffice.exe` under the bundled directory and the
/// `Program Files` trees.
///
/// An unset `ProgramFiles` variable leaves an empty root, so its candidates
/// become rooted at `\` and fail the existence check like any other miss.
pub fn windows_plan(env: &Environment) -> ProbePlan {
    let native = env.var(PROGRAM_FILES_ENV);
    let x86 = env.var(PROGRAM_FILES_X86_ENV);
    if native.is_none() || x86.is_none() {
        log::debug!("ProgramFiles variables incomplete (native: {:?}, x86: {:?})", native, x86);
    }

    let mut candidates = Vec::with_capacity(WINDOWS_INSTALL_DIRS.len() + 1);
    candidates.push(paths::resolve_base_directory(env).join("libreoffice"));
    candidates.extend(WINDOWS_INSTALL_DIRS.iter().map(|(tree, dir)| {
        let root = match tree {
            ProgramFiles::Native => native,
            ProgramFiles::X86 => x86,
        };
        windows_join(root, dir)
    }));

    ProbePlan {
        family: OsFamily::Windows,
        passes: vec![ProbePass::new(EXECUTABLE_WINDOWS, candidates)],
    }
}

/// The macOS plan: the 4.1+ bundle layout first, then the older `program/` layout.
pub fn macos_plan() -> ProbePlan {
    let bundles: Vec<PathBuf> = MACOS_BUNDLES.iter().map(PathBuf::from).collect();
    ProbePlan {
        family: OsFamily::MacOs,
        passes: vec![
            ProbePass::new(EXECUTABLE_MAC_41, bundles.clone()),
            ProbePass::new(EXECUTABLE_MAC, bundles),
        ],
    }
}

/// The Linux/Unix plan: versioned `/opt` installs, then distribution prefixes.
pub fn unix_plan() -> ProbePlan {
    let candidates = UNIX_OPT_VERSIONS
        .iter()
        .map(|v| PathBuf::from(format!("/opt/libreoffice{}", v)))
        .chain(UNIX_SYSTEM_DIRS.iter().map(PathBuf::from))
        .collect();

    ProbePlan {
        family: OsFamily::Unix,
        passes: vec![ProbePass::new(EXECUTABLE_DEFAULT, candidates)],
    }
}

fn windows_join(root: Option<&str>, dir: &str) -> PathBuf {
    PathBuf::from(format!("{}\\{}", root.unwrap_or_default(), dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prober::run_plan;
    use std::cell::RefCell;

    fn windows_env() -> Environment {
        Environment::new("C:\\kkFileView")
            .with_var(PROGRAM_FILES_ENV, "C:\\Program Files")
            .with_var(PROGRAM_FILES_X86_ENV, "C:\\Program Files (x86)")
    }

    #[test]
    fn test_windows_plan_prefers_bundled_then_newest_64_bit() {
        let plan = windows_plan(&windows_env());
        assert_eq!(plan.passes.len(), 1);
        let pass = &plan.passes[0];
        assert_eq!(pass.executable, PathBuf::from("program/soffice.exe"));
        assert_eq!(pass.candidates.len(), 14);
        assert_eq!(pass.candidates[0], PathBuf::from("C:\\kkFileView").join("libreoffice"));
        assert_eq!(pass.candidates[1], PathBuf::from("C:\\Program Files (x86)\\LibreOffice"));
        assert_eq!(pass.candidates[2], PathBuf::from("C:\\Program Files\\LibreOffice 7"));
        assert_eq!(pass.candidates[3], PathBuf::from("C:\\Program Files (x86)\\LibreOffice 7"));
        assert_eq!(
            pass.candidates.last(),
            Some(&PathBuf::from("C:\\Program Files (x86)\\OpenOffice.org 3"))
        );
    }

    #[test]
    fn test_windows_plan_descends_through_major_versions() {
        let plan = windows_plan(&windows_env());
        let names: Vec<String> = plan.passes[0]
            .candidates
            .iter()
            .skip(2)
            .map(|p| p.to_string_lossy().into_owned())
            .filter(|p| p.contains("LibreOffice "))
            .collect();
        let majors: Vec<char> = names.iter().filter_map(|n| n.chars().last()).collect();
        assert_eq!(majors, vec!['7', '7', '6', '6', '5', '5', '4', '4', '3', '3']);
    }

    #[test]
    fn test_windows_plan_with_unset_program_files_does_not_panic() {
        let env = Environment::new("C:\\kkFileView");
        let plan = windows_plan(&env);
        let pass = &plan.passes[0];
        assert_eq!(pass.candidates.len(), 14);
        assert_eq!(pass.candidates[2], PathBuf::from("\\LibreOffice 7"));

        // Every malformed candidate is still probed and just misses.
        let calls = RefCell::new(0);
        let probe = |_: &Path| {
            *calls.borrow_mut() += 1;
            false
        };
        assert_eq!(run_plan(&plan, &probe), None);
        assert_eq!(*calls.borrow(), 14);
    }

    #[test]
    fn test_macos_plan_has_two_passes_over_same_bundles() {
        let plan = macos_plan();
        assert_eq!(plan.passes.len(), 2);
        assert_eq!(plan.passes[0].executable, PathBuf::from("MacOS/soffice"));
        assert_eq!(plan.passes[1].executable, PathBuf::from("program/soffice"));
        assert_eq!(plan.passes[0].candidates, plan.passes[1].candidates);
        assert_eq!(
            plan.passes[0].candidates[0],
            PathBuf::from("/Applications/LibreOffice.app/Contents")
        );
    }

    #[test]
    fn test_macos_old_layout_is_found_on_second_pass() {
        let plan = macos_plan();
        let seen = RefCell::new(Vec::new());
        let probe = |p: &Path| {
            seen.borrow_mut().push(p.to_path_buf());
            p == Path::new("/Applications/OpenOffice.app/Contents/program/soffice")
        };

        let found = run_plan(&plan, &probe);
        assert_eq!(found, Some(PathBuf::from("/Applications/OpenOffice.app/Contents")));
        // All three bundles were tried with the new layout before falling back.
        assert_eq!(seen.borrow().len(), 5);
        assert!(seen.borrow()[..3].iter().all(|p| p.ends_with("MacOS/soffice")));
    }

    #[test]
    fn test_macos_not_found_only_after_both_passes() {
        let plan = macos_plan();
        let seen = RefCell::new(Vec::new());
        let probe = |p: &Path| {
            seen.borrow_mut().push(p.to_path_buf());
            false
        };

        assert_eq!(run_plan(&plan, &probe), None);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 6);
        assert_eq!(seen.iter().filter(|p| p.ends_with("MacOS/soffice")).count(), 3);
        assert_eq!(seen.iter().filter(|p| p.ends_with("program/soffice")).count(), 3);
    }

    #[test]
    fn test_unix_plan_order() {
        let plan = unix_plan();
        let pass = &plan.passes[0];
        assert_eq!(pass.executable, PathBuf::from("program/soffice.bin"));
        assert_eq!(pass.candidates[0], PathBuf::from("/opt/libreoffice6.0"));
        assert_eq!(pass.candidates[10], PathBuf::from("/opt/libreoffice7.5"));
        assert_eq!(pass.candidates[11], PathBuf::from("/usr/lib64/libreoffice"));
        assert_eq!(pass.candidates.last(), Some(&PathBuf::from("/opt/openoffice.org3")));
        assert_eq!(pass.candidates.len(), 24);
    }

    #[test]
    fn test_development_candidate_is_probed_first() {
        let dev = PathBuf::from("/src/target/classes/libreoffice");
        let env = Environment::new("/");
        let plan = plan_for(OsFamily::Unix, &env, Some(&dev));
        assert_eq!(plan.passes[0].candidates[0], dev);
        assert_eq!(plan.passes[0].candidates.len(), 25);

        let plan = plan_for(OsFamily::MacOs, &env, Some(&dev));
        assert!(plan.passes.iter().all(|p| p.candidates[0] == dev));

        let plan = plan_for(OsFamily::Unix, &env, None);
        assert_eq!(plan, unix_plan());
    }
}
