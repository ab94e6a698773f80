// src/models.rs

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The operating-system families that carry distinct install layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    /// Windows, with `%ProgramFiles%` style install roots.
    Windows,
    /// macOS, with `.app` bundles under `/Applications`.
    MacOs,
    /// Linux and every other Unix-like system.
    Unix,
}

impl OsFamily {
    /// Returns the family of the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Unix
        }
    }

    /// Get the display name for this family
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Unix => "Unix",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for OsFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "macos" | "mac" | "darwin" => Ok(Self::MacOs),
            "unix" | "linux" => Ok(Self::Unix),
            other => Err(format!(
                "Unknown OS family '{}'. Expected one of: windows, macos, unix.",
                other
            )),
        }
    }
}

/// A single probe pass: one executable path tested beneath each candidate, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbePass {
    /// Path of the executable relative to an install home (e.g. `program/soffice.bin`).
    pub executable: PathBuf,
    /// Candidate install homes, most preferred first.
    pub candidates: Vec<PathBuf>,
}

impl ProbePass {
    /// Creates a pass probing `executable` beneath each of `candidates`.
    pub fn new(executable: impl Into<PathBuf>, candidates: Vec<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            candidates,
        }
    }
}

/// The ordered passes probed for one OS family.
///
/// Most families need a single pass. macOS needs two because the bundle layout
/// moved the executable between LibreOffice releases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbePlan {
    /// The family this plan was built for.
    pub family: OsFamily,
    /// Passes in probing order; the first hit ends the walk.
    pub passes: Vec<ProbePass>,
}

impl ProbePlan {
    /// Total number of existence checks a fruitless walk of this plan performs.
    pub fn probe_count(&self) -> usize {
        self.passes.iter().map(|p| p.candidates.len()).sum()
    }
}

/// Outcome of locating the office installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "path", rename_all = "lowercase")]
pub enum OfficeHome {
    /// Taken verbatim from `office.home`, never validated.
    Configured(PathBuf),
    /// Found by probing the candidate plan.
    Discovered(PathBuf),
    /// No override and no candidate held the executable.
    NotFound,
}

impl OfficeHome {
    /// The resolved directory, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Configured(p) | Self::Discovered(p) => Some(p),
            Self::NotFound => None,
        }
    }

    /// Consumes the outcome, returning the resolved directory if any.
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Self::Configured(p) | Self::Discovered(p) => Some(p),
            Self::NotFound => None,
        }
    }
}
