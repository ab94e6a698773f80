// src/cli.rs

use crate::models::OsFamily;
use clap::Parser;
use std::path::PathBuf;

/// office-locator: finds the LibreOffice/OpenOffice installation a preview service should use.
///
/// Resolution order:
///
/// 1. `office.home` from the properties file, unless it is `default`.
///    Values written as `${NAME}` or `${NAME:fallback}` are read from the environment.
/// 2. The first platform-specific install directory that contains the suite's executable.
///
/// Exit codes: 0 when an installation is configured or found, 2 when none is found,
/// 1 on any other error.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Properties file to read instead of `<home>/config/application.properties`.
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Probe the candidate list of another OS family (windows, macos, unix).
    #[arg(long, value_name = "FAMILY")]
    pub os: Option<OsFamily>,

    /// Extra install directory probed before all others (e.g. a bundled build).
    #[arg(long, value_name = "PATH")]
    pub dev_path: Option<PathBuf>,

    /// Print the candidate plan instead of probing it.
    #[arg(long)]
    pub plan: bool,

    /// Ignore `office.home` and always probe.
    #[arg(long)]
    pub no_config: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,

    /// Log each resolution step (same as `RUST_LOG=debug`).
    #[arg(long, short)]
    pub verbose: bool,
}
