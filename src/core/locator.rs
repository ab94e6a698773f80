// src/core/locator.rs

use crate::{
    core::{
        candidates, config_loader,
        environment::Environment,
        overlay, paths,
        prober::{self, FileProbe, FsProbe},
        properties::PropertyMap,
    },
    models::{OfficeHome, OsFamily, ProbePlan},
};
use std::fmt;
use std::path::{Path, PathBuf};

/// Locates the office installation for one process start.
///
/// The configured `office.home` wins when it is set to anything but `default`.
/// Otherwise the candidate plan for the OS family is probed.
pub struct OfficeLocator {
    env: Environment,
    family: OsFamily,
    config_path: Option<PathBuf>,
    development: Option<PathBuf>,
    probe: Box<dyn FileProbe>,
}

impl fmt::Debug for OfficeLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfficeLocator")
            .field("env", &self.env)
            .field("family", &self.family)
            .field("config_path", &self.config_path)
            .field("development", &self.development)
            .finish_non_exhaustive()
    }
}

impl OfficeLocator {
    /// Creates a locator for the current OS family that probes the real filesystem
    /// and reads `<home>/config/application.properties`.
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            family: OsFamily::current(),
            config_path: None,
            development: None,
            probe: Box::new(FsProbe),
        }
    }

    /// Selects the candidate plan of another OS family.
    pub fn os_family(mut self, family: OsFamily) -> Self {
        self.family = family;
        self
    }

    /// Reads configuration from `path` instead of the customized config path.
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Adds a candidate probed before all others, e.g. a locally built or bundled suite.
    pub fn development_candidate(mut self, path: impl Into<PathBuf>) -> Self {
        self.development = Some(path.into());
        self
    }

    /// Replaces the filesystem existence check.
    pub fn probe(mut self, probe: impl FileProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// The OS family whose candidate plan is probed.
    pub fn family(&self) -> OsFamily {
        self.family
    }

    /// The properties file this locator reads.
    pub fn effective_config_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| paths::customized_config_path(&self.env))
    }

    /// Loads the configuration overlay. Failures yield an empty map.
    pub fn load_config(&self) -> PropertyMap {
        config_loader::load_overlay(&self.effective_config_path(), &self.env)
    }

    /// The candidate plan that would be probed for this locator's OS family.
    pub fn plan(&self) -> ProbePlan {
        candidates::plan_for(self.family, &self.env, self.development.as_deref())
    }

    /// Resolves the install home: configured override first, then probing.
    pub fn locate(&self) -> OfficeHome {
        let properties = self.load_config();
        if let Some(home) = overlay::office_home_override(&properties) {
            log::info!("Using configured office home: {}", home.display());
            return OfficeHome::Configured(home);
        }
        self.discover()
    }

    /// Probes the candidate plan, ignoring any configuration.
    pub fn discover(&self) -> OfficeHome {
        let plan = self.plan();
        log::debug!(
            "Probing {} candidates for {}",
            plan.probe_count(),
            self.family
        );
        match prober::run_plan(&plan, self.probe.as_ref()) {
            Some(home) => {
                log::info!("Found office installation at {}", home.display());
                OfficeHome::Discovered(home)
            }
            None => {
                log::info!("No office installation found for {}", self.family);
                OfficeHome::NotFound
            }
        }
    }
}

/// Returns the office install home for the running process, or `None`.
///
/// Reads the process environment and working directory once, then behaves like
/// `OfficeLocator::locate`.
pub fn default_office_home() -> Option<PathBuf> {
    OfficeLocator::new(Environment::from_process())
        .locate()
        .into_path()
}
