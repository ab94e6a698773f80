//! Locates a local LibreOffice/OpenOffice installation for a document preview service.
//!
//! The entry point is [`core::locator::OfficeLocator`]: it applies the
//! `office.home` setting from `application.properties` (with `${VAR:default}`
//! placeholders resolved from the environment) and otherwise probes an ordered
//! list of platform-specific install directories.

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;

pub use crate::core::environment::Environment;
pub use crate::core::locator::{OfficeLocator, default_office_home};
pub use crate::models::{OfficeHome, OsFamily};
