//! # Config Loader
//!
//! Loads `application.properties` and applies the environment overlay. A file that
//! cannot be read or parsed never aborts startup: the failure is logged and the
//! caller continues as if nothing were configured.
use crate::core::{
    environment::Environment,
    overlay,
    properties::{self, PropertiesError, PropertyMap},
};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: PropertiesError,
    },
}

/// Reads and parses a properties file without resolving placeholders.
///
/// Files that are not valid UTF-8 are decoded as ISO-8859-1.
///
/// # Errors
/// Returns `ConfigError::Read` if the file cannot be read and
/// `ConfigError::Parse` if it contains a malformed escape.
pub fn load_properties(path: &Path) -> Result<PropertyMap, ConfigError> {
    let bytes = fs::read(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let content = decode(bytes);
    properties::parse(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Loads the properties file at `path` and resolves its placeholders against `env`.
///
/// Any `ConfigError` is recovered into an empty map.
pub fn load_overlay(path: &Path, env: &Environment) -> PropertyMap {
    log::debug!("Loading config overlay from {}", path.display());
    match load_properties(path) {
        Ok(mut props) => {
            overlay::resolve_placeholders(&mut props, env);
            props
        }
        Err(e) => {
            log::warn!("{}. Continuing without configuration overrides.", e);
            PropertyMap::new()
        }
    }
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        log::debug!("Config file is not UTF-8; decoding as ISO-8859-1");
        e.into_bytes().iter().map(|&b| char::from(b)).collect()
    })
}
