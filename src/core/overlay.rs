// src/core/overlay.rs

use crate::{
    constants::{DEFAULT_OFFICE_HOME_VALUE, OFFICE_HOME_KEY},
    core::{environment::Environment, properties::PropertyMap},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

lazy_static! {
    // `${...}` spanning the whole (trimmed) value.
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"(?s)^\$\{(.*)\}$").expect("placeholder pattern is valid");
}

/// Rewrites every `${NAME}` / `${NAME:default}` value in place.
///
/// The inner text is split at its first `:` into a variable name and a default.
/// The variable's value is used when it is set and not blank; otherwise the value
/// becomes the default (empty when there is no `:`). Values that are not a single
/// placeholder are left untouched.
///
/// This is one pass over the map: a default that itself looks like a placeholder
/// is not resolved again. Taking the map by `&mut` keeps concurrent callers from
/// rewriting the same map.
pub fn resolve_placeholders(properties: &mut PropertyMap, env: &Environment) {
    for (key, value) in properties.iter_mut() {
        if let Some(resolved) = resolve_value(value, env) {
            log::debug!("Resolved placeholder for '{}'", key);
            *value = resolved;
        }
    }
}

/// Resolves a single value, returning `None` when it is not a placeholder.
pub fn resolve_value(value: &str, env: &Environment) -> Option<String> {
    let captures = PLACEHOLDER_RE.captures(value.trim())?;
    let inner = captures.get(1).map_or("", |m| m.as_str());

    let (name, default) = inner.split_once(':').unwrap_or((inner, ""));

    match env.var(name) {
        Some(env_value) if !env_value.trim().is_empty() => Some(env_value.to_string()),
        _ => Some(default.to_string()),
    }
}

/// Returns the explicit install home from `office.home`, if one is configured.
///
/// Any present value other than `default` is returned verbatim, even an empty
/// one, without checking that it exists. A missing key or `default` means
/// "discover automatically".
pub fn office_home_override(properties: &PropertyMap) -> Option<PathBuf> {
    let value = properties.get(OFFICE_HOME_KEY)?;
    if value == DEFAULT_OFFICE_HOME_VALUE {
        return None;
    }
    Some(PathBuf::from(value))
}
