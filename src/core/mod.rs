// src/core/mod.rs

pub mod candidates;
pub mod config_loader;
pub mod environment;
pub mod locator;
pub mod overlay;
pub mod paths;
pub mod prober;
pub mod properties;
