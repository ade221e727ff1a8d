//! panelgen CLI library

#![forbid(unsafe_code)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;

use std::path::Path;

use anyhow::{Context, Result};
use panelgen::config::PanelgenConfig;

pub use commands::{GenerateCommand, InspectCommand, ServeCommand, TemplatesCommand};

/// Load configuration, from an explicit file when one is given
///
/// # Errors
///
/// Returns an error if the configuration cannot be parsed
pub fn load_config(path: Option<&Path>) -> Result<PanelgenConfig> {
    let config = match path {
        Some(path) => PanelgenConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PanelgenConfig::load().context("Failed to load configuration")?,
    };
    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
