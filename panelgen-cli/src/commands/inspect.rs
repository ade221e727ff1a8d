//! Print parsed models

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use panelgen::config::MissingWidgetPolicy;
use panelgen::model::{parse_workbook, ModelSet, NormalizeOptions};

use crate::load_config;

/// Print the model set parsed from a workbook as JSON
#[derive(Debug, Clone, Args)]
pub struct InspectCommand {
    /// Workbook to read
    pub file: PathBuf,

    /// Config file replacing ./panelgen.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Leave out rows without a `ui_component`
    #[arg(long)]
    pub omit_missing_widget: bool,
}

impl InspectCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be parsed
    pub fn execute(&self) -> Result<()> {
        let models = self.models()?;
        let json = serde_json::to_string_pretty(&models).context("Failed to serialize models")?;
        println!("{json}");
        Ok(())
    }

    /// Parse the workbook with the configured normalization options
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or workbook cannot be read
    pub fn models(&self) -> Result<ModelSet> {
        let config = load_config(self.config.as_deref())?;
        let mut options = NormalizeOptions::from(&config.generator);
        if self.omit_missing_widget {
            options.missing_widget = MissingWidgetPolicy::Omit;
        }

        parse_workbook(&self.file, &options)
            .with_context(|| format!("Failed to parse {}", self.file.display()))
    }
}
