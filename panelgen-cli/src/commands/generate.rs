//! Workbook to front-end generation
//!
//! # Example
//!
//! ```bash
//! panelgen generate models.xlsx -o ../frontend --omit-missing-widget
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use console::{style, Emoji};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use panelgen::config::{MissingWidgetPolicy, PanelgenConfig};
use panelgen::model::{parse_workbook, NormalizeOptions};
use panelgen::pipeline::{generate_models, GenerationReport};

use crate::load_config;

static SUCCESS: Emoji<'_, '_> = Emoji("✓ ", "");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Generate the front-end tree
#[derive(Debug, Clone, Args)]
pub struct GenerateCommand {
    /// Workbook to read (xlsx, xlsm, xlsb, xls or ods)
    pub file: PathBuf,

    /// Output directory (default: `generator.output_dir`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file replacing ./panelgen.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Leave out rows without a `ui_component`
    #[arg(long)]
    pub omit_missing_widget: bool,

    /// Overwrite a non-empty output directory without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl GenerateCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or workbook cannot be read, no
    /// models were found, or writing the output fails
    pub fn execute(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let output = &config.generator.output_dir;

        println!(
            "\n{} {} {} {}",
            style("Generating").green().bold(),
            style(self.file.display()).cyan().bold(),
            style("into").bold(),
            style(output.display()).cyan()
        );

        if !self.confirm_overwrite(output)? {
            println!("{}", style("Aborted; nothing was written.").yellow());
            return Ok(());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let report = self.generate(&config, &spinner);
        spinner.finish_and_clear();

        let report = report?;
        print_report(&report);
        Ok(())
    }

    /// Configuration with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn resolve_config(&self) -> Result<PanelgenConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(output) = &self.output {
            config.generator.output_dir.clone_from(output);
        }
        if self.omit_missing_widget {
            config.generator.missing_widget = MissingWidgetPolicy::Omit;
        }
        Ok(config)
    }

    /// Run generation without terminal output or prompts
    ///
    /// # Errors
    ///
    /// Returns an error if the workbook cannot be read, holds no models, or
    /// the output cannot be written
    pub fn run(&self) -> Result<GenerationReport> {
        let config = self.resolve_config()?;
        self.generate(&config, &ProgressBar::hidden())
    }

    fn generate(&self, config: &PanelgenConfig, progress: &ProgressBar) -> Result<GenerationReport> {
        progress.set_message("Parsing workbook...");
        let models = parse_workbook(&self.file, &NormalizeOptions::from(&config.generator))
            .with_context(|| format!("Failed to parse {}", self.file.display()))?;
        if models.is_empty() {
            bail!("No models found in {}", self.file.display());
        }

        progress.set_message(format!("Rendering {} models...", models.len()));
        generate_models(&models, config).context("Failed to generate front-end")
    }

    fn confirm_overwrite(&self, output: &Path) -> Result<bool> {
        if self.yes || !has_entries(output) || !console::user_attended() {
            return Ok(true);
        }

        Confirm::new()
            .with_prompt(format!(
                "{} is not empty. Overwrite generated files?",
                output.display()
            ))
            .default(false)
            .interact()
            .context("Failed to read confirmation")
    }
}

fn has_entries(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok_and(|mut entries| entries.next().is_some())
}

fn print_report(report: &GenerationReport) {
    println!(
        "\n{} {} files for {}:",
        style("Generated").green().bold(),
        report.files.len(),
        style(report.models.join(", ")).cyan()
    );

    for path in &report.files {
        let shown = path.strip_prefix(&report.output_dir).unwrap_or(path);
        println!("  {SUCCESS}{}", style(shown.display()).dim());
    }

    println!("\n{SPARKLE}{}", style("Admin panel is ready!").green().bold());
    println!("\n{}", style("Next steps:").cyan().bold());
    println!(
        "  1. Enter the project: {}",
        style(format!("cd {}", report.output_dir.display())).yellow()
    );
    println!("  2. Install dependencies: {}", style("npm install").yellow());
    println!("  3. Start the dev server: {}", style("npm run dev").yellow());
}
