//! Parse, generate and write in one call

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{GeneratorSettings, PanelgenConfig};
use crate::error::{Error, Result};
use crate::generator::{FrontendGenerator, TemplateRegistry};
use crate::model::{parse_workbook, ModelSet, NormalizeOptions};
use crate::writer::write_files;

/// Outcome of one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Generated model names, in sheet order
    pub models: Vec<String>,
    /// Files written
    pub files: Vec<PathBuf>,
    /// Output root
    pub output_dir: PathBuf,
}

/// Build the registry for a run: built-ins plus any configured overrides
///
/// # Errors
///
/// Returns an error if a template fails to compile or the override
/// directory cannot be read
pub fn build_registry(settings: &GeneratorSettings) -> Result<TemplateRegistry> {
    let mut registry = TemplateRegistry::builtin()?;
    if let Some(dir) = &settings.template_dir {
        registry.load_overrides(dir)?;
    }
    Ok(registry)
}

/// Render and write the front-end for already parsed models
///
/// # Errors
///
/// Returns [`Error::NoModels`] for an empty set, or any template or I/O error
pub fn generate_models(models: &ModelSet, config: &PanelgenConfig) -> Result<GenerationReport> {
    if models.is_empty() {
        return Err(Error::NoModels);
    }

    let settings = &config.generator;
    let generator = FrontendGenerator::new(build_registry(settings)?, settings.clone());
    let files = generator.generate(models)?;
    let written = write_files(&settings.output_dir, &files)?;

    Ok(GenerationReport {
        models: models.keys().cloned().collect(),
        files: written,
        output_dir: settings.output_dir.clone(),
    })
}

/// Run the whole pipeline for a workbook on disk
///
/// # Errors
///
/// Returns an error if the workbook cannot be read, contains no usable
/// models, or generation fails
pub fn generate_from_workbook(path: &Path, config: &PanelgenConfig) -> Result<GenerationReport> {
    let span = tracing::info_span!("generate", workbook = %path.display());
    let _guard = span.enter();

    let models = parse_workbook(path, &NormalizeOptions::from(&config.generator))?;
    let report = generate_models(&models, config)?;

    tracing::info!(
        models = report.models.len(),
        files = report.files.len(),
        output = %report.output_dir.display(),
        "Generation complete"
    );
    Ok(report)
}
