//! Front-end generator
//!
//! Renders the registry against a [`ModelSet`]:
//! - global artifacts once, with [`context::global_context`]
//! - per-model artifacts once per model, with [`context::model_context`]
//! - per-language artifacts once per configured language
//!
//! No artifact sees another artifact's output, so render order only affects
//! the log.

pub mod context;
mod helpers;
mod registry;
mod zod;

use std::path::PathBuf;

use serde_json::Value;

use crate::config::GeneratorSettings;
use crate::error::Result;
use crate::model::ModelSet;

pub use helpers::{TemplateHelpers, DEFAULT_ICON};
pub use registry::{Artifact, ArtifactScope, TemplateRegistry, TEMPLATE_EXTENSION};
pub use zod::{is_required, zod_chain};

/// Generated file information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative path from the output root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// Renders every registered artifact for a model set
pub struct FrontendGenerator {
    registry: TemplateRegistry,
    settings: GeneratorSettings,
}

impl FrontendGenerator {
    /// Create a generator over a registry
    #[must_use]
    pub fn new(registry: TemplateRegistry, settings: GeneratorSettings) -> Self {
        Self { registry, settings }
    }

    /// Render all artifacts
    ///
    /// # Errors
    ///
    /// Returns an error if any template fails to render
    pub fn generate(&self, models: &ModelSet) -> Result<Vec<GeneratedFile>> {
        let global = context::global_context(models, &self.settings);
        let mut files = Vec::new();

        for artifact in self.registry.artifacts() {
            match artifact.scope {
                ArtifactScope::Global => {
                    files.push(self.render(&artifact.name, &global)?);
                }
                ArtifactScope::PerModel => {
                    for model in models.values() {
                        let ctx = context::model_context(model, models, &self.settings);
                        files.push(self.render(&artifact.name, &ctx)?);
                    }
                }
                ArtifactScope::PerLanguage => {
                    for lang in &self.settings.languages {
                        let ctx = context::language_context(lang, models, &self.settings);
                        files.push(self.render(&artifact.name, &ctx)?);
                    }
                }
            }
        }

        tracing::info!(
            files = files.len(),
            models = models.len(),
            "Front-end rendered"
        );
        Ok(files)
    }

    fn render(&self, name: &str, context: &Value) -> Result<GeneratedFile> {
        let file = GeneratedFile {
            path: PathBuf::from(self.registry.render_path(name, context)?),
            content: self.registry.render(name, context)?,
            description: self.registry.render_description(name, context)?,
        };
        tracing::debug!(
            artifact = name,
            path = %file.path.display(),
            "{}",
            file.description
        );
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{normalize_row, ModelConfig, NormalizeOptions};
    use crate::sheet::RawRow;

    fn models() -> ModelSet {
        let row = |column: &str, widget: &str| {
            normalize_row(
                &RawRow {
                    column: Some(column.to_string()),
                    ui_component: Some(widget.to_string()),
                    is_null: Some("N".to_string()),
                    ..RawRow::default()
                },
                &NormalizeOptions::default(),
            )
            .unwrap()
        };

        let mut set = ModelSet::new();
        set.insert(
            "User".to_string(),
            ModelConfig {
                name: "User".to_string(),
                sheet_name: "users".to_string(),
                fields: vec![row("id", ""), row("name", "input"), row("bio", "textarea")],
                is_popup: false,
                no_crud: false,
            },
        );
        set
    }

    #[test]
    fn test_scopes_fan_out() {
        let mut registry = TemplateRegistry::new();
        for (name, scope, path) in [
            ("g", ArtifactScope::Global, "global.txt"),
            ("m", ArtifactScope::PerModel, "{{component_name}}.txt"),
            ("l", ArtifactScope::PerLanguage, "{{lang}}.json"),
        ] {
            registry
                .register(Artifact {
                    name: name.to_string(),
                    scope,
                    path: path.to_string(),
                    template: "x".to_string(),
                    description: name.to_string(),
                })
                .unwrap();
        }

        let generator = FrontendGenerator::new(registry, GeneratorSettings::default());
        let files = generator.generate(&models()).unwrap();
        let paths: Vec<_> = files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("global.txt"),
                PathBuf::from("User.txt"),
                PathBuf::from("en.json"),
                PathBuf::from("fr.json"),
                PathBuf::from("ar.json"),
            ]
        );
    }

    #[test]
    fn test_builtin_form_renders_fields() {
        let generator =
            FrontendGenerator::new(TemplateRegistry::builtin().unwrap(), GeneratorSettings::default());
        let files = generator.generate(&models()).unwrap();

        let form = files
            .iter()
            .find(|f| f.path == PathBuf::from("src/components/forms/User/UserForm.tsx"))
            .unwrap();
        assert!(form.content.contains("export function UserForm"));
        assert!(form.content.contains("name=\"bio\""));
        assert!(form.content.contains("<Textarea"));
        assert!(!form.content.contains("name=\"id\""));

        let schema = files
            .iter()
            .find(|f| f.path == PathBuf::from("src/components/forms/User/UserSchema.ts"))
            .unwrap();
        assert!(schema
            .content
            .contains(r#"name: z.string().min(1, { message: "Name is required" }),"#));
    }
}
