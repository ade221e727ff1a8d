//! Artifact registry
//!
//! Each artifact owns three compiled templates: its content, its output
//! path and its log description. Built-ins come from [`crate::templates`];
//! any of them can be replaced from a directory of `<name>.hbs` files.

use std::fs;
use std::path::Path;

use handlebars::{handlebars_helper, Handlebars, Template};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::templates::BUILTIN_TEMPLATES;

/// Extension of template override files
pub const TEMPLATE_EXTENSION: &str = "hbs";

/// How often an artifact is rendered per generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactScope {
    /// Once per run, with the global context
    Global,
    /// Once per model, with that model's context
    PerModel,
    /// Once per configured language
    PerLanguage,
}

impl ArtifactScope {
    /// Get the display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::PerModel => "per-model",
            Self::PerLanguage => "per-language",
        }
    }
}

/// A named template producing one file per render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    /// Unique name, also the override file stem
    pub name: String,
    /// Render scope
    pub scope: ArtifactScope,
    /// Handlebars template for the output path, relative to the output root
    pub path: String,
    /// Handlebars template for the file content
    pub template: String,
    /// Handlebars template for the log line
    pub description: String,
}

handlebars_helper!(json: |value: Json| {
    serde_json::to_string_pretty(value).unwrap_or_default()
});

/// Compiled artifacts in registration order
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
    artifacts: IndexMap<String, Artifact>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("json", Box::new(json));

        Self {
            handlebars,
            artifacts: IndexMap::new(),
        }
    }

    /// Create a registry holding every built-in artifact
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for builtin in BUILTIN_TEMPLATES {
            registry.register(builtin.to_artifact())?;
        }
        Ok(registry)
    }

    /// Register an artifact, replacing any artifact with the same name
    ///
    /// # Errors
    ///
    /// Returns an error if the content, path or description template fails
    /// to compile. The registry is unchanged in that case.
    pub fn register(&mut self, artifact: Artifact) -> Result<()> {
        let compile = |source: &str| {
            Template::compile(source).map_err(|source| Error::Template {
                name: artifact.name.clone(),
                source: Box::new(source),
            })
        };
        let content = compile(&artifact.template)?;
        let path = compile(&artifact.path)?;
        let description = compile(&artifact.description)?;

        let name = artifact.name.clone();
        self.handlebars.register_template(&name, content);
        self.handlebars.register_template(&path_key(&name), path);
        self.handlebars
            .register_template(&description_key(&name), description);
        tracing::trace!(artifact = %name, scope = artifact.scope.as_str(), "Registered artifact");
        self.artifacts.insert(name, artifact);
        Ok(())
    }

    /// Replace the content template of a registered artifact
    ///
    /// Returns `false` when no artifact has that name.
    ///
    /// # Errors
    ///
    /// Returns an error if the new template fails to compile
    pub fn override_template(&mut self, name: &str, source: &str) -> Result<bool> {
        let Some(existing) = self.artifacts.get(name) else {
            return Ok(false);
        };
        let mut artifact = existing.clone();
        artifact.template = source.to_string();
        self.register(artifact)?;
        Ok(true)
    }

    /// Apply every `<artifact>.hbs` file found in `dir`
    ///
    /// Files that match no artifact are skipped with a warning. Returns the
    /// names of the artifacts that were replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a template file cannot be read,
    /// or if an override fails to compile
    pub fn load_overrides(&mut self, dir: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::io(dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut applied = Vec::new();
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let source = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
            if self.override_template(name, &source)? {
                tracing::info!(artifact = name, path = %path.display(), "Template override loaded");
                applied.push(name.to_string());
            } else {
                tracing::warn!(file = %path.display(), "Template override matches no artifact, ignoring");
            }
        }
        Ok(applied)
    }

    /// Look up an artifact
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.get(name)
    }

    /// Registered artifacts in registration order
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.values()
    }

    fn ensure(&self, name: &str) -> Result<()> {
        if self.artifacts.contains_key(name) {
            Ok(())
        } else {
            Err(Error::UnknownArtifact(name.to_string()))
        }
    }

    /// Render an artifact's content
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact is unknown or rendering fails
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        self.ensure(name)?;
        Ok(self.handlebars.render(name, context)?)
    }

    /// Render an artifact's output path
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact is unknown or rendering fails
    pub fn render_path<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        self.ensure(name)?;
        Ok(self.handlebars.render(&path_key(name), context)?)
    }

    /// Render an artifact's description
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact is unknown or rendering fails
    pub fn render_description<T: Serialize>(&self, name: &str, context: &T) -> Result<String> {
        self.ensure(name)?;
        Ok(self.handlebars.render(&description_key(name), context)?)
    }
}

fn path_key(name: &str) -> String {
    format!("{name}@path")
}

fn description_key(name: &str) -> String {
    format!("{name}@description")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artifact(name: &str, template: &str) -> Artifact {
        Artifact {
            name: name.to_string(),
            scope: ArtifactScope::PerModel,
            path: "src/{{component_name}}.tsx".to_string(),
            template: template.to_string(),
            description: "{{component_name}} component".to_string(),
        }
    }

    #[test]
    fn test_render_without_escaping() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(artifact("page", "<div>{{label}}</div>"))
            .unwrap();

        let ctx = json!({ "component_name": "User", "label": "A & <B>" });
        assert_eq!(registry.render("page", &ctx).unwrap(), "<div>A & <B></div>");
        assert_eq!(registry.render_path("page", &ctx).unwrap(), "src/User.tsx");
        assert_eq!(
            registry.render_description("page", &ctx).unwrap(),
            "User component"
        );
    }

    #[test]
    fn test_json_helper() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(artifact("data", "const rows = {{json rows}};"))
            .unwrap();

        let out = registry.render("data", &json!({ "rows": [1, 2] })).unwrap();
        assert_eq!(out, "const rows = [\n  1,\n  2\n];");
    }

    #[test]
    fn test_unknown_artifact() {
        let registry = TemplateRegistry::new();
        let err = registry.render("missing", &json!({})).unwrap_err();
        assert!(matches!(err, Error::UnknownArtifact(name) if name == "missing"));
    }

    #[test]
    fn test_invalid_template_is_rejected() {
        let mut registry = TemplateRegistry::new();
        let err = registry.register(artifact("broken", "{{#if x}}")).unwrap_err();
        assert!(matches!(err, Error::Template { ref name, .. } if name == "broken"));
        assert!(registry.get("broken").is_none());
    }

    #[test]
    fn test_load_overrides() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("page.hbs"), "custom {{label}}").unwrap();
        fs::write(dir.path().join("unknown.hbs"), "ignored").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a template").unwrap();

        let mut registry = TemplateRegistry::new();
        registry.register(artifact("page", "builtin")).unwrap();

        let applied = registry.load_overrides(dir.path()).unwrap();
        assert_eq!(applied, vec!["page".to_string()]);
        assert_eq!(
            registry.render("page", &json!({ "label": "x" })).unwrap(),
            "custom x"
        );
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_builtin_registry_compiles() {
        let registry = TemplateRegistry::builtin().unwrap();
        assert!(registry.get("model_form").is_some());
        assert!(registry.get("routes").is_some());
        assert!(registry
            .artifacts()
            .any(|a| a.scope == ArtifactScope::PerLanguage));
    }
}
