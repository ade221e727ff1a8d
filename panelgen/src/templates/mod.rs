//! Built-in artifact templates
//!
//! Every output file of a generated panel is one entry in
//! [`BUILTIN_TEMPLATES`]. Paths and descriptions are Handlebars templates
//! rendered against the same context as the content.

mod app;
mod i18n;
mod layout;
mod model;
mod theme;

pub use app::*;
pub use i18n::*;
pub use layout::*;
pub use model::*;
pub use theme::*;

use crate::generator::{Artifact, ArtifactScope};

/// A built-in artifact definition
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTemplate {
    /// Artifact name
    pub name: &'static str,
    /// Render scope
    pub scope: ArtifactScope,
    /// Output path template
    pub path: &'static str,
    /// Log description template
    pub description: &'static str,
    /// Content template
    pub source: &'static str,
}

impl BuiltinTemplate {
    /// Owned artifact ready for registration
    #[must_use]
    pub fn to_artifact(&self) -> Artifact {
        Artifact {
            name: self.name.to_string(),
            scope: self.scope,
            path: self.path.to_string(),
            template: self.source.to_string(),
            description: self.description.to_string(),
        }
    }
}

const fn builtin(
    name: &'static str,
    scope: ArtifactScope,
    path: &'static str,
    description: &'static str,
    source: &'static str,
) -> BuiltinTemplate {
    BuiltinTemplate {
        name,
        scope,
        path,
        description,
        source,
    }
}

/// All built-in artifacts, in render order
pub const BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[
    builtin(
        "model_schema",
        ArtifactScope::PerModel,
        "src/components/forms/{{component_name}}/{{component_name}}Schema.ts",
        "Zod schema for {{model_name}}",
        MODEL_SCHEMA,
    ),
    builtin(
        "model_form",
        ArtifactScope::PerModel,
        "src/components/forms/{{component_name}}/{{component_name}}Form.tsx",
        "Form for {{model_name}}",
        MODEL_FORM,
    ),
    builtin(
        "model_data_table",
        ArtifactScope::PerModel,
        "src/pages/{{component_name}}/{{component_name}}DataTable.tsx",
        "Data table for {{model_name}}",
        MODEL_DATA_TABLE,
    ),
    builtin(
        "model_slice",
        ArtifactScope::PerModel,
        "src/store/slices/{{slice_name}}Slice.ts",
        "Redux slice for {{model_name}}",
        MODEL_SLICE,
    ),
    builtin(
        "routes",
        ArtifactScope::Global,
        "src/routes/routes.tsx",
        "Application routes",
        ROUTES,
    ),
    builtin("store", ArtifactScope::Global, "src/store/store.ts", "Redux store", STORE),
    builtin(
        "store_hooks",
        ArtifactScope::Global,
        "src/store/hooks.ts",
        "Typed store hooks",
        STORE_HOOKS,
    ),
    builtin(
        "api_thunk",
        ArtifactScope::Global,
        "src/store/thunks/apiThunk.ts",
        "Generic API thunk",
        API_THUNK,
    ),
    builtin(
        "api_client",
        ArtifactScope::Global,
        "src/lib/api.ts",
        "Axios client",
        API_CLIENT,
    ),
    builtin(
        "env_example",
        ArtifactScope::Global,
        ".env.example",
        "Environment example",
        ENV_EXAMPLE,
    ),
    builtin(
        "dashboard_layout",
        ArtifactScope::Global,
        "src/layout/DashboardLayout.tsx",
        "Dashboard layout",
        DASHBOARD_LAYOUT,
    ),
    builtin(
        "sidebar",
        ArtifactScope::Global,
        "src/layout/Sidebar.tsx",
        "Sidebar navigation",
        SIDEBAR,
    ),
    builtin("header", ArtifactScope::Global, "src/layout/Header.tsx", "Header", HEADER),
    builtin(
        "dashboard",
        ArtifactScope::Global,
        "src/pages/Dashboard.tsx",
        "Dashboard page",
        DASHBOARD,
    ),
    builtin(
        "login_page",
        ArtifactScope::Global,
        "src/pages/Auth/LoginPage.tsx",
        "Login page",
        LOGIN_PAGE,
    ),
    builtin(
        "auth_context",
        ArtifactScope::Global,
        "src/context/AuthContext.tsx",
        "Auth context",
        AUTH_CONTEXT,
    ),
    builtin(
        "theme_provider",
        ArtifactScope::Global,
        "src/components/theme-provider.tsx",
        "Theme provider",
        THEME_PROVIDER,
    ),
    builtin(
        "mode_toggle",
        ArtifactScope::Global,
        "src/components/mode-toggle.tsx",
        "Theme toggle",
        MODE_TOGGLE,
    ),
    builtin(
        "language_switcher",
        ArtifactScope::Global,
        "src/components/LanguageSwitcher.tsx",
        "Language switcher",
        LANGUAGE_SWITCHER,
    ),
    builtin(
        "i18n_config",
        ArtifactScope::Global,
        "src/i18n/index.ts",
        "i18next setup",
        I18N_CONFIG,
    ),
    builtin(
        "translation",
        ArtifactScope::PerLanguage,
        "src/i18n/locales/{{lang}}/translation.json",
        "Translations for {{lang}}",
        TRANSLATION,
    ),
    builtin("index_css", ArtifactScope::Global, "src/index.css", "Theme stylesheet", INDEX_CSS),
    builtin("main", ArtifactScope::Global, "src/main.tsx", "Application entry", MAIN),
];

/// Look up a built-in artifact by name
#[must_use]
pub fn find_builtin(name: &str) -> Option<&'static BuiltinTemplate> {
    BUILTIN_TEMPLATES.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_unique() {
        let names: HashSet<_> = BUILTIN_TEMPLATES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), BUILTIN_TEMPLATES.len());
    }

    #[test]
    fn test_find_builtin() {
        let form = find_builtin("model_form").unwrap();
        assert_eq!(form.scope, ArtifactScope::PerModel);
        assert!(find_builtin("nope").is_none());
    }
}
