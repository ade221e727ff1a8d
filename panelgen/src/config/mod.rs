//! Configuration management for panelgen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `PANELGEN_` prefix, `__` for nesting)
//! 2. `./panelgen.toml` or an explicit file passed to [`PanelgenConfig::load_from`]
//! 3. `~/.config/panelgen/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # panelgen.toml
//! [server]
//! host = "0.0.0.0"
//! port = 5000
//!
//! [generator]
//! output_dir = "../frontend"
//! project_name = "Shop Admin"
//! languages = ["en", "fr", "ar"]
//! missing_widget = "omit"
//! template_dir = "./templates"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Local config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "panelgen.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PANELGEN_";

/// HTTP upload server settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Maximum accepted request body in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_bytes: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl ServerSettings {
    /// `host:port` string suitable for binding a listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// What to do with a row whose `ui_component` cell is empty
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MissingWidgetPolicy {
    /// Treat the row as a plain text input
    #[default]
    Default,
    /// Leave the row out of the model (primary keys, audit columns)
    Omit,
}

/// Code generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Root of the generated front-end tree
    pub output_dir: PathBuf,

    /// Application title used in the sidebar, login page and document title
    pub project_name: String,

    /// Locales that get a `translation.json`
    pub languages: Vec<String>,

    /// Fallback locale for i18next
    pub default_language: String,

    /// Locales rendered right-to-left
    pub rtl_languages: Vec<String>,

    /// Policy for rows without a `ui_component`
    pub missing_widget: MissingWidgetPolicy,

    /// Directory of `<artifact>.hbs` files overriding the built-in templates
    pub template_dir: Option<PathBuf>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("../frontend"),
            project_name: "Admin Panel".to_string(),
            languages: vec!["en".to_string(), "fr".to_string(), "ar".to_string()],
            default_language: "en".to_string(),
            rtl_languages: vec!["ar".to_string()],
            missing_widget: MissingWidgetPolicy::Default,
            template_dir: None,
        }
    }
}

impl GeneratorSettings {
    /// Whether `lang` is written right-to-left
    #[must_use]
    pub fn is_rtl(&self, lang: &str) -> bool {
        self.rtl_languages.iter().any(|l| l == lang)
    }
}

/// Complete panelgen configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PanelgenConfig {
    /// Upload server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorSettings,
}

impl PanelgenConfig {
    /// Load configuration from the default locations
    ///
    /// Searches, in increasing priority: defaults, the XDG user config,
    /// `./panelgen.toml` and `PANELGEN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or a
    /// value has the wrong type.
    pub fn load() -> Result<Self> {
        let mut figment = Self::base_figment();

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Ok(figment.merge(Self::env_provider()).extract()?)
    }

    /// Load configuration from a specific file
    ///
    /// The user config and environment are still applied; the file replaces
    /// `./panelgen.toml`. A missing file falls back to the other layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self::base_figment()
            .merge(Toml::file(path))
            .merge(Self::env_provider())
            .extract()?)
    }

    /// Get the recommended XDG config path
    ///
    /// # Example
    ///
    /// ```rust
    /// use panelgen::config::PanelgenConfig;
    ///
    /// let path = PanelgenConfig::recommended_path();
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join("panelgen").join("config.toml"),
        )
    }

    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).split("__").lowercase(true)
    }
}
