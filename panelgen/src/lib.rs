//! # panelgen
//!
//! Spreadsheet-driven generator for React admin panels.
//!
//! A workbook describes data models, one sheet per model and one row per
//! column. `panelgen` parses it into [`model::ModelSet`] and renders a
//! registry of Handlebars templates into a front-end source tree.
//!
//! ## Pipeline
//!
//! 1. [`sheet`] loads raw rows and sheet flags from the workbook
//! 2. [`model`] normalizes rows into fields and sheets into models
//! 3. [`generator`] renders global, per-model and per-language artifacts
//! 4. [`writer`] writes the rendered files under the output root
//!
//! [`pipeline`] runs all four; [`server`] exposes them as `POST /generate`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use panelgen::config::PanelgenConfig;
//! use panelgen::pipeline;
//!
//! # fn main() -> anyhow::Result<()> {
//! panelgen::observability::init()?;
//!
//! let config = PanelgenConfig::load()?;
//! let report = pipeline::generate_from_workbook("models.xlsx".as_ref(), &config)?;
//! println!("generated {} files", report.files.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod observability;
pub mod pipeline;
pub mod server;
pub mod sheet;
pub mod templates;
pub mod writer;

pub use error::{Error, Result};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use panelgen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{GeneratorSettings, MissingWidgetPolicy, PanelgenConfig, ServerSettings};
    pub use crate::error::{Error, Result};
    pub use crate::generator::{FrontendGenerator, GeneratedFile, TemplateRegistry};
    pub use crate::model::{
        parse_workbook, Field, ModelConfig, ModelSet, NormalizeOptions, SemanticType, UiWidget,
        ValidationRule,
    };
    pub use crate::pipeline::{generate_from_workbook, GenerationReport};
}
