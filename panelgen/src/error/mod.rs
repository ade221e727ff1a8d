//! Error types and error handling

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Library error type
#[derive(Debug, Error)]
pub enum Error {
    /// The workbook path does not exist
    #[error("File not found at path: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The workbook could not be opened or a sheet could not be decoded
    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// Parsing finished without a single usable model
    #[error("No models found.")]
    NoModels,

    /// The upload request carried no `file` field
    #[error("No file.")]
    MissingUpload,

    /// Multipart body could not be read
    #[error("Upload error: {0}")]
    Upload(String),

    /// A template failed to compile
    #[error("Template error in '{name}': {source}")]
    Template {
        /// Artifact name
        name: String,
        /// Underlying compile error
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    /// A template failed to render
    #[error("Render error: {0}")]
    TemplateRender(#[from] handlebars::RenderError),

    /// Unknown artifact name
    #[error("Unknown artifact: {0}")]
    UnknownArtifact(String),

    /// Filesystem failure with the path that caused it
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The upload server could not bind or stopped serving
    #[error("Server error on {address}: {source}")]
    Server {
        /// Bind address
        address: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Background task panicked or was cancelled
    #[error("Task error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error was caused by the caller's input rather than the generator
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound(_) | Self::NoModels | Self::MissingUpload | Self::Upload(_)
        )
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
