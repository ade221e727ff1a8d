//! Upload server
//!
//! `POST /generate` takes a multipart form with a `file` field, runs the
//! pipeline on it and answers with the generated model names.
//!
//! ```rust,no_run
//! use panelgen::config::PanelgenConfig;
//!
//! # async fn run() -> panelgen::Result<()> {
//! let config = PanelgenConfig::load()?;
//! panelgen::server::serve(config).await?;
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::PanelgenConfig;
use crate::error::{Error, Result};
use crate::pipeline::{generate_from_workbook, GenerationReport};

/// Multipart field carrying the workbook
pub const UPLOAD_FIELD: &str = "file";

/// Extension assumed when the upload has no usable file name
const DEFAULT_EXTENSION: &str = "xlsx";

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    config: Arc<PanelgenConfig>,
    // One generation at a time; every run writes to the same output root
    generation: Arc<Mutex<()>>,
}

impl ServerState {
    /// Create state from loaded configuration
    #[must_use]
    pub fn new(config: PanelgenConfig) -> Self {
        Self {
            config: Arc::new(config),
            generation: Arc::new(Mutex::new(())),
        }
    }

    /// Configuration the server was started with
    #[must_use]
    pub fn config(&self) -> &PanelgenConfig {
        &self.config
    }
}

/// Successful generation response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Human readable outcome
    pub message: String,
    /// Generated model names, in sheet order
    pub models_generated: Vec<String>,
}

impl From<GenerationReport> for GenerateResponse {
    fn from(report: GenerationReport) -> Self {
        Self {
            message: "Generation successful!".to_string(),
            models_generated: report.models,
        }
    }
}

/// Error response wrapper
///
/// Input errors become `400 {message}`; anything else becomes
/// `500 {message, error, stack}` where `stack` is the cause chain.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;

        if err.is_input_error() {
            tracing::warn!(error = %err, "Rejected upload");
            return (StatusCode::BAD_REQUEST, Json(json!({ "message": err.to_string() })))
                .into_response();
        }

        let stack = cause_chain(&err);
        tracing::error!(error = %err, ?stack, "Generation failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": "Generation failed",
                "error": err.to_string(),
                "stack": stack,
            })),
        )
            .into_response()
    }
}

fn cause_chain(err: &Error) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}

/// Build the application router
pub fn router(state: ServerState) -> Router {
    let max_upload = state.config().server.max_upload_bytes;

    Router::new()
        .route("/generate", post(generate))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_upload)),
        )
        .with_state(state)
}

/// Bind the configured address and serve until the process stops
///
/// # Errors
///
/// Returns [`Error::Server`] if the address cannot be bound or the server fails
pub async fn serve(config: PanelgenConfig) -> Result<()> {
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| Error::Server {
            address: address.clone(),
            source,
        })?;

    tracing::info!(
        address = %address,
        output = %config.generator.output_dir.display(),
        "Upload server listening"
    );

    axum::serve(listener, router(ServerState::new(config)))
        .await
        .map_err(|source| Error::Server { address, source })
}

async fn generate(
    State(state): State<ServerState>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> std::result::Result<Json<GenerateResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!(%rejection, "Request is not a multipart upload");
        Error::MissingUpload
    })?;
    let (file_name, bytes) = read_upload(&mut multipart).await?;

    tracing::info!(file = %file_name, bytes = bytes.len(), "Received workbook");

    let _running = state.generation.lock().await;
    let config = Arc::clone(&state.config);
    let report = tokio::task::spawn_blocking(move || {
        let upload = spool_upload(&file_name, &bytes)?;
        generate_from_workbook(upload.path(), &config)
    })
    .await
    .map_err(Error::from)??;

    Ok(Json(report.into()))
}

#[allow(clippy::unused_async)]
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Upload(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| Error::Upload(e.to_string()))?;
        return Ok((file_name, bytes.to_vec()));
    }

    Err(Error::MissingUpload)
}

/// Write the upload to a temp file that keeps its extension
///
/// calamine picks the reader from the extension. The file is removed when
/// the returned handle drops.
fn spool_upload(file_name: &str, bytes: &[u8]) -> Result<tempfile::NamedTempFile> {
    let extension = upload_extension(file_name);
    let mut file = tempfile::Builder::new()
        .prefix("panelgen-upload-")
        .suffix(&format!(".{extension}"))
        .tempfile()
        .map_err(|e| Error::io(std::env::temp_dir(), e))?;

    file.write_all(bytes)
        .map_err(|e| Error::io(file.path(), e))?;
    Ok(file)
}

fn upload_extension(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map_or_else(|| DEFAULT_EXTENSION.to_string(), str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_extension() {
        assert_eq!(upload_extension("models.XLSX"), "xlsx");
        assert_eq!(upload_extension("legacy.xls"), "xls");
        assert_eq!(upload_extension("sheet.ods"), "ods");
        assert_eq!(upload_extension("blob"), "xlsx");
        assert_eq!(upload_extension(""), "xlsx");
    }

    #[test]
    fn test_spooled_upload_keeps_extension() {
        let file = spool_upload("models.xls", b"data").unwrap();
        assert_eq!(file.path().extension().unwrap(), "xls");
        assert_eq!(std::fs::read(file.path()).unwrap(), b"data");

        let path = file.path().to_path_buf();
        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn test_input_error_is_bad_request() {
        let response = ApiError(Error::NoModels).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let response = ApiError(Error::UnknownArtifact("form".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_cause_chain_includes_source() {
        let err = Error::io(
            "out",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let chain = cause_chain(&err);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1], "denied");
    }
}
