use axum::{
    Json,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use lumina_translate::mt::{Direction, MtError, decode_document};

use crate::AppState;

pub const CONFIG_ERROR: &str = "Server configuration error: Missing API key.";
pub const FILE_REQUIRED: &str = "File is required.";
pub const DIRECTION_REQUIRED: &str = "Valid translation direction is required.";
pub const UPSTREAM_FAILED: &str = "Failed to communicate with the translation service.";
pub const PARSE_FAILED: &str = "Failed to parse the translation response.";
pub const FILE_TOO_LARGE: &str = "File is too large.";
pub const UNEXPECTED: &str = "An unexpected error occurred while processing your request.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub provider: Option<String>,
    pub configured: bool,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.to_string(),
        }),
    )
}

/// Public face of a provider failure. Details stay in the log.
fn translation_error(err: &MtError) -> ApiError {
    match err {
        MtError::UpstreamError(_) => api_error(StatusCode::BAD_GATEWAY, UPSTREAM_FAILED),
        MtError::ParseError(_) => api_error(StatusCode::INTERNAL_SERVER_ERROR, PARSE_FAILED),
        MtError::ConfigError(_) => api_error(StatusCode::INTERNAL_SERVER_ERROR, CONFIG_ERROR),
        MtError::ValidationError(_) => api_error(StatusCode::BAD_REQUEST, DIRECTION_REQUIRED),
        MtError::Other(_) => api_error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED),
    }
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Upload rejected: {}", err.body_text());
        api_error(StatusCode::PAYLOAD_TOO_LARGE, FILE_TOO_LARGE)
    } else {
        error!("Translation endpoint error: {}", err.body_text());
        api_error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED)
    }
}

struct UploadedFile {
    name: String,
    content: Vec<u8>,
}

#[derive(Default)]
struct TranslationForm {
    file: Option<UploadedFile>,
    direction: Option<String>,
}

/// Read every field; the first `file` part carrying a filename and the first
/// `direction` field win.
async fn read_form(multipart: &mut Multipart) -> Result<TranslationForm, ApiError> {
    let mut form = TranslationForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" if form.file.is_none() => {
                // A plain text field named `file` is not an upload
                let Some(name) = field.file_name().map(str::to_string) else {
                    continue;
                };
                let content = field.bytes().await.map_err(multipart_error)?;
                form.file = Some(UploadedFile {
                    name,
                    content: content.to_vec(),
                });
            }
            "direction" if form.direction.is_none() => {
                form.direction = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Replace characters that would break the quoted `filename` parameter
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c == '"' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// `POST /api/translate`
///
/// Multipart form with `file` and `direction` (`en-id` or `id-en`). Answers
/// with the translated text as a `translated_<name>` attachment, or with a
/// JSON `{ success: false, error }` body.
pub async fn translate_document(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let Some(translator) = state.translator.clone() else {
        error!("Translation requested but no API key is configured");
        return Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, CONFIG_ERROR));
    };

    let mut multipart = multipart.map_err(|rejection| {
        error!("Translation endpoint error: {}", rejection.body_text());
        api_error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED)
    })?;
    let form = read_form(&mut multipart).await?;

    let Some(file) = form.file else {
        warn!("Rejected request without a file");
        return Err(api_error(StatusCode::BAD_REQUEST, FILE_REQUIRED));
    };
    let direction = form
        .direction
        .as_deref()
        .ok_or_else(|| MtError::ValidationError("missing direction".to_string()))
        .and_then(Direction::parse)
        .map_err(|e| {
            warn!("Rejected request: {}", e);
            api_error(StatusCode::BAD_REQUEST, DIRECTION_REQUIRED)
        })?;

    info!(
        "Translating '{}' ({} bytes, {}) with {}",
        file.name,
        file.content.len(),
        direction,
        translator.provider_name()
    );

    let text = decode_document(&file.content);
    let translated = translator.translate(&text, direction).await.map_err(|e| {
        error!("Translation of '{}' failed: {}", file.name, e);
        translation_error(&e)
    })?;

    let disposition = format!(
        "attachment; filename=\"translated_{}\"",
        sanitize_filename(&file.name)
    );
    let disposition = HeaderValue::from_bytes(disposition.as_bytes()).map_err(|e| {
        error!("Invalid Content-Disposition for '{}': {}", file.name, e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED)
    })?;

    info!(
        "Translated '{}' → {} characters",
        file.name,
        translated.chars().count()
    );

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        translated,
    )
        .into_response())
}

/// `GET /api/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        provider: state
            .translator
            .as_ref()
            .map(|t| t.provider_name().to_string()),
        configured: state.translator.is_some(),
    })
}

pub async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}
