use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde::Serialize;

use brandbook_core::logo::{LogoImage, MAX_LOGO_BYTES};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body cap for the upload route: the logo limit plus room for the
/// multipart framing.
pub const UPLOAD_BODY_LIMIT: usize = MAX_LOGO_BYTES + 1024 * 1024;

const LOGO_FIELD: &str = "logo";

#[derive(Debug, Serialize)]
pub struct LogoResponse {
    pub mime: Option<String>,
    pub size: usize,
    pub data_uri: String,
}

/// Convert the uploaded file to a data URI and store it on the form.
///
/// The conversion finishes before the session lock is taken, so the form is
/// left untouched when the file is rejected.
pub async fn upload_logo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<LogoResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(LOGO_FIELD) {
            continue;
        }

        let hint = field
            .content_type()
            .filter(|ct| *ct == "image/svg+xml")
            .or(field.file_name())
            .map(str::to_string);
        let bytes = field.bytes().await?;
        let logo = LogoImage::from_bytes(&bytes, hint.as_deref())?;

        tracing::info!(size = bytes.len(), mime = ?logo.mime(), "logo uploaded");
        let response = LogoResponse {
            mime: logo.mime().map(str::to_string),
            size: bytes.len(),
            data_uri: logo.as_data_uri().to_string(),
        };

        state.session.lock().await.form.set_logo(Some(logo));
        return Ok(Json(response));
    }

    Err(ApiError::BadRequest(format!(
        "multipart field `{LOGO_FIELD}` is required"
    )))
}

pub async fn clear_logo(State(state): State<AppState>) -> StatusCode {
    state.session.lock().await.form.set_logo(None);
    StatusCode::NO_CONTENT
}
