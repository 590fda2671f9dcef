use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use brandbook_export::pdf::prepare_download;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn download_pdf(State(state): State<AppState>) -> Result<Response, ApiError> {
    let download = {
        let session = state.session.lock().await;
        let result = session
            .preview()
            .result()
            .ok_or_else(|| ApiError::NotFound("no generated profile".to_string()))?;
        prepare_download(result)?
    }
    .ok_or_else(|| ApiError::NotFound("the generated profile has no PDF".to_string()))?;

    tracing::info!(
        filename = %download.filename,
        size = download.bytes.len(),
        "pdf downloaded"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&download.filename),
            ),
        ],
        download.bytes,
    )
        .into_response())
}

/// `attachment` with an ASCII fallback name and the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let ascii: String = filename
        .chars()
        .map(|c| if c.is_ascii() && c != '"' && c != '\\' { c } else { '_' })
        .collect();
    let encoded = utf8_percent_encode(filename, NON_ALPHANUMERIC);
    format!("attachment; filename=\"{ascii}\"; filename*=UTF-8''{encoded}")
}
