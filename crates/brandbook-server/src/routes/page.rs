use axum::extract::State;
use axum::response::Html;

use brandbook_export::render::{render_page, render_preview};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let session = state.session.lock().await;
    let html = render_page(session.form.request(), session.preview())?;
    Ok(Html(html))
}

/// The preview panel alone, swapped in by the page after a submission.
pub async fn preview(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let session = state.session.lock().await;
    Ok(Html(render_preview(session.preview())?))
}
