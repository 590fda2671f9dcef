use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use brandbook_core::models::slide::{Slide, SlideContent, SlideUpdate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn add_slide(State(state): State<AppState>) -> (StatusCode, Json<Slide>) {
    let mut session = state.session.lock().await;
    let slide = session.form.add_slide().clone();
    (StatusCode::CREATED, Json(slide))
}

pub async fn replace_slide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(content): Json<SlideContent>,
) -> Result<Json<Slide>, ApiError> {
    let mut session = state.session.lock().await;
    let slide = session.form.replace_slide(id, content)?.clone();
    Ok(Json(slide))
}

pub async fn update_slide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<SlideUpdate>,
) -> Result<Json<Slide>, ApiError> {
    let mut session = state.session.lock().await;
    let slide = session.form.update_slide(id, update)?.clone();
    Ok(Json(slide))
}

pub async fn delete_slide(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut session = state.session.lock().await;
    session.form.remove_slide(id)?;
    Ok(StatusCode::NO_CONTENT)
}
