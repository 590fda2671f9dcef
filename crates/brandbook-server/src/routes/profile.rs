use axum::Json;
use axum::extract::State;

use brandbook_core::form::FieldUpdate;
use brandbook_core::models::profile::ProfileRequest;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileRequest> {
    let session = state.session.lock().await;
    Json(session.form.snapshot())
}

pub async fn replace_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfileRequest>, ApiError> {
    let mut session = state.session.lock().await;
    session.form.replace(request)?;
    Ok(Json(session.form.snapshot()))
}

pub async fn update_field(
    State(state): State<AppState>,
    Json(update): Json<FieldUpdate>,
) -> Json<ProfileRequest> {
    let mut session = state.session.lock().await;
    session.form.apply(update);
    Json(session.form.snapshot())
}
