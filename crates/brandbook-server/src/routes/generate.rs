use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use brandbook_core::models::preview::PreviewState;
use brandbook_core::session::Completion;

use crate::error::ApiError;
use crate::state::AppState;

/// Submit the current form and wait for the outcome.
///
/// The session lock is released while the provider call runs, so the form
/// stays editable and a newer submission can start. Only the newest
/// submission's outcome reaches the preview.
///
/// The call and its completion run on a spawned task, so the outcome is
/// recorded even if the client disconnects mid-flight.
pub async fn generate(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<PreviewState>), ApiError> {
    let submission = state.session.lock().await.begin_submission();

    let task = tokio::spawn(async move {
        let outcome = state
            .gemini
            .generate(&submission.request)
            .await
            .map_err(|e| {
                tracing::error!(
                    submission_id = submission.id,
                    error = %e,
                    "profile generation failed"
                );
                e.user_message()
            });

        let mut session = state.session.lock().await;
        let status = match session.complete_submission(submission.id, outcome) {
            Completion::Superseded => StatusCode::CONFLICT,
            Completion::Applied => match session.preview() {
                PreviewState::Failed { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::OK,
            },
        };
        (status, session.preview().clone())
    });

    let (status, preview) = task
        .await
        .map_err(|e| ApiError::Internal(format!("generation task failed: {e}")))?;
    Ok((status, Json(preview)))
}
