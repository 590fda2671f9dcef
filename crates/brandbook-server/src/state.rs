use std::sync::Arc;

use brandbook_core::session::Session;
use brandbook_gemini::client::GeminiClient;
use tokio::sync::Mutex;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The session is the one form/result state the handlers mutate; the lock
/// is never held across the provider call.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(gemini: GeminiClient) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            gemini,
        }
    }
}
