use serde::{Deserialize, Serialize};

use super::result::GenerationResult;

/// What the result area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PreviewState {
    #[default]
    Idle,
    Loading,
    Failed {
        message: String,
    },
    Ready {
        result: Box<GenerationResult>,
        generated_at: jiff::Timestamp,
    },
}

impl PreviewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PreviewState::Loading)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            PreviewState::Ready { result, .. } => Some(result),
            _ => None,
        }
    }
}
