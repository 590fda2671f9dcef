//! The single editing session behind the form.
//!
//! Submissions are tagged with an increasing id. A completion is applied to
//! the preview only if no newer submission started in the meantime, so an
//! earlier request finishing late cannot replace a newer result.

use tracing::{debug, info};

use crate::form::ProfileForm;
use crate::models::preview::PreviewState;
use crate::models::profile::ProfileRequest;
use crate::models::result::GenerationResult;

#[derive(Debug, Default)]
pub struct Session {
    pub form: ProfileForm,
    preview: PreviewState,
    latest_submission: u64,
}

/// A started generation: the request as it was at submit time.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: u64,
    pub request: ProfileRequest,
    pub started_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer submission started; the outcome was dropped.
    Superseded,
}

impl Session {
    pub fn new(form: ProfileForm) -> Self {
        Self {
            form,
            preview: PreviewState::Idle,
            latest_submission: 0,
        }
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn latest_submission(&self) -> u64 {
        self.latest_submission
    }

    /// Snapshot the request and switch the preview to loading.
    pub fn begin_submission(&mut self) -> Submission {
        self.latest_submission += 1;
        self.preview = PreviewState::Loading;
        let submission = Submission {
            id: self.latest_submission,
            request: self.form.snapshot(),
            started_at: jiff::Timestamp::now(),
        };
        info!(
            submission_id = submission.id,
            slides = submission.request.slides.len(),
            "submission started"
        );
        submission
    }

    /// Record the outcome of submission `id`; `Err` carries the user-facing message.
    pub fn complete_submission(
        &mut self,
        id: u64,
        outcome: Result<GenerationResult, String>,
    ) -> Completion {
        if id != self.latest_submission {
            debug!(
                submission_id = id,
                latest = self.latest_submission,
                "discarding superseded submission"
            );
            return Completion::Superseded;
        }

        self.preview = match outcome {
            Ok(result) => PreviewState::Ready {
                result: Box::new(result),
                generated_at: jiff::Timestamp::now(),
            },
            Err(message) => PreviewState::Failed { message },
        };
        let failed = matches!(self.preview, PreviewState::Failed { .. });
        info!(submission_id = id, failed, "submission completed");
        Completion::Applied
    }
}
