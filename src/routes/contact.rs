use axum::{
    extract::{Form, State},
    response::Html,
};
use portfolio_contact::{Submission, SubmissionStatus};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::routes::AppState;
use crate::routes::index::render_page;

/// Contact form section state rendered into the page: the submission status
/// plus whatever field values should reappear in the inputs.
#[derive(Default)]
pub struct ContactFormState {
    pub status: SubmissionStatus,
    pub name: String,
    pub email: String,
    pub company: String,
    pub need: String,
    pub details: String,
}

impl ContactFormState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Delivered: every visible field resets to empty.
    pub fn succeeded() -> Self {
        Self {
            status: SubmissionStatus::Succeeded,
            ..Default::default()
        }
    }

    /// Not delivered: keep the entered values so the visitor can retry
    /// without re-typing.
    pub fn failed(submission: Submission) -> Self {
        Self {
            status: SubmissionStatus::Failed,
            name: submission.name,
            email: submission.email,
            company: submission.company,
            need: submission.need,
            details: submission.details,
        }
    }
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub need: String,
    #[serde(default)]
    pub details: String,
    #[serde(rename = "_gotcha", default)]
    pub gotcha: String,
}

/// POST /contact - Relay one submission to the form-processing endpoint.
///
/// Validation failures answer 422 without dispatching anything. Relay
/// failures are an expected page state, not a server error: the page
/// re-renders with the Failed banner and the entered values intact.
pub async fn action(
    State(state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Result<Html<String>, AppError> {
    let submission = Submission {
        name: input.name,
        email: input.email,
        company: input.company,
        need: input.need,
        details: input.details,
        gotcha: input.gotcha,
    };

    submission.validate()?;

    match state.relay.submit(&submission).await {
        Ok(()) => {
            tracing::info!(email = %submission.email, "contact submission relayed");
            render_page(&state, ContactFormState::succeeded())
        }
        Err(err) => {
            tracing::error!(error = %err, "contact submission failed");
            render_page(&state, ContactFormState::failed(submission))
        }
    }
}
