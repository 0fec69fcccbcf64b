use strum::{AsRefStr, Display};
use validator::Validate;

/// One contact form submission as entered by the visitor.
///
/// The honeypot value is carried through verbatim; whether it disqualifies
/// the submission is the processing service's call, not ours.
#[derive(Validate, Default, Clone, Debug, PartialEq)]
pub struct Submission {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email address does not look valid"))]
    pub email: String,
    pub company: String,
    #[validate(length(min = 1, max = 200, message = "tell me what you need"))]
    pub need: String,
    #[validate(length(max = 2000, message = "details are too long"))]
    pub details: String,
    pub gotcha: String,
}

/// Lifecycle of a submission within one page view. Fresh as Idle on every
/// render; only the relay outcome moves it.
#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SubmissionStatus::Failed)
    }
}
