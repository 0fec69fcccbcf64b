//! Contact submission flow: the submission record, its four-valued status,
//! and the relay client that forwards submissions to the form-processing
//! endpoint.

mod relay;
mod types;

pub use relay::{FormRelay, RelayError};
pub use types::{Submission, SubmissionStatus};
