use std::time::Duration;

use reqwest::{StatusCode, header};
use serde::Serialize;
use thiserror::Error;

use crate::Submission;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("form endpoint rejected submission with status {status}")]
    Rejected { status: StatusCode },

    #[error("failed to reach form endpoint: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the third-party form-processing endpoint.
///
/// One `POST` per call, no retry. The subject label travels with the client
/// rather than the submission so a tampered hidden field cannot change it.
#[derive(Clone)]
pub struct FormRelay {
    http: reqwest::Client,
    endpoint: String,
    subject: String,
}

impl FormRelay {
    pub fn new(
        endpoint: impl Into<String>,
        subject: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            subject: subject.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward one submission to the endpoint.
    ///
    /// Any 2xx counts as delivered. A non-success status and a transport
    /// fault are distinct errors, though callers are expected to surface
    /// them identically.
    pub async fn submit(&self, submission: &Submission) -> Result<(), RelayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .form(&Payload::new(submission, &self.subject))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected { status });
        }

        tracing::debug!(endpoint = %self.endpoint, "submission relayed");
        Ok(())
    }
}

/// Wire form of a submission. Field names follow the form-processing
/// convention: visible fields by name, honeypot as `_gotcha`, subject as
/// `_subject`.
#[derive(Serialize)]
struct Payload<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    need: &'a str,
    details: &'a str,
    #[serde(rename = "_gotcha")]
    gotcha: &'a str,
    #[serde(rename = "_subject")]
    subject: &'a str,
}

impl<'a> Payload<'a> {
    fn new(submission: &'a Submission, subject: &'a str) -> Self {
        Self {
            name: &submission.name,
            email: &submission.email,
            company: &submission.company,
            need: &submission.need,
            details: &submission.details,
            gotcha: &submission.gotcha,
            subject,
        }
    }
}
