use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate<'a> {
    status_code: u16,
    error_title: &'a str,
    error_message: &'a str,
}

/// Render the shared error page, degrading to plain text if the template
/// itself fails.
pub(crate) fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    let template = ErrorPageTemplate {
        status_code: status.as_u16(),
        error_title: title,
        error_message: message,
    };

    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {:?}", e);
            (status, format!("{title}: {message}")).into_response()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => {
                error_page(StatusCode::UNPROCESSABLE_ENTITY, "Invalid submission", &msg)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_page(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}
