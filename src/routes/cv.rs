use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::routes::AppState;

/// GET /cv - CV document download
///
/// Serves the embedded document with an attachment disposition so browsers
/// offer the configured filename instead of navigating.
pub async fn download(State(state): State<AppState>) -> Response {
    let filename = &state.config.site.cv_filename;

    let Some(content) = super::assets::embedded(&format!("/{filename}")) else {
        tracing::error!(filename = %filename, "configured CV document is not embedded");
        return crate::error::error_page(
            StatusCode::NOT_FOUND,
            "Not Found",
            "The CV document is not available.",
        );
    };

    let mime = mime_guess::from_path(filename.as_str()).first_or_octet_stream();

    (
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Body::from(content.data),
    )
        .into_response()
}
