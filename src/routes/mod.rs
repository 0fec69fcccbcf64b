use axum::{
    Router,
    http::StatusCode,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub(crate) mod assets;
mod contact;
mod cv;
mod health;
mod index;

pub use assets::AssetsService;
pub use contact::ContactFormState;

use crate::middleware::{cache_control_middleware, minify_html_middleware};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: portfolio_contact::FormRelay,
}

async fn fallback() -> impl IntoResponse {
    crate::error::error_page(
        StatusCode::NOT_FOUND,
        "Not Found",
        "The page you are looking for does not exist.",
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .route("/cv", get(cv::download))
        .route("/health", get(health::health))
        .fallback(fallback)
        .nest_service("/static", AssetsService::new())
        .with_state(app_state)
        .layer(axum_middleware::map_response(minify_html_middleware))
        .layer(axum_middleware::from_fn(cache_control_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
