use axum::{
    body::Body,
    http::{Request, Response, header},
    middleware::Next,
};

/// Middleware to set cache control headers
/// - Embedded assets and the CV: long-lived immutable caching
/// - Everything else (HTML, health): no caching
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    let is_static_asset = path.starts_with("/static/") || path == "/cv" || path == "/favicon.svg";

    let headers = response.headers_mut();

    if is_static_asset {
        headers.insert(
            header::CACHE_CONTROL,
            "public, max-age=31536000, immutable".parse().unwrap(),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate".parse().unwrap(),
        );
    }

    response
}
