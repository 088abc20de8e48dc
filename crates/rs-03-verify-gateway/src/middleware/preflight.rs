//! Preflight status normalisation.
//!
//! tower-http answers CORS preflights with `200 OK`. Browsers accept either,
//! but the endpoint's contract is `204 No Content`.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

/// Rewrite successful `OPTIONS` responses to an empty `204`.
pub async fn preflight_no_content(req: Request, next: Next) -> Response {
    let is_options = req.method() == Method::OPTIONS;
    let response = next.run(req).await;

    if !is_options || !response.status().is_success() {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.status = StatusCode::NO_CONTENT;
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);
    parts.headers.remove(axum::http::header::CONTENT_TYPE);
    Response::from_parts(parts, Body::empty())
}
