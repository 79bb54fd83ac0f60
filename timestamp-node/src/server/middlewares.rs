use axum::{
    body::Body,
    http::{header, HeaderValue, Request, Response},
    middleware::Next,
};
use std::time::Instant;

/// Stamps the charset-qualified content type on the JSON route; axum's
/// `Json` alone emits `application/json` without a charset parameter.
pub async fn json_content_type(req: Request<Body>, next: Next) -> Response<Body> {
    let mut response = next.run(req).await;

    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=UTF-8"),
    );

    response
}

pub async fn track_timing(req: Request<Body>, next: Next) -> Response<Body> {
    let start = Instant::now();
    let route = req.uri().path().to_owned();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    tracing::info!("🌐 {} - {:?}", route, elapsed);

    response
}

pub trait TimingLayer {
    fn with_timing(self) -> Self;
}

impl TimingLayer for axum::Router {
    fn with_timing(self) -> Self {
        self.layer(axum::middleware::from_fn(track_timing))
    }
}
