pub mod middlewares;
pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use utoipa::OpenApi;

use timestamp_entities::{Timestamp, TimestampError};

use crate::config::Config;
use crate::errors::internal_error;
use crate::server::middlewares::TimingLayer;
use crate::server::routes::app_router;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::get_timestamp::get_timestamp),
    components(schemas(Timestamp, TimestampError)),
    tags(
        (name = "timestamp-node", description = "Timestamp Microservice API")
    )
)]
struct ApiDoc;

/// Builds the application router with every layer applied, ready to serve.
pub fn app() -> Router {
    app_router::<ApiDoc>()
        .with_timing()
        // Logging so we can see whats going on
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        // Permissive CORS layer to allow all origins
        .layer(CorsLayer::permissive())
}

#[tracing::instrument(skip(config))]
pub async fn run_api_server(config: &Config) {
    let app = app();

    let host = config.server_host();
    let port = config.server_port();
    let address = format!("{host}:{port}");
    let socket_addr: SocketAddr = address.parse().expect("Invalid API server address.");
    let listener = tokio::net::TcpListener::bind(socket_addr)
        .await
        .expect("could not bind the API server address");

    tracing::info!("🚀 API started at http://{}", socket_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(internal_error)
        .unwrap();
}
