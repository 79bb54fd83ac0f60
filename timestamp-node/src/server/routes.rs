use axum::http::StatusCode;
use axum::middleware;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi as OpenApiT;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::get_timestamp;
use crate::server::middlewares::json_content_type;

pub fn app_router<T: OpenApiT>() -> Router {
    let open_api = T::openapi();
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", open_api))
        .route("/", get(index))
        .route(
            "/{date}",
            get(get_timestamp).layer(middleware::from_fn(json_content_type)),
        )
        .fallback(handler_404)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
