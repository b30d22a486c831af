use axum::{Extension, Json, Router, http::HeaderName, routing::get};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::modules::products::use_cases::create_product::inbound::http as create_http;
use crate::modules::products::use_cases::delete_product::inbound::http as delete_http;
use crate::modules::products::use_cases::get_product::inbound::http as get_http;
use crate::modules::products::use_cases::list_products::inbound::http as list_http;
use crate::modules::products::use_cases::patch_product::inbound::http as patch_http;
use crate::modules::products::use_cases::replace_product::inbound::http as replace_http;
use crate::shell::config::AppConfig;
use crate::shell::errors::REQUEST_ID_HEADER;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/products",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/v1/products/{id}",
            get(get_http::handle)
                .put(replace_http::handle)
                .patch(patch_http::handle)
                .delete(delete_http::handle),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// The full service: REST routes, GraphQL, request ids, tracing and CORS.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([request_id.clone()]);

    router(state.clone())
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(graphql::schema(state)))
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
