//! Router configuration for the API.
//!
//! All resource routes live under `/v1`. Route groups are split by access
//! level: public, authenticated, and admin-only.

use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::handlers::auth::API_KEY_HEADER;
use crate::api::middleware::{
    REQUEST_ID_HEADER, auth_middleware, global_error_handler, logging_middleware,
    request_id_middleware, require_admin,
};
use crate::config::{CorsConfig, ServerConfig, Settings};
use crate::state::AppState;

pub const API_PREFIX: &str = "/v1";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// Builds the CORS layer from configuration. Origins that are not valid
/// header values are skipped with a warning.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(API_KEY_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_credentials(config.allow_credentials)
}

/// Answers 408 once a request runs longer than `server.request_timeout`.
fn timeout_layer(config: &ServerConfig) -> TimeoutLayer {
    TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.request_timeout),
    )
}

fn api_routes(state: &AppState) -> OpenApiRouter<AppState> {
    let public = OpenApiRouter::new()
        .merge(handlers::auth::public_routes())
        .merge(handlers::donations::public_routes())
        .merge(handlers::health::health_routes());

    let admin = OpenApiRouter::new()
        .merge(handlers::users::admin_routes())
        .merge(handlers::membership::admin_routes())
        .route_layer(middleware::from_fn(require_admin));

    let authenticated = OpenApiRouter::new()
        .merge(handlers::auth::protected_routes())
        .merge(handlers::users::protected_routes())
        .merge(handlers::membership::protected_routes())
        .merge(handlers::donations::protected_routes())
        .merge(handlers::payments::protected_routes())
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public.merge(authenticated)
}

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Layers run outermost first: request id, logging, error envelope,
/// CORS, compression, request timeout.
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(API_PREFIX, api_routes(&state))
        .split_for_parts();

    router
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, openapi))
        .layer(timeout_layer(&settings.server))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&settings.cors))
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
