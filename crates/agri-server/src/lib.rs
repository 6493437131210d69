//! HTTP server for the agri yield predictor.
//!
//! Exposes the router so the binary and the integration tests build the
//! exact same application.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod validation;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use agri_core::LinearYieldModel;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::error::AppError;

pub const DOCS_PATH: &str = "/docs";
pub const REDOC_PATH: &str = "/redoc";
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Name, description and version reported by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            title: "Agri Yield Predictor API",
            description: "API for agricultural yield prediction",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Shared server state accessible from all handlers. Immutable after startup.
pub struct ServerState {
    pub model: LinearYieldModel,
    pub info: ServiceInfo,
    pub openapi: utoipa::openapi::OpenApi,
}

impl ServerState {
    pub fn new(model: LinearYieldModel, info: ServiceInfo) -> Self {
        let openapi = openapi::api_doc(&info);
        Self { model, info, openapi }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(LinearYieldModel::default(), ServiceInfo::default())
    }
}

/// Builds the full application: API routes, docs, and middleware.
pub fn app(state: Arc<ServerState>) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        .route("/api/predict", post(handlers::predict::predict))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, state.openapi.clone()))
        .merge(Redoc::with_url(REDOC_PATH, state.openapi.clone()))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state);

    with_middleware(routes)
}

/// Wraps a router with panic recovery, request tracing and CORS.
pub fn with_middleware(router: Router) -> Router {
    // Credentials rule out wildcards, so origin, method and headers are
    // mirrored back from the request instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .layer(cors)
}

/// Converts a handler panic into a 500 carrying the panic message.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    AppError::Internal(detail).into_response()
}
