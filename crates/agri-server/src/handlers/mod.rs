//! HTTP route handlers for the yield predictor.

pub mod predict;

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{HealthResponse, RootResponse};
use crate::error::AppError;
use crate::{ServerState, DOCS_PATH, REDOC_PATH};

/// Points callers at the interactive documentation.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "Service information", body = RootResponse))
)]
pub async fn root(State(state): State<Arc<ServerState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", state.info.title),
        docs: DOCS_PATH.into(),
        redoc: REDOC_PATH.into(),
    })
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "meta",
    responses((status = 200, description = "Service is running", body = HealthResponse))
)]
pub async fn health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        message: format!("{} is running", state.info.title),
    })
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
