//! OpenAPI document for the HTTP API.

use agri_core::{PredictionInput, PredictionOutput, PredictionStatus};
use utoipa::OpenApi;

use crate::dto::{
    ErrorResponse, HealthResponse, RootResponse, ValidationErrorResponse, ValidationIssue,
};
use crate::ServiceInfo;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::predict::predict,
    ),
    components(schemas(
        PredictionInput,
        PredictionOutput,
        PredictionStatus,
        RootResponse,
        HealthResponse,
        ValidationIssue,
        ValidationErrorResponse,
        ErrorResponse,
    )),
    tags(
        (name = "prediction", description = "Crop yield prediction"),
        (name = "meta", description = "Service information and health"),
    )
)]
struct ApiDoc;

/// Builds the OpenAPI document, stamped with the service's name and version.
pub fn api_doc(info: &ServiceInfo) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = info.title.to_string();
    doc.info.version = info.version.to_string();
    doc.info.description = Some(info.description.to_string());
    doc
}
