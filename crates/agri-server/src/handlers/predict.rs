//! Yield prediction handler.

use std::sync::Arc;

use agri_core::{PredictionInput, PredictionOutput};
use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use crate::dto::{ErrorResponse, ValidationErrorResponse};
use crate::error::AppError;
use crate::validation::parse_prediction_input;
use crate::ServerState;

/// Predicts crop yield from field conditions.
///
/// The body is validated by hand rather than through `Json<T>` so every
/// rejection is a 422 listing each offending field.
#[utoipa::path(
    post,
    path = "/api/predict",
    tag = "prediction",
    request_body = PredictionInput,
    responses(
        (status = 200, description = "Prediction computed", body = PredictionOutput),
        (status = 422, description = "Invalid request body", body = ValidationErrorResponse),
        (status = 500, description = "Prediction failed", body = ErrorResponse),
    )
)]
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<PredictionOutput>, AppError> {
    let input = parse_prediction_input(&body).map_err(AppError::Validation)?;
    let output = state.model.predict(&input)?;

    info!(
        crop = %input.crop_type,
        soil = %input.soil_type,
        weather = %input.weather_condition,
        predicted_yield = output.predicted_yield,
        "Prediction complete"
    );
    Ok(Json(output))
}
