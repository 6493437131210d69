//! Core domain types and the mock yield model.
//!
//! This crate provides the types shared by the agri yield predictor:
//!
//! - [`PredictionInput`] — Field conditions submitted for a prediction
//! - [`PredictionOutput`] and [`PredictionStatus`] — Prediction result
//! - [`LinearYieldModel`] — Placeholder linear model over the numeric inputs
//! - [`PredictionError`] — Error type for model evaluation
//!
//! # Example
//!
//! ```rust
//! use agri_core::{LinearYieldModel, PredictionInput};
//!
//! let input = PredictionInput {
//!     temperature: 25.0,
//!     humidity: 60.0,
//!     rainfall: 100.0,
//!     soil_type: "loam".into(),
//!     crop_type: "wheat".into(),
//!     weather_condition: "sunny".into(),
//! };
//!
//! let output = LinearYieldModel::default().predict(&input).unwrap();
//! assert_eq!(output.predicted_yield, 1750.0);
//! assert_eq!(output.confidence, 0.85);
//! ```

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Errors that can occur while evaluating the yield model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The model produced a value that cannot be represented in JSON.
    #[error("Out of range float values are not JSON compliant: {0}")]
    NonFinite(f64),
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Field conditions submitted for a yield prediction.
///
/// The categorical fields are carried through but do not influence the
/// current model.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PredictionInput {
    /// Air temperature.
    pub temperature: f64,
    /// Relative humidity.
    pub humidity: f64,
    /// Rainfall.
    pub rainfall: f64,
    pub soil_type: String,
    pub crop_type: String,
    pub weather_condition: String,
}

/// Outcome marker attached to every prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Success,
}

/// Result of a yield prediction.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PredictionOutput {
    /// Predicted yield, rounded to two decimals.
    pub predicted_yield: f64,
    /// Fixed placeholder confidence, rounded to two decimals.
    pub confidence: f64,
    pub status: PredictionStatus,
}

// ============================================================================
// Model
// ============================================================================

/// Placeholder model: a fixed linear combination of the numeric inputs.
///
/// ```text
/// yield = base + temperature * temperature_weight
///              + rainfall * rainfall_weight
///              + humidity * humidity_weight
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearYieldModel {
    pub base: f64,
    pub temperature_weight: f64,
    pub rainfall_weight: f64,
    pub humidity_weight: f64,
    /// Confidence reported with every prediction.
    pub confidence: f64,
}

impl Default for LinearYieldModel {
    fn default() -> Self {
        Self {
            base: 1000.0,
            temperature_weight: 10.0,
            rainfall_weight: 2.0,
            humidity_weight: 5.0,
            confidence: 0.85,
        }
    }
}

impl LinearYieldModel {
    /// Evaluates the linear formula without rounding.
    pub fn raw_yield(&self, input: &PredictionInput) -> f64 {
        let temp_factor = input.temperature * self.temperature_weight;
        let rain_factor = input.rainfall * self.rainfall_weight;
        let humidity_factor = input.humidity * self.humidity_weight;

        self.base + temp_factor + rain_factor + humidity_factor
    }

    /// Predicts the yield for `input`.
    ///
    /// Fails only when the result overflows to a non-finite value.
    pub fn predict(&self, input: &PredictionInput) -> Result<PredictionOutput, PredictionError> {
        let predicted = self.raw_yield(input);
        if !predicted.is_finite() {
            return Err(PredictionError::NonFinite(predicted));
        }

        Ok(PredictionOutput {
            predicted_yield: round_decimals(predicted, 2),
            confidence: round_decimals(self.confidence, 2),
            status: PredictionStatus::Success,
        })
    }
}

/// Rounds `value` to `decimals` places using its exact binary value,
/// so `2.675` (stored as `2.67499999...`) rounds down to `2.67`.
pub fn round_decimals(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(temperature: f64, humidity: f64, rainfall: f64) -> PredictionInput {
        PredictionInput {
            temperature,
            humidity,
            rainfall,
            soil_type: "loam".into(),
            crop_type: "wheat".into(),
            weather_condition: "sunny".into(),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let output = LinearYieldModel::default().predict(&input(25.0, 60.0, 100.0)).unwrap();
        assert_eq!(output.predicted_yield, 1750.0);
        assert_eq!(output.confidence, 0.85);
        assert_eq!(output.status, PredictionStatus::Success);
    }

    #[test]
    fn test_zero_inputs_yield_base() {
        let output = LinearYieldModel::default().predict(&input(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(output.predicted_yield, 1000.0);
    }

    #[test]
    fn test_negative_inputs() {
        let output = LinearYieldModel::default().predict(&input(-10.0, -20.0, -50.0)).unwrap();
        // 1000 - 100 - 100 - 100
        assert_eq!(output.predicted_yield, 700.0);
    }

    #[test]
    fn test_result_rounded_to_two_decimals() {
        // 1000 + 12.3456 + 0 + 0
        let output = LinearYieldModel::default().predict(&input(1.23456, 0.0, 0.0)).unwrap();
        assert_eq!(output.predicted_yield, 1012.35);
    }

    #[test]
    fn test_categorical_fields_do_not_affect_yield() {
        let model = LinearYieldModel::default();
        let a = input(18.5, 40.0, 75.0);
        let b = PredictionInput {
            soil_type: "clay".into(),
            crop_type: "rice".into(),
            weather_condition: "stormy".into(),
            ..a.clone()
        };
        assert_eq!(model.predict(&a).unwrap(), model.predict(&b).unwrap());
    }

    #[test]
    fn test_confidence_is_constant() {
        let model = LinearYieldModel::default();
        for (t, h, r) in [(0.0, 0.0, 0.0), (45.0, 99.0, 3000.0), (-30.0, 5.5, 0.1)] {
            assert_eq!(model.predict(&input(t, h, r)).unwrap().confidence, 0.85);
        }
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = LinearYieldModel::default().predict(&input(1e308, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, PredictionError::NonFinite(f64::INFINITY));
        assert!(err.to_string().contains("not JSON compliant"));
    }

    #[test]
    fn test_round_decimals_uses_binary_value() {
        assert_eq!(round_decimals(2.675, 2), 2.67);
        assert_eq!(round_decimals(1.005, 2), 1.0);
        assert_eq!(round_decimals(0.846, 2), 0.85);
        assert_eq!(round_decimals(-3.14159, 2), -3.14);
        assert!(round_decimals(f64::NAN, 2).is_nan());
    }

    #[test]
    fn test_output_serialization() {
        let output = LinearYieldModel::default().predict(&input(25.0, 60.0, 100.0)).unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "predicted_yield": 1750.0,
                "confidence": 0.85,
                "status": "success"
            })
        );
    }
}
