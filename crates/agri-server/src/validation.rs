//! Request body validation for prediction requests.
//!
//! The body is decoded into a JSON value first and each field is checked on
//! its own, so a single 422 response can list every offending field.

use agri_core::PredictionInput;
use serde_json::{Map, Value};

use crate::dto::ValidationIssue;

/// Parses and validates a raw prediction request body.
pub fn parse_prediction_input(body: &[u8]) -> Result<PredictionInput, Vec<ValidationIssue>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(vec![ValidationIssue::new("missing", &["body"], "Field required")]);
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        vec![ValidationIssue::new(
            "json_invalid",
            &["body"],
            format!("JSON decode error: {}", e),
        )]
    })?;

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(vec![ValidationIssue::new(
                "model_type",
                &["body"],
                "Input should be a valid dictionary or object to extract fields from",
            )
            .with_input(other)])
        }
    };

    let mut issues = Vec::new();
    let temperature = float_field(&fields, "temperature", &mut issues);
    let humidity = float_field(&fields, "humidity", &mut issues);
    let rainfall = float_field(&fields, "rainfall", &mut issues);
    let soil_type = string_field(&fields, "soil_type", &mut issues);
    let crop_type = string_field(&fields, "crop_type", &mut issues);
    let weather_condition = string_field(&fields, "weather_condition", &mut issues);

    match (temperature, humidity, rainfall, soil_type, crop_type, weather_condition) {
        (
            Some(temperature),
            Some(humidity),
            Some(rainfall),
            Some(soil_type),
            Some(crop_type),
            Some(weather_condition),
        ) => Ok(PredictionInput {
            temperature,
            humidity,
            rainfall,
            soil_type,
            crop_type,
            weather_condition,
        }),
        _ => Err(issues),
    }
}

/// Accepts JSON numbers, booleans, and strings holding a finite number.
fn float_field(fields: &Map<String, Value>, name: &str, issues: &mut Vec<ValidationIssue>) -> Option<f64> {
    let loc = ["body", name];
    match fields.get(name) {
        None => {
            issues.push(ValidationIssue::new("missing", &loc, "Field required"));
            None
        }
        // Over-range literals such as 1e400 are already rejected by the decoder.
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(Value::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                issues.push(
                    ValidationIssue::new(
                        "float_parsing",
                        &loc,
                        "Input should be a valid number, unable to parse string as a number",
                    )
                    .with_input(Value::String(s.clone())),
                );
                None
            }
        },
        Some(other) => {
            issues.push(
                ValidationIssue::new("float_type", &loc, "Input should be a valid number")
                    .with_input(other.clone()),
            );
            None
        }
    }
}

fn string_field(fields: &Map<String, Value>, name: &str, issues: &mut Vec<ValidationIssue>) -> Option<String> {
    let loc = ["body", name];
    match fields.get(name) {
        None => {
            issues.push(ValidationIssue::new("missing", &loc, "Field required"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(
                ValidationIssue::new("string_type", &loc, "Input should be a valid string")
                    .with_input(other.clone()),
            );
            None
        }
    }
}
