//! HTTP handlers and wire types.

use axum::{extract::State, http::StatusCode, Form, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::engine::SentimentEngine;

/// Shared application state. `engine` is `None` when the model or tokenizer
/// failed to load at startup; every prediction then returns the fixed error
/// payload.
pub struct AppState {
    pub engine: Option<SentimentEngine>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PredictForm {
    /// The text to analyze.
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PredictResponse {
    /// "Positive", "Neutral" or "Negative".
    pub sentiment: String,
    /// Raw positive-sentiment score, two decimals.
    pub confidence: String,
}

/// Fixed-shape error payload: sentinel label "Error", zero confidence and a
/// diagnostic message.
#[derive(Debug, Serialize, ToSchema)]
pub struct PredictError {
    pub sentiment: String,
    pub confidence: String,
    pub message: String,
}

impl PredictError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            sentiment: "Error".to_string(),
            confidence: "0.00".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

/// Predict the sentiment of a message.
#[utoipa::path(
    post,
    path = "/predict",
    tag = "sentiment",
    request_body(content = PredictForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Sentiment prediction", body = PredictResponse),
        (status = 400, description = "Missing message field", body = PredictError),
        (status = 502, description = "Model server failure", body = PredictError),
        (status = 503, description = "Model or tokenizer not loaded", body = PredictError)
    )
)]
pub async fn predict(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PredictForm>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<PredictError>)> {
    let Some(message) = form.message else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(PredictError::new("Missing form field 'message'.")),
        ));
    };

    let Some(engine) = state.engine.as_ref() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(PredictError::new(
                "Model not loaded. Check server logs for details.",
            )),
        ));
    };

    let classification = engine.predict(&message).await.map_err(|e| {
        tracing::error!("prediction failed: {e:#}");
        (
            StatusCode::BAD_GATEWAY,
            Json(PredictError::new(format!("Prediction failed: {e}"))),
        )
    })?;

    Ok(Json(PredictResponse {
        sentiment: classification.sentiment.as_str().to_string(),
        confidence: classification.confidence(),
    }))
}

/// Service health, including whether the model artifacts loaded.
#[utoipa::path(
    get,
    path = "/health",
    tag = "sentiment",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: state.engine.is_some(),
    })
}
