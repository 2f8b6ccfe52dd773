//! Survey-design handlers for the REST API.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use sellcraft_types::survey::SurveyPattern;

use crate::http::error::AppError;
use crate::http::handlers::InFlightGuard;
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GeneratePatternsRequest {
    /// Listing body the survey is designed around.
    #[serde(default)]
    pub service_body: String,
    /// Optional service price; shown in price-sensitivity questions.
    #[serde(default)]
    pub price_hint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompileScriptRequest {
    pub pattern: SurveyPattern,
}

/// POST /api/v1/surveyor/patterns - Run a survey round: three patterns.
pub async fn generate_patterns(
    State(state): State<AppState>,
    Json(body): Json<GeneratePatternsRequest>,
) -> Result<Json<ApiResponse<Vec<SurveyPattern>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();
    let _guard = InFlightGuard::acquire(&state, "surveyor")?;

    let patterns = state
        .surveyor
        .generate_patterns(&body.service_body, body.price_hint.as_deref())
        .await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(patterns, request_id, elapsed)))
}

/// POST /api/v1/surveyor/script - Compile one pattern to Apps Script.
pub async fn compile_script(
    State(state): State<AppState>,
    Json(body): Json<CompileScriptRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let script = state.surveyor.compile_script(&body.pattern);
    let elapsed = start.elapsed().as_millis() as u64;

    let data = serde_json::json!({
        "pattern_id": body.pattern.id,
        "script": script,
    });
    Ok(Json(ApiResponse::success(data, request_id, elapsed)))
}
