//! Creator wizard handlers for the REST API.

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use sellcraft_types::idea::IdeaId;
use sellcraft_types::wizard::CreatorState;

use crate::http::error::AppError;
use crate::http::handlers::InFlightGuard;
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateIdeasRequest {
    /// Seller self-description; may be empty.
    #[serde(default)]
    pub raw_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ThumbnailRequest {
    #[serde(default)]
    pub high_quality: bool,
}

#[derive(Debug, Deserialize)]
pub struct ThumbnailPromptQuery {
    #[serde(default)]
    pub high_quality: bool,
}

fn parse_idea_id(raw: &str) -> Result<IdeaId, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("invalid idea id: '{raw}'")))
}

/// GET /api/v1/creator/state - Current committed wizard state.
pub async fn get_state(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CreatorState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let wizard = state.creator.state().await;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(wizard, request_id, elapsed)))
}

/// POST /api/v1/creator/ideas - Run an idea round from seller input.
pub async fn generate_ideas(
    State(state): State<AppState>,
    Json(body): Json<GenerateIdeasRequest>,
) -> Result<Json<ApiResponse<CreatorState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();
    let _guard = InFlightGuard::acquire(&state, "creator")?;

    let wizard = state.creator.generate_ideas(body.raw_text).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(wizard, request_id, elapsed)))
}

/// POST /api/v1/creator/ideas/:id/select - Open an idea's detail view,
/// generating the listing if it has none yet.
pub async fn select_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CreatorState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();
    let _guard = InFlightGuard::acquire(&state, "creator")?;

    let id = parse_idea_id(&id)?;
    let wizard = state.creator.select_idea(id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(wizard, request_id, elapsed)))
}

/// POST /api/v1/creator/ideas/:id/thumbnail - Generate a thumbnail and
/// return it as a data URL.
pub async fn generate_thumbnail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ThumbnailRequest>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();
    let _guard = InFlightGuard::acquire(&state, "creator")?;

    let id = parse_idea_id(&id)?;
    let data_url = state
        .creator
        .generate_thumbnail(id, body.high_quality)
        .await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let data = serde_json::json!({
        "idea_id": id.to_string(),
        "thumbnail": data_url,
        "high_quality": body.high_quality,
    });
    Ok(Json(ApiResponse::success(data, request_id, elapsed)))
}

/// GET /api/v1/creator/ideas/:id/thumbnail-prompt - The exact prompt a
/// thumbnail round would send, without generating an image.
pub async fn thumbnail_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ThumbnailPromptQuery>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let id = parse_idea_id(&id)?;
    let prompt = state.creator.thumbnail_prompt(id, query.high_quality).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let data = serde_json::json!({
        "idea_id": id.to_string(),
        "prompt": prompt,
        "high_quality": query.high_quality,
    });
    Ok(Json(ApiResponse::success(data, request_id, elapsed)))
}

/// DELETE /api/v1/creator/ideas/:id - Remove one idea from the list.
pub async fn delete_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CreatorState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let id = parse_idea_id(&id)?;
    let wizard = state.creator.delete_idea(id).await?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(wizard, request_id, elapsed)))
}

/// POST /api/v1/creator/reset - Discard all wizard state and snapshots.
pub async fn reset(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CreatorState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let wizard = state.creator.reset().await;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(wizard, request_id, elapsed)))
}
