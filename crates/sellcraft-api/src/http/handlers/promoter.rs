//! Promotional-post handlers for the REST API.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use sellcraft_core::service::promoter::tweet_intent_url;

use crate::http::error::AppError;
use crate::http::handlers::InFlightGuard;
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GeneratePostsRequest {
    /// Published listing body the posts promote.
    #[serde(default)]
    pub service_body: String,
    /// Public URL of the listing, appended to every post.
    #[serde(default)]
    pub service_url: String,
}

/// One ready-to-publish post with its composer deep link.
#[derive(Debug, Serialize)]
pub struct PromoPost {
    pub text: String,
    pub tweet_url: String,
}

/// POST /api/v1/promoter/posts - Run a 20-post promotion round.
pub async fn generate_posts(
    State(state): State<AppState>,
    Json(body): Json<GeneratePostsRequest>,
) -> Result<Json<ApiResponse<Vec<PromoPost>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();
    let _guard = InFlightGuard::acquire(&state, "promoter")?;

    let posts = state
        .promoter
        .generate_posts(&body.service_body, &body.service_url)
        .await?;
    let elapsed = start.elapsed().as_millis() as u64;

    let posts = posts
        .into_iter()
        .map(|text| {
            let tweet_url = tweet_intent_url(&text);
            PromoPost { text, tweet_url }
        })
        .collect();

    Ok(Json(ApiResponse::success(posts, request_id, elapsed)))
}
