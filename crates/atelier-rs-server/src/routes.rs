//! Request handlers.

use crate::error::ApiError;
use crate::state::AppState;
use atelier_rs_core::{OutfitRequest, OutfitResult, offline_outfit};
use axum::Json;
use axum::extract::State;
use log::error;
use serde_json::{Value, json};
use std::sync::Arc;

/// Liveness/welcome payload.
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Atelier stylist API" }))
}

/// Generate an outfit through the memory-augmented completion flow.
pub async fn generate_outfit(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OutfitRequest>,
) -> Result<Json<OutfitResult>, ApiError> {
    let result = state.stylist.recommend(request).await?;
    Ok(Json(result))
}

/// Generate an outfit from the word lists, no provider required.
pub async fn generate_outfit_offline(
    Json(request): Json<OutfitRequest>,
) -> Result<Json<OutfitResult>, ApiError> {
    let request = request.validated()?;
    let mut rng = rand::rng();
    let outfit = offline_outfit(&request, &mut rng);
    Ok(Json(OutfitResult { outfit }))
}

/// Proxy a caller-supplied search body to the memory service and pass the
/// raw response through.
pub async fn search_memories(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    match state.memory.search_raw(body).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!("memory search proxy failed (error={err})");
            Err(ApiError::bad_gateway("memory search failed"))
        }
    }
}
