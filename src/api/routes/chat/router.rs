//! Router for the chat API

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::chat::{TurnPolicy, next_turn};

type SharedState = Arc<AppState>;

/// Add the user's message to their conversation and reply with the
/// model's response
async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::ChatRequest>,
) -> Result<Json<public::ChatResponse>, crate::api::public::ApiError> {
    let policy = TurnPolicy::from_config(&state.config);
    let outcome = next_turn(
        &state.transcripts,
        &state.gateway,
        policy,
        &payload.user_id,
        &payload.text,
    )
    .await?;

    Ok(Json(outcome.into()))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
