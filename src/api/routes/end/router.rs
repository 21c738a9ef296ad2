//! Router for the end session API

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

use super::public;
use crate::api::state::AppState;
use crate::chat::end_session;

type SharedState = Arc<AppState>;

/// Summarize the user's session and clear their history
async fn end_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::EndRequest>,
) -> Json<public::EndResponse> {
    let feedback = end_session(&state.transcripts, &payload.user_id).await;
    Json(public::EndResponse { feedback })
}

/// Create the end session router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(end_handler))
}
