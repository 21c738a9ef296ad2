//! API routes module

pub mod chat;
pub mod end;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::api::state::AppState;

type SharedState = Arc<AppState>;

async fn index() -> Json<Value> {
    Json(json!({"ok": true, "endpoints": ["/chat", "/docs"]}))
}

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index))
        // Chat turns
        .nest("/chat", chat::router())
        // Session feedback
        .nest("/end", end::router())
}
