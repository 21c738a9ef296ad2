//! Public types for the end session API
use serde::{Deserialize, Serialize};

// Both fields are optional so a bare `{}` closes the anonymous
// session. `text` is accepted for parity with the chat request but
// not used.
#[derive(Deserialize)]
pub struct EndRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
pub struct EndResponse {
    pub feedback: String,
}
