//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::chat::TurnOutcome;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub text: String,
}

/// `{"end": false, "reply": ...}` while the conversation continues and
/// `{"end": true, "feedback": ...}` once the turn limit closes it.
#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply { end: bool, reply: String },
    Ended { end: bool, feedback: String },
}

impl From<TurnOutcome> for ChatResponse {
    fn from(outcome: TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::Continue { reply } => ChatResponse::Reply { end: false, reply },
            TurnOutcome::Ended { feedback } => ChatResponse::Ended {
                end: true,
                feedback,
            },
        }
    }
}
