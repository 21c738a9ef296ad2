use super::feedback::SessionStats;
use super::store::TranscriptStore;
use crate::core::AppConfig;
use crate::openai::{CompletionError, Message, ModelGateway, Role};

#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    /// The model replied and the conversation goes on
    Continue { reply: String },
    /// The turn limit was reached and the session was closed
    Ended { feedback: String },
}

#[derive(Clone, Copy, Debug)]
pub struct TurnPolicy {
    pub context_window: usize,
    pub turn_limit: Option<usize>,
}

impl TurnPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            context_window: config.context_window,
            turn_limit: config.turn_limit,
        }
    }
}

/// Runs the next turn of a user's practice conversation.
///
/// The user's message is appended before the model is called and is
/// kept even if the call fails, so the next turn includes it. When a
/// turn limit is set and this message reaches it, the session is
/// summarized and reset without calling the model.
pub async fn next_turn(
    store: &TranscriptStore,
    gateway: &ModelGateway,
    policy: TurnPolicy,
    user_id: &str,
    text: &str,
) -> Result<TurnOutcome, CompletionError> {
    let mut transcript = store.get_or_create(user_id).await;
    transcript.push(Message::new(Role::User, text));

    if let Some(limit) = policy.turn_limit {
        if transcript.user_turns() >= limit {
            let feedback = SessionStats::from_transcript(&transcript).summary();
            transcript.clear();
            drop(transcript);
            store.release(user_id);
            tracing::debug!("Turn limit {} reached for {}", limit, user_id);
            return Ok(TurnOutcome::Ended { feedback });
        }
    }

    let context = transcript.context(policy.context_window);
    tracing::debug!(
        "Sending {} of {} messages for {}",
        context.len(),
        transcript.len(),
        user_id
    );

    let reply = gateway.complete(&context).await?;
    transcript.push(Message::new(Role::Assistant, &reply));

    Ok(TurnOutcome::Continue { reply })
}
