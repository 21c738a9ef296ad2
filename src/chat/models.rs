//! The core models for a practice conversation.
use crate::openai::{Message, Role};

/// Ordered messages for one user. When non-empty the first message is
/// the system instruction. Messages are only ever appended.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Seed an empty transcript with the system instruction.
    pub fn ensure_system(&mut self, system: &Message) {
        if self.0.is_empty() {
            self.0.push(system.clone());
        }
    }

    /// Everything the user has said so far, oldest first.
    pub fn user_utterances(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .collect()
    }

    pub fn user_turns(&self) -> usize {
        self.0.iter().filter(|m| m.role == Role::User).count()
    }

    /// The messages sent to the model: the leading system message
    /// followed by at most `window` of the most recent messages.
    pub fn context(&self, window: usize) -> Vec<Message> {
        let Some((system, rest)) = self.0.split_first() else {
            return Vec::new();
        };
        let start = rest.len().saturating_sub(window);
        std::iter::once(system).chain(&rest[start..]).cloned().collect()
    }
}
