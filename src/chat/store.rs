use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use super::models::Transcript;
use crate::openai::{Message, Role};

type Entry = Arc<AsyncMutex<Transcript>>;

/// Process wide transcripts keyed by the caller supplied user id.
///
/// Each user id gets its own async lock so a chat turn holds the
/// transcript for the whole read, model call, and append. Turns for
/// the same user run one after another while different users never
/// wait on each other. Cloning the store shares the same
/// transcripts.
#[derive(Clone)]
pub struct TranscriptStore {
    system_message: Message,
    transcripts: Arc<Mutex<HashMap<String, Entry>>>,
}

impl TranscriptStore {
    pub fn new(system_message: &str) -> Self {
        Self {
            system_message: Message::new(Role::System, system_message),
            transcripts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn entry(&self, user_id: &str) -> Entry {
        let mut transcripts = self
            .transcripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(transcripts.entry(user_id.to_string()).or_default())
    }

    fn existing(&self, user_id: &str) -> Option<Entry> {
        self.transcripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .map(Arc::clone)
    }

    /// Lock the user's transcript as is. Unknown users get an empty
    /// transcript.
    pub async fn lock(&self, user_id: &str) -> OwnedMutexGuard<Transcript> {
        self.entry(user_id).lock_owned().await
    }

    /// Lock the user's transcript, starting it with the system
    /// message if it is empty.
    pub async fn get_or_create(&self, user_id: &str) -> OwnedMutexGuard<Transcript> {
        let mut transcript = self.lock(user_id).await;
        transcript.ensure_system(&self.system_message);
        transcript
    }

    pub async fn append(&self, user_id: &str, msg: Message) {
        self.get_or_create(user_id).await.push(msg);
    }

    pub async fn reset(&self, user_id: &str) {
        self.lock(user_id).await.clear();
        self.release(user_id);
    }

    /// Drop the user's entry if their transcript is empty and no other
    /// task holds or waits on its lock. New handles are only handed
    /// out under the map lock, so a strong count of one can't grow
    /// while it is held.
    pub fn release(&self, user_id: &str) {
        let mut transcripts = self
            .transcripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let idle = transcripts.get(user_id).is_some_and(|entry| {
            Arc::strong_count(entry) == 1
                && entry.try_lock().is_ok_and(|transcript| transcript.is_empty())
        });
        if idle {
            transcripts.remove(user_id);
        }
    }

    /// Number of user ids currently tracked.
    pub fn user_count(&self) -> usize {
        self.transcripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Snapshot of the user's messages. Empty for unknown users.
    pub async fn messages(&self, user_id: &str) -> Vec<Message> {
        let Some(entry) = self.existing(user_id) else {
            return Vec::new();
        };
        let transcript = entry.lock().await;
        transcript.messages()
    }
}
