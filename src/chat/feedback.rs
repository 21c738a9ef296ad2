use super::models::Transcript;
use super::store::TranscriptStore;

// Thresholds for the advice included in the summary
const SHORT_SENTENCE_WORDS: f64 = 6.0;
const FEW_TURNS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStats {
    pub turns: usize,
    pub average_words: f64,
}

impl SessionStats {
    pub fn from_transcript(transcript: &Transcript) -> Self {
        let utterances = transcript.user_utterances();
        let turns = utterances.len();
        let average_words = if turns == 0 {
            0.0
        } else {
            let words: usize = utterances
                .iter()
                .map(|text| text.split_whitespace().count())
                .sum();
            words as f64 / turns as f64
        };

        Self {
            turns,
            average_words,
        }
    }

    pub fn tips(&self) -> Vec<&'static str> {
        let mut tips = Vec::new();
        if self.average_words < SHORT_SENTENCE_WORDS {
            tips.push("Try forming slightly longer sentences.");
        }
        if self.turns < FEW_TURNS {
            tips.push("Practice a bit more to build fluency.");
        }
        if tips.is_empty() {
            tips.push("Great pacing and clarity!");
        }
        tips
    }

    pub fn summary(&self) -> String {
        format!(
            "📝 Session summary: You spoke {} turns in English. Avg. sentence length ≈ {:.1} words. {}",
            self.turns,
            self.average_words,
            self.tips().join(" ")
        )
    }
}

/// Summarize the user's session and clear their transcript. Users
/// with no history get a zero activity summary.
pub async fn end_session(store: &TranscriptStore, user_id: &str) -> String {
    let stats = {
        let mut transcript = store.lock(user_id).await;
        let stats = SessionStats::from_transcript(&transcript);
        transcript.clear();
        stats
    };
    store.release(user_id);

    tracing::debug!(
        "Ended session for {}: {} turns, {:.1} avg words, {} users active",
        user_id,
        stats.turns,
        stats.average_words,
        store.user_count()
    );

    stats.summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::{Message, Role};

    fn transcript(utterances: &[&str]) -> Transcript {
        let mut transcript = Transcript::new();
        transcript.ensure_system(&Message::new(Role::System, "system"));
        for text in utterances {
            transcript.push(Message::new(Role::User, text));
            transcript.push(Message::new(Role::Assistant, "one two three four five six seven"));
        }
        transcript
    }

    #[test]
    fn test_stats_ignore_assistant_messages() {
        let stats = SessionStats::from_transcript(&transcript(&["hello there friend", "yes"]));

        assert_eq!(stats.turns, 2);
        assert_eq!(stats.average_words, 2.0);
        assert_eq!(
            stats.tips(),
            vec![
                "Try forming slightly longer sentences.",
                "Practice a bit more to build fluency."
            ]
        );
    }

    #[test]
    fn test_empty_session_summary() {
        let stats = SessionStats::from_transcript(&Transcript::new());

        assert_eq!(
            stats.summary(),
            "📝 Session summary: You spoke 0 turns in English. Avg. sentence length ≈ 0.0 words. \
             Try forming slightly longer sentences. Practice a bit more to build fluency."
        );
    }

    #[test]
    fn test_positive_feedback_when_no_tips_apply() {
        let long = "I went to the park with my dog yesterday";
        let stats = SessionStats::from_transcript(&transcript(&[long; 5]));

        assert_eq!(stats.tips(), vec!["Great pacing and clarity!"]);
    }

    #[test]
    fn test_only_practice_tip_for_long_sentences() {
        let stats = SessionStats::from_transcript(&transcript(&[
            "I would like to talk about my favorite movie",
        ]));

        assert_eq!(stats.tips(), vec!["Practice a bit more to build fluency."]);
    }

    #[test]
    fn test_whitespace_runs_count_as_one_separator() {
        let stats = SessionStats::from_transcript(&transcript(&["  so   many\tspaces \n"]));

        assert_eq!(stats.average_words, 3.0);
    }

    #[tokio::test]
    async fn test_end_session_resets_transcript() {
        let store = TranscriptStore::new("system");
        store
            .append("alice", Message::new(Role::User, "hello there friend"))
            .await;
        store.append("alice", Message::new(Role::User, "yes")).await;

        let feedback = end_session(&store, "alice").await;

        assert!(feedback.contains("You spoke 2 turns"));
        assert!(feedback.contains("≈ 2.0 words"));
        assert!(store.messages("alice").await.is_empty());
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn test_end_session_for_unknown_user_is_not_tracked() {
        let store = TranscriptStore::new("system");

        let feedback = end_session(&store, "nobody").await;

        assert!(feedback.contains("You spoke 0 turns"));
        assert_eq!(store.user_count(), 0);
    }
}
