//! Per-user practice conversations: the transcript store, the turn
//! processor that talks to the model, and the end of session
//! feedback.
mod feedback;
mod models;
mod store;
mod turn;

pub use feedback::{SessionStats, end_session};
pub use models::Transcript;
pub use store::TranscriptStore;
pub use turn::{TurnOutcome, TurnPolicy, next_turn};
