mod core;
pub use self::core::{
    CompletionError, FREQUENCY_PENALTY, MAX_TOKENS, Message, ModelGateway, PRESENCE_PENALTY,
    Role, TEMPERATURE,
};
