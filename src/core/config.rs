use std::env;

pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are an English-only conversation partner for language practice. \
Always reply in English, keep responses concise (1–3 sentences), \
ask a simple follow-up question, and avoid using Japanese. \
If the user speaks non-English, gently remind them to use English.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_model: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub system_message: String,
    // Number of trailing messages sent to the model after the system
    // message
    pub context_window: usize,
    // Ends the session automatically once a user reaches this many
    // turns. `None` disables the policy.
    pub turn_limit: Option<usize>,
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let openai_api_hostname = env::var("PARLANCE_OPENAI_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model =
            env::var("PARLANCE_OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let system_message = env::var("PARLANCE_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_MESSAGE.to_string());
        let context_window = env::var("PARLANCE_CONTEXT_WINDOW")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);
        let turn_limit = env::var("PARLANCE_TURN_LIMIT")
            .ok()
            .and_then(|v| parse_turn_limit(&v));
        let cors_origins = env::var("PARLANCE_CORS_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_else(|_| {
                vec![
                    "*".to_string(),
                    "http://localhost:5173".to_string(),
                    "http://127.0.0.1:5173".to_string(),
                ]
            });

        Self {
            openai_model,
            openai_api_hostname,
            openai_api_key,
            system_message,
            context_window,
            turn_limit,
            cors_origins,
        }
    }
}

/// A limit of zero (or anything that isn't a number) turns the policy
/// off.
fn parse_turn_limit(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|limit| *limit > 0)
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_turn_limit() {
        assert_eq!(parse_turn_limit("10"), Some(10));
        assert_eq!(parse_turn_limit(" 3 "), Some(3));
        assert_eq!(parse_turn_limit("0"), None);
        assert_eq!(parse_turn_limit("off"), None);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:5173, http://127.0.0.1:5173,,"),
            vec!["http://localhost:5173", "http://127.0.0.1:5173"]
        );
        assert!(parse_origins("").is_empty());
    }
}
