use crate::chat::TranscriptStore;
use crate::core::AppConfig;
use crate::openai::ModelGateway;

pub struct AppState {
    pub config: AppConfig,
    // Conversation history for every user id seen since startup
    pub transcripts: TranscriptStore,
    pub gateway: ModelGateway,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let transcripts = TranscriptStore::new(&config.system_message);
        let gateway = ModelGateway::from_config(&config);
        Self {
            config,
            transcripts,
            gateway,
        }
    }
}
