use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{TranscriptStore, TurnOutcome, TurnPolicy, end_session, next_turn};
use crate::core::AppConfig;
use crate::openai::ModelGateway;

const END_COMMAND: &str = "/end";

pub async fn run(user_id: &str, config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let store = TranscriptStore::new(&config.system_message);
    let gateway = ModelGateway::from_config(&config);
    let policy = TurnPolicy::from_config(&config);

    println!("Say something in English. Type {} to finish.", END_COMMAND);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) if line.trim() == END_COMMAND => break,
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                if let Err(err) = rl.add_history_entry(line.as_str()) {
                    tracing::debug!("Failed to add history entry: {}", err);
                }
                match next_turn(&store, &gateway, policy, user_id, &line).await {
                    Ok(TurnOutcome::Continue { reply }) => println!("{}", reply),
                    Ok(TurnOutcome::Ended { feedback }) => {
                        println!("{}", feedback);
                        return Ok(());
                    }
                    // The message stays in the transcript so the user
                    // can just try again
                    Err(err) => println!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("{}", end_session(&store, user_id).await);

    Ok(())
}
