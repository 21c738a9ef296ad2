use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::core::AppConfig;

pub mod chat;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8000")]
        port: String,
    },
    /// Practice a conversation in the terminal
    Chat {
        /// Name the transcript is kept under
        #[arg(long, default_value = "local")]
        user_id: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Settings in a local .env file are optional
    dotenvy::dotenv().ok();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Chat { user_id }) => {
            chat::run(&user_id, config).await?;
        }
        None => {}
    }

    Ok(())
}
