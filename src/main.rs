use anyhow::Result;
use parlance::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
