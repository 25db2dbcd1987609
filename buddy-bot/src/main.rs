use anyhow::Result;
use buddy_bot::{run_bot, BotConfig};
use clap::Parser;

/// Telegram chat bot. Configuration comes from the environment (and `.env`).
#[derive(Parser, Debug)]
#[command(name = "buddy-bot", version, about)]
struct Cli {
    /// Bot token; overrides BOT_TOKEN.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BotConfig::load(cli.token)?;
    run_bot(config).await
}
