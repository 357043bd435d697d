//! Promo tic-tac-toe server binary.

use anyhow::Result;
use clap::Parser;
use promo_server::{AppState, BotConfig, Cli, TelegramClient, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = BotConfig::from_env();
    let bot = TelegramClient::new(config.api_base());
    let app = router(AppState::new(config, bot));

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready");

    axum::serve(listener, app).await?;

    Ok(())
}
