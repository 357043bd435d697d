//! Command-line interface for the server.

use clap::Parser;

/// Bot webhook and message relay for promo tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "promo_server")]
#[command(about = "Bot webhook and message relay for promo tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Port to bind to
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}
