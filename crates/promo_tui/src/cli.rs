//! Command-line interface.

use clap::Parser;
use std::time::Duration;

/// Play promo tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "promo_tictactoe_tui")]
#[command(about = "Beat the computer at tic-tac-toe and win a promo code", long_about = None)]
pub struct Cli {
    /// Chat identity that receives game results
    #[arg(long, env = "PROMO_PLAYER_IDENTITY")]
    pub identity: Option<String>,

    /// Message relay endpoint
    #[arg(
        long,
        env = "PROMO_RELAY_URL",
        default_value = "http://127.0.0.1:3000/api/send-message"
    )]
    pub relay_url: String,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, default_value_t = 320)]
    pub opponent_delay_ms: u64,
}

impl Cli {
    /// Opponent pacing delay.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}
