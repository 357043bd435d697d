//! HTTP endpoints for the promo tic-tac-toe web app.
//!
//! - `POST /api/bot-webhook` greets players who send `/start` and hands
//!   them a button that opens the game.
//! - `POST /api/send-message` relays game results from the web app into
//!   the player's chat.
//!
//! Both endpoints answer with JSON: `{"ok": true}` on success and
//! `{"error": "..."}` otherwise (see [`ApiError`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod error;
mod relay;
mod telegram;
mod webhook;

pub use app::{AppState, RELAY_PATH, WEBHOOK_PATH, router};
pub use cli::Cli;
pub use config::{
    API_BASE_VAR, BotConfig, ConfigError, DEFAULT_API_BASE, TOKEN_VAR, WEBAPP_URL_VAR,
};
pub use error::ApiError;
pub use telegram::{
    BotApi, BotApiError, InlineKeyboardButton, ReplyMarkup, SendMessage, TelegramClient,
    WebAppInfo,
};
pub use webhook::{LAUNCH_LABEL, WELCOME_TEXT};
