//! Bot API client.

use async_trait::async_trait;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// `sendMessage` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct SendMessage {
    /// Target chat.
    pub chat_id: i64,
    /// Message text.
    pub text: String,
    /// Optional inline keyboard.
    #[new(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessage {
    /// Attaches a single button that opens the web app at `url`.
    pub fn with_launch_button(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.reply_markup = Some(ReplyMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: label.into(),
                web_app: WebAppInfo { url: url.into() },
            }]],
        });
        self
    }
}

/// Inline keyboard attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyMarkup {
    /// Rows of buttons.
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

/// Button that launches a web app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Button label.
    pub text: String,
    /// Web app to open.
    pub web_app: WebAppInfo,
}

/// Web app launched by a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInfo {
    /// Hosted game URL.
    pub url: String,
}

/// Bot API envelope; only the status fields matter here.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Outbound side of the messaging platform.
#[async_trait]
pub trait BotApi: Send + Sync {
    /// Sends a message as the bot identified by `token`.
    async fn send_message(&self, token: &str, message: &SendMessage) -> Result<(), BotApiError>;
}

/// reqwest-backed [`BotApi`].
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    api_base: String,
}

impl TelegramClient {
    /// Creates a client talking to `api_base` (no trailing slash).
    #[instrument(skip(api_base), fields(api_base = %api_base.as_ref()))]
    pub fn new(api_base: impl AsRef<str>) -> Self {
        info!("Creating Bot API client");
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.as_ref().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BotApi for TelegramClient {
    #[instrument(skip(self, token, message), fields(chat_id = message.chat_id))]
    async fn send_message(&self, token: &str, message: &SendMessage) -> Result<(), BotApiError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, token);

        debug!("Sending message");
        let response = self
            .client
            .post(&url)
            .json(message)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Bot API request failed");
                BotApiError::new(format!("Bot API request failed: {}", e))
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Bot API response");
            BotApiError::new(format!("Failed to read response: {}", e))
        })?;

        let parsed: Option<ApiResponse> = serde_json::from_str(&response_text).ok();
        match parsed {
            Some(ApiResponse { ok: true, .. }) if status.is_success() => {
                debug!("Message accepted");
                Ok(())
            }
            Some(ApiResponse { description, .. }) => {
                let reason = description.unwrap_or_else(|| "Bot API error".to_string());
                error!(%status, %reason, "Bot API rejected message");
                Err(BotApiError::new(format!("Bot API error {}: {}", status, reason)))
            }
            None => {
                error!(%status, response = %response_text, "Unparseable Bot API response");
                Err(BotApiError::new(format!(
                    "Bot API error {}: {}",
                    status, response_text
                )))
            }
        }
    }
}

/// Bot API client error.
#[derive(Debug, Clone, Display, Error)]
#[display("Bot API error: {} at {}:{}", message, file, line)]
pub struct BotApiError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BotApiError {
    /// Creates a new Bot API error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
