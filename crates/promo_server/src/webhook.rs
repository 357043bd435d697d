//! Greeting webhook.
//!
//! Answers `/start` with a welcome message and a button that opens the
//! game. Once configuration and payload checks pass, the platform always
//! gets `{"ok": true}` so it never retries the update, even when the reply
//! could not be sent.

use crate::app::AppState;
use crate::error::ApiError;
use crate::telegram::SendMessage;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use promo_tictactoe::PlayerIdentity;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Greeting sent in reply to `/start`.
pub const WELCOME_TEXT: &str = "Welcome! Launch the game:";
/// Label of the launch button.
pub const LAUNCH_LABEL: &str = "Play";

/// Incoming update; everything is optional.
#[derive(Debug, Default, Deserialize)]
struct Update {
    #[serde(default)]
    message: Option<IncomingMessage>,
}

#[derive(Debug, Deserialize)]
struct IncomingMessage {
    #[serde(default)]
    chat: Option<Chat>,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Chat {
    #[serde(default)]
    id: Option<i64>,
}

/// Handles `POST /api/bot-webhook`.
#[instrument(skip_all, fields(body_len = body.len()))]
pub async fn bot_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let token = state.config.require_token()?;
    let webapp_url = state.config.require_webapp_url()?;

    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Webhook body is not JSON");
        ApiError::MalformedPayload
    })?;
    let update: Update = serde_json::from_value(value).unwrap_or_default();

    let Some(message) = update.message else {
        debug!("Update without message acknowledged");
        return Ok(ack());
    };
    let Some(chat) = message.chat.and_then(|c| c.id).and_then(PlayerIdentity::new) else {
        debug!("Update without chat id acknowledged");
        return Ok(ack());
    };
    let chat_id = chat.get();
    let text = message.text.unwrap_or_default();

    if text.starts_with("/start") {
        info!(chat_id, "Greeting new player");
        let greeting = SendMessage::new(chat_id, WELCOME_TEXT.to_string())
            .with_launch_button(LAUNCH_LABEL, webapp_url);
        if let Err(e) = state.bot.send_message(token, &greeting).await {
            warn!(chat_id, error = %e, "Failed to send welcome message");
        }
    } else {
        debug!(chat_id, "Non-start message acknowledged");
    }

    Ok(ack())
}

fn ack() -> Json<Value> {
    Json(serde_json::json!({ "ok": true }))
}
