//! Message relay: forwards game results from the web app to the chat.

use crate::app::AppState;
use crate::error::ApiError;
use crate::telegram::SendMessage;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use promo_tictactoe::PlayerIdentity;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

/// Relay body as sent by clients. Older clients send `chatId`; when both
/// keys are present `identity` wins.
#[derive(Debug, Default, Deserialize)]
struct RelayBody {
    #[serde(default)]
    identity: Option<Value>,
    #[serde(default, rename = "chatId")]
    chat_id: Option<Value>,
    #[serde(default)]
    text: Option<String>,
}

/// Accepts a numeric id, or a string holding one.
fn parse_identity(value: &Value) -> Option<PlayerIdentity> {
    match value {
        Value::Number(n) => n.as_i64().and_then(PlayerIdentity::new),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Handles `POST /api/send-message`.
#[instrument(skip_all, fields(body_len = body.len()))]
pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let token = state.config.require_token()?;

    let value: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Relay body is not JSON");
        ApiError::MalformedPayload
    })?;
    let request: RelayBody = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "Relay body has the wrong shape");
        ApiError::MissingFields
    })?;

    let identity = request.identity.or(request.chat_id).as_ref().and_then(parse_identity);
    let text = request.text.filter(|t| !t.is_empty());
    let (Some(identity), Some(text)) = (identity, text) else {
        warn!("Relay body lacks identity or text");
        return Err(ApiError::MissingFields);
    };

    let message = SendMessage::new(identity.get(), text);
    match state.bot.send_message(token, &message).await {
        Ok(()) => {
            info!(%identity, "Message relayed");
            Ok(Json(serde_json::json!({ "ok": true })))
        }
        Err(e) => {
            error!(%identity, error = %e, "Relay failed");
            Err(ApiError::DeliveryFailed)
        }
    }
}
