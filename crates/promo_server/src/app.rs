//! Router and shared handler state.

use crate::config::BotConfig;
use crate::error::ApiError;
use crate::telegram::BotApi;
use crate::{relay, webhook};
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::post;
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;

/// Path of the greeting webhook.
pub const WEBHOOK_PATH: &str = "/api/bot-webhook";
/// Path of the message relay.
pub const RELAY_PATH: &str = "/api/send-message";

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Bot configuration.
    pub config: Arc<BotConfig>,
    /// Outbound Bot API.
    pub bot: Arc<dyn BotApi>,
}

impl AppState {
    /// Bundles configuration and Bot API client.
    pub fn new(config: BotConfig, bot: impl BotApi + 'static) -> Self {
        Self {
            config: Arc::new(config),
            bot: Arc::new(bot),
        }
    }
}

/// Builds the router with both endpoints and request logging.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(webhook::bot_webhook).fallback(method_not_allowed))
        .route(RELAY_PATH, post(relay::send_message).fallback(method_not_allowed))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
