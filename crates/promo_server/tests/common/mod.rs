//! Shared helpers for endpoint tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use promo_server::{AppState, BotApi, BotApiError, BotConfig, SendMessage, router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TOKEN: &str = "123:test-token";
pub const WEBAPP_URL: &str = "https://games.example.test/tictactoe";

/// Bot API stub that records messages and optionally fails.
#[derive(Clone, Default)]
pub struct StubBot {
    pub sent: Arc<Mutex<Vec<(String, SendMessage)>>>,
    pub fail: bool,
}

impl StubBot {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, SendMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl BotApi for StubBot {
    async fn send_message(&self, token: &str, message: &SendMessage) -> Result<(), BotApiError> {
        self.sent
            .lock()
            .unwrap()
            .push((token.to_string(), message.clone()));
        if self.fail {
            Err(BotApiError::new("stubbed outage".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn full_config() -> BotConfig {
    BotConfig::new(Some(TOKEN.to_string()), Some(WEBAPP_URL.to_string()))
}

pub fn app(config: BotConfig, bot: StubBot) -> Router {
    router(AppState::new(config, bot))
}

/// Sends one request through the router and decodes the JSON reply.
pub async fn call(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
