//! Relay notifier: posts game results to the message relay endpoint.

use promo_tictactoe::{Notice, Notification, Notifier, PlayerIdentity, RelayRequest};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Fire-and-forget [`Notifier`] backed by reqwest.
///
/// Each notification is posted from its own tokio task, so it must be used
/// inside a runtime. Failures are reported on the notice channel and never
/// reach the game.
#[derive(Debug, Clone)]
pub struct RelayNotifier {
    client: reqwest::Client,
    url: String,
    failures: mpsc::UnboundedSender<Notice>,
}

impl RelayNotifier {
    /// Creates a notifier posting to `url`; failures go to `failures`.
    pub fn new(url: impl Into<String>, failures: mpsc::UnboundedSender<Notice>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            failures,
        }
    }
}

impl Notifier for RelayNotifier {
    #[instrument(skip(self, notification), fields(url = %self.url))]
    fn notify(&mut self, identity: PlayerIdentity, notification: &Notification) {
        let request = RelayRequest::new(identity, notification);
        let client = self.client.clone();
        let url = self.url.clone();
        let failures = self.failures.clone();

        debug!(text = %request.text, "Dispatching relay request");
        tokio::spawn(async move {
            match client.post(&url).json(&request).send().await {
                Ok(response) if response.status().is_success() => {
                    info!(%identity, "Result relayed");
                }
                Ok(response) => {
                    error!(%identity, status = %response.status(), "Relay rejected message");
                    let _ = failures.send(Notice::DeliveryFailed);
                }
                Err(e) => {
                    error!(%identity, error = %e, "Relay unreachable");
                    let _ = failures.send(Notice::DeliveryFailed);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::time::Duration;

    async fn spawn_relay(status: StatusCode) -> (String, mpsc::UnboundedReceiver<Value>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Router::new()
            .route(
                "/api/send-message",
                post(move |State(tx): State<mpsc::UnboundedSender<Value>>, Json(body): Json<Value>| async move {
                    let _ = tx.send(body);
                    status
                }),
            )
            .with_state(tx);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/api/send-message", addr), rx)
    }

    #[tokio::test]
    async fn test_posts_identity_and_text() {
        let (url, mut bodies) = spawn_relay(StatusCode::OK).await;
        let (failures_tx, mut failures) = mpsc::unbounded_channel();
        let mut notifier = RelayNotifier::new(url, failures_tx);

        notifier.notify(PlayerIdentity::new(314).unwrap(), &Notification::Defeat);

        let body = tokio::time::timeout(Duration::from_secs(5), bodies.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(body, json!({ "identity": 314, "text": "Defeat" }));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(failures.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rejection_reports_delivery_failure() {
        let (url, _bodies) = spawn_relay(StatusCode::BAD_GATEWAY).await;
        let (failures_tx, mut failures) = mpsc::unbounded_channel();
        let mut notifier = RelayNotifier::new(url, failures_tx);

        notifier.notify(PlayerIdentity::new(314).unwrap(), &Notification::Defeat);

        let notice = tokio::time::timeout(Duration::from_secs(5), failures.recv())
            .await
            .unwrap();
        assert_eq!(notice, Some(Notice::DeliveryFailed));
    }

    #[tokio::test]
    async fn test_unreachable_relay_reports_delivery_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (failures_tx, mut failures) = mpsc::unbounded_channel();
        let mut notifier = RelayNotifier::new(format!("http://{}/api/send-message", addr), failures_tx);
        notifier.notify(PlayerIdentity::new(1).unwrap(), &Notification::Defeat);

        let notice = tokio::time::timeout(Duration::from_secs(5), failures.recv())
            .await
            .unwrap();
        assert_eq!(notice, Some(Notice::DeliveryFailed));
    }
}
