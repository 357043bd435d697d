//! Outbound notifications about finished games.
//!
//! The controller only decides *what* to say and *to whom*. Delivery sits
//! behind the [`Notifier`] port so adapters can post to the relay
//! asynchronously and tests can record requests instead.

use super::identity::PlayerIdentity;
use super::reward::PromoCode;
use serde::{Deserialize, Serialize};

/// Message sent to the player's chat when a game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The player won and earned a promo code.
    Victory {
        /// Code issued for this win.
        code: PromoCode,
    },
    /// The opponent won.
    Defeat,
}

impl Notification {
    /// Chat text for this notification.
    pub fn text(&self) -> String {
        match self {
            Notification::Victory { code } => format!("Victory! Promo code issued: {code}"),
            Notification::Defeat => "Defeat".to_string(),
        }
    }
}

/// Body of a relay request, as posted to the relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    /// Chat to deliver to.
    pub identity: PlayerIdentity,
    /// Message text.
    pub text: String,
}

impl RelayRequest {
    /// Builds the relay body for a notification.
    pub fn new(identity: PlayerIdentity, notification: &Notification) -> Self {
        Self {
            identity,
            text: notification.text(),
        }
    }
}

/// Port for fire-and-forget delivery.
///
/// Implementations must return promptly; failures are reported back to the
/// presentation layer out of band as [`Notice::DeliveryFailed`] and never
/// touch game state.
pub trait Notifier {
    /// Requests delivery of `notification` to `identity`.
    fn notify(&mut self, identity: PlayerIdentity, notification: &Notification);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, identity: PlayerIdentity, notification: &Notification) {
        (**self).notify(identity, notification);
    }
}

/// Notifier that drops every request, for sessions without a relay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, identity: PlayerIdentity, notification: &Notification) {
        tracing::debug!(%identity, text = %notification.text(), "Notification dropped");
    }
}

/// Transient, non-fatal warning for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Notice {
    /// No chat identity, so the result was not sent.
    #[display("Could not determine your chat. Message not sent.")]
    IdentityUnknown,
    /// The relay did not accept the message.
    #[display("Could not send the message to your chat.")]
    DeliveryFailed,
}
