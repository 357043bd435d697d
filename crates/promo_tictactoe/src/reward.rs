//! Promo codes handed out when the player wins.

use super::random::RandomSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Cosmetic five-digit reward code.
///
/// Generated fresh on every player win; never stored or checked anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct PromoCode(String);

impl PromoCode {
    /// Smallest code value.
    pub const MIN: u32 = 10_000;
    /// Largest code value.
    pub const MAX: u32 = 99_999;

    /// Draws a code uniformly from [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
    #[instrument(skip(rng))]
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let span = (Self::MAX - Self::MIN + 1) as usize;
        let value = Self::MIN + rng.below(span) as u32;
        debug!(value, "Generated promo code");
        Self(value.to_string())
    }

    /// Returns the code text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
