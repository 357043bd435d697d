//! Terminal host: the identity comes from the command line or environment.

use promo_tictactoe::{HostEnvironment, PlayerIdentity};
use tracing::{debug, warn};

/// Host environment for a terminal launch.
#[derive(Debug, Clone, Default)]
pub struct CliHost {
    raw_identity: Option<String>,
}

impl CliHost {
    /// Wraps the raw `--identity` value.
    pub fn new(raw_identity: Option<String>) -> Self {
        Self { raw_identity }
    }
}

impl HostEnvironment for CliHost {
    fn identity(&self) -> Option<PlayerIdentity> {
        let raw = self.raw_identity.as_deref()?;
        match raw.parse() {
            Ok(identity) => Some(identity),
            Err(e) => {
                warn!(error = %e, "Ignoring invalid player identity");
                None
            }
        }
    }

    fn ready(&self) {
        debug!("Terminal host ready");
    }
}
