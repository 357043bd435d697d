//! Player identity and host session bootstrap.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Chat-provided numeric identity used to address notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct PlayerIdentity(i64);

impl PlayerIdentity {
    /// Wraps a raw chat id. Zero is not a valid chat id.
    pub fn new(id: i64) -> Option<Self> {
        (id != 0).then_some(Self(id))
    }

    /// Returns the raw chat id.
    pub fn get(self) -> i64 {
        self.0
    }
}

/// Error parsing a [`PlayerIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum IdentityError {
    /// The text is not an integer.
    #[display("Player identity {:?} is not numeric", _0)]
    NotNumeric(String),
    /// Zero never identifies a chat.
    #[display("Player identity must be non-zero")]
    Zero,
}

impl std::error::Error for IdentityError {}

impl FromStr for PlayerIdentity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: i64 = s
            .trim()
            .parse()
            .map_err(|_| IdentityError::NotNumeric(s.to_string()))?;
        Self::new(id).ok_or(IdentityError::Zero)
    }
}

/// Host environment the game is embedded in (a chat client's web view,
/// or a terminal launcher).
pub trait HostEnvironment {
    /// Identity of the user who opened the game, if the host knows it.
    fn identity(&self) -> Option<PlayerIdentity>;

    /// Tells the host the game has loaded.
    fn ready(&self) {}

    /// Asks the host to give the game its full viewport.
    fn expand(&self) {}
}

/// Result of bootstrapping against an optional host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostSession {
    identity: Option<PlayerIdentity>,
}

impl HostSession {
    /// Runs the host lifecycle hooks and captures the identity.
    ///
    /// Without a host the game is still playable; notifications are simply
    /// disabled.
    #[instrument(skip(host))]
    pub fn bootstrap(host: Option<&dyn HostEnvironment>) -> Self {
        let Some(host) = host else {
            info!("No host environment, notifications disabled");
            return Self::default();
        };
        host.ready();
        host.expand();
        let identity = host.identity();
        match identity {
            Some(id) => debug!(%id, "Host supplied player identity"),
            None => warn!("Host did not supply a player identity"),
        }
        Self { identity }
    }

    /// Returns the player identity, if known.
    pub fn identity(&self) -> Option<PlayerIdentity> {
        self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeHost {
        id: Option<PlayerIdentity>,
        readied: Cell<bool>,
        expanded: Cell<bool>,
    }

    impl HostEnvironment for FakeHost {
        fn identity(&self) -> Option<PlayerIdentity> {
            self.id
        }
        fn ready(&self) {
            self.readied.set(true);
        }
        fn expand(&self) {
            self.expanded.set(true);
        }
    }

    #[test]
    fn test_parse_identity() {
        assert_eq!("123456".parse::<PlayerIdentity>().map(PlayerIdentity::get), Ok(123456));
        assert_eq!("-100".parse::<PlayerIdentity>().map(PlayerIdentity::get), Ok(-100));
        assert_eq!("0".parse::<PlayerIdentity>(), Err(IdentityError::Zero));
        assert!(matches!("abc".parse::<PlayerIdentity>(), Err(IdentityError::NotNumeric(_))));
    }

    #[test]
    fn test_bootstrap_runs_hooks() {
        let host = FakeHost {
            id: PlayerIdentity::new(42),
            readied: Cell::new(false),
            expanded: Cell::new(false),
        };
        let session = HostSession::bootstrap(Some(&host));
        assert_eq!(session.identity(), PlayerIdentity::new(42));
        assert!(host.readied.get());
        assert!(host.expanded.get());
    }

    #[test]
    fn test_bootstrap_without_host() {
        assert_eq!(HostSession::bootstrap(None).identity(), None);
    }
}
