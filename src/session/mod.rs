//! Explicit session context: the one place the bearer token is read and the
//! one place it is invalidated.

pub mod error;
pub mod store;

pub use error::*;
pub use store::*;

use tracing::{error, info, instrument};

use crate::domain::Route;
use crate::events::EventSink;

/// Holds the token store and knows how to send the user back to the login
/// screen. Shared behind an `Arc` by every authenticated client.
pub struct Session {
    store: Box<dyn TokenStore>,
    events: EventSink,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static, events: EventSink) -> Self {
        Self {
            store: Box::new(store),
            events,
        }
    }

    /// Reads the token from the store. Storage failures are logged and treated
    /// as "signed out".
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                error!(error = %e, "Failed to read session token");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    #[instrument(skip_all)]
    pub fn sign_in(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token)?;
        info!("Session token stored");
        Ok(())
    }

    /// Clears the stored token and redirects to the login screen.
    #[instrument(skip(self))]
    pub fn invalidate(&self) {
        if let Err(e) = self.store.clear() {
            error!(error = %e, "Failed to clear session token");
        }
        info!("Session invalidated");
        self.events.navigate(Route::Login);
    }
}
