use std::sync::Arc;

use tracing::info;

use super::error::AppError;
use crate::api::{ApiClient, TransactionClient};
use crate::config::AppConfig;
use crate::domain::{Transaction, TransactionId};
use crate::events::{self, EventStream};
use crate::poller::{PollerExit, PollerHandle, StatusPoller};
use crate::session::{FileTokenStore, MemoryTokenStore, Session};

/// The transaction waiting screen, fully wired.
///
/// Responsible for building the session, the API client and the poller, and
/// for tearing the poller down again.
pub struct WaitingSystem {
    pub session: Arc<Session>,
    pub transactions: TransactionClient,
    poller: PollerHandle,
}

impl WaitingSystem {
    /// Starts watching `id`. A `token` given here is stored in the session
    /// before the first fetch; otherwise whatever the token store already
    /// holds is used.
    pub fn mount(
        config: &AppConfig,
        id: impl Into<TransactionId>,
        token: Option<&str>,
    ) -> Result<(Self, EventStream), AppError> {
        let (events, stream) = events::channel();

        let session = Arc::new(match &config.token_store_path {
            Some(path) => Session::new(FileTokenStore::new(path), events.clone()),
            None => Session::new(MemoryTokenStore::default(), events.clone()),
        });
        if let Some(token) = token {
            session.sign_in(token)?;
        }

        let api = ApiClient::new(&config.api_base_url, config.request_timeout, session.clone())?;
        let transactions = TransactionClient::new(api);
        let poller = StatusPoller::mount(id, transactions.clone(), events, config.poller());

        info!(api_base_url = %config.api_base_url, "Waiting screen mounted");
        Ok((
            Self {
                session,
                transactions,
                poller,
            },
            stream,
        ))
    }

    pub fn current(&self) -> Option<Transaction> {
        self.poller.current()
    }

    /// Resolves once the poller stops by itself.
    pub async fn finished(&mut self) -> PollerExit {
        self.poller.wait().await
    }

    pub async fn shutdown(self) -> PollerExit {
        info!("Shutting down waiting screen...");
        let exit = self.poller.unmount().await;
        info!(exit = ?exit, "Waiting screen shut down.");
        exit
    }
}
