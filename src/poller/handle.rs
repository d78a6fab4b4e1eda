use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, instrument};

use super::PollerExit;
use crate::domain::Transaction;

/// The screen's side of a [`StatusPoller`](super::StatusPoller).
///
/// Dropping the handle unmounts the poller just like [`PollerHandle::unmount`].
pub struct PollerHandle {
    unmount: Option<oneshot::Sender<()>>,
    snapshot: watch::Receiver<Option<Transaction>>,
    task: Option<JoinHandle<PollerExit>>,
    exit: Option<PollerExit>,
}

impl PollerHandle {
    pub(crate) fn new(unmount: oneshot::Sender<()>, snapshot: watch::Receiver<Option<Transaction>>) -> Self {
        Self {
            unmount: Some(unmount),
            snapshot,
            task: None,
            exit: None,
        }
    }

    pub(crate) fn attach(&mut self, task: JoinHandle<PollerExit>) {
        self.task = Some(task);
    }

    /// Latest fetched snapshot, if any fetch has succeeded yet.
    pub fn current(&self) -> Option<Transaction> {
        self.snapshot.borrow().clone()
    }

    /// A receiver that sees every new snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Option<Transaction>> {
        self.snapshot.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.exit.is_some() || self.task.as_ref().is_some_and(JoinHandle::is_finished)
    }

    /// Waits for the poller to stop on its own. Cancel-safe: if the returned
    /// future is dropped the poller keeps running.
    pub async fn wait(&mut self) -> PollerExit {
        if let Some(exit) = &self.exit {
            return exit.clone();
        }
        let exit = match self.task.as_mut() {
            Some(task) => join(task).await,
            None => PollerExit::Unmounted,
        };
        self.task = None;
        self.exit = Some(exit.clone());
        exit
    }

    /// Stops the poller: cancels its timer and abandons any in-flight fetch.
    /// Returns how it ended, which is not `Unmounted` if it had already
    /// stopped by itself.
    #[instrument(skip(self))]
    pub async fn unmount(mut self) -> PollerExit {
        if let Some(unmount) = self.unmount.take() {
            if unmount.send(()).is_err() {
                debug!("Poller already stopped");
            }
        }
        self.wait().await
    }
}

async fn join(task: &mut JoinHandle<PollerExit>) -> PollerExit {
    match task.await {
        Ok(exit) => exit,
        Err(e) if e.is_panic() => {
            error!(error = %e, "Poller task panicked");
            PollerExit::Failed(e.to_string())
        }
        Err(e) => {
            debug!(error = %e, "Poller task cancelled");
            PollerExit::Unmounted
        }
    }
}
