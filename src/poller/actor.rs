use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info, instrument, warn};

use super::handle::PollerHandle;
use super::{PollerConfig, PollerExit, MAX_POLL_INTERVAL, MIN_POLL_INTERVAL};
use crate::api::{ApiError, TransactionSource};
use crate::domain::{action_for, Notice, Route, StatusAction, Transaction, TransactionId, TransactionStatus};
use crate::events::EventSink;

/// Status polling actor for a single transaction.
///
/// Fetches once on start, then once per interval while the status is
/// awaiting. The first terminal status fires its transition action and ends
/// the task. Unmount (or dropping the handle) ends it at any point, including
/// while a fetch is in flight.
pub struct StatusPoller<S: TransactionSource> {
    id: TransactionId,
    source: S,
    events: EventSink,
    interval: Duration,
    snapshot: watch::Sender<Option<Transaction>>,
    unmount: oneshot::Receiver<()>,
    transitioned: bool,
}

impl<S: TransactionSource> StatusPoller<S> {
    pub fn new(
        id: impl Into<TransactionId>,
        source: S,
        events: EventSink,
        config: PollerConfig,
    ) -> (Self, PollerHandle) {
        let interval = config.interval.clamp(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL);
        if interval != config.interval {
            warn!(
                requested_ms = config.interval.as_millis() as u64,
                interval_ms = interval.as_millis() as u64,
                "Poll interval out of range; clamped"
            );
        }

        let (unmount_tx, unmount_rx) = oneshot::channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(None);
        let poller = Self {
            id: id.into(),
            source,
            events,
            interval,
            snapshot: snapshot_tx,
            unmount: unmount_rx,
            transitioned: false,
        };
        (poller, PollerHandle::new(unmount_tx, snapshot_rx))
    }

    /// Creates the poller and spawns it on the current runtime.
    pub fn mount(id: impl Into<TransactionId>, source: S, events: EventSink, config: PollerConfig) -> PollerHandle {
        let (poller, mut handle) = Self::new(id, source, events, config);
        handle.attach(tokio::spawn(poller.run()));
        handle
    }

    #[instrument(name = "status_poller", skip(self), fields(transaction_id = %self.id))]
    pub async fn run(mut self) -> PollerExit {
        info!(interval_ms = self.interval.as_millis() as u64, "Poller mounted");
        let exit = self.poll_until_done().await;
        info!(exit = ?exit, "Poller stopped");
        exit
    }

    async fn poll_until_done(&mut self) -> PollerExit {
        match self.fetch().await {
            None => return PollerExit::Unmounted,
            Some(Ok(transaction)) => {
                if let Some(exit) = self.apply(transaction) {
                    return exit;
                }
            }
            Some(Err(e)) if !e.is_transient() => return PollerExit::Unauthorized,
            Some(Err(e)) => {
                error!(error = %e, "Initial transaction load failed");
                self.events.notify(Notice::load_failed(&e));
                self.events.navigate(Route::Home);
                return PollerExit::InitialLoadFailed;
            }
        }

        let Some(first_tick) = Instant::now().checked_add(self.interval) else {
            error!(interval_ms = self.interval.as_millis() as u64, "Poll interval overflows the clock");
            return PollerExit::Failed("poll interval out of range".to_string());
        };
        let mut ticker = time::interval_at(first_tick, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = &mut self.unmount => return PollerExit::Unmounted,
                _ = ticker.tick() => {}
            }

            match self.fetch().await {
                None => return PollerExit::Unmounted,
                Some(Ok(transaction)) => {
                    if let Some(exit) = self.apply(transaction) {
                        return exit;
                    }
                }
                Some(Err(e)) if e.is_transient() => warn!(error = %e, "Poll failed; retrying on next tick"),
                Some(Err(_)) => return PollerExit::Unauthorized,
            }
        }
    }

    /// One fetch, abandoned if unmount arrives first.
    async fn fetch(&mut self) -> Option<Result<Transaction, ApiError>> {
        tokio::select! {
            biased;
            _ = &mut self.unmount => None,
            result = self.source.fetch_transaction(&self.id) => Some(result),
        }
    }

    /// Publishes a fetched snapshot and, if its status is terminal, fires the
    /// transition. Returns the exit reason when polling should stop.
    pub(crate) fn apply(&mut self, transaction: Transaction) -> Option<PollerExit> {
        let status = transaction.status.clone();
        let previous = self.snapshot.borrow().as_ref().map(|t| t.status.clone());
        if previous.as_ref() != Some(&status) {
            info!(from = ?previous.as_ref().map(TransactionStatus::as_str), to = %status, "Status changed");
        }

        let changed = self.snapshot.send_if_modified(|current| {
            if current.as_ref() == Some(&transaction) {
                false
            } else {
                *current = Some(transaction.clone());
                true
            }
        });
        if changed {
            self.events.render(transaction);
        }

        let action = action_for(&self.id, &status);
        if !action.is_terminal() {
            debug!(status = %status, "Still awaiting");
            return None;
        }

        self.transition(&status, action);
        Some(PollerExit::Transitioned(status))
    }

    fn transition(&mut self, status: &TransactionStatus, action: StatusAction) {
        if self.transitioned {
            debug!(status = %status, "Transition already fired; ignoring");
            return;
        }
        self.transitioned = true;

        match action {
            StatusAction::KeepPolling => {}
            StatusAction::Navigate(route) => self.events.navigate(route),
            StatusAction::Notify(notice) => self.events.notify(notice),
            StatusAction::NotifyThenNavigate(notice, route) => {
                self.events.notify(notice);
                self.events.navigate(route);
            }
            StatusAction::Stop => info!(status = %status, "Unrecognized status; stopping without action"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{self, UiEvent};
    use crate::mock_framework::{create_mock_source, transaction_with_status};

    #[tokio::test]
    async fn transition_fires_at_most_once() {
        let (source, _requests) = create_mock_source(4);
        let (sink, mut stream) = events::channel();
        let (mut poller, _handle) = StatusPoller::new("9", source, sink, PollerConfig::default());

        let first = poller.apply(transaction_with_status("9", TransactionStatus::Confirmed));
        let second = poller.apply(transaction_with_status("9", TransactionStatus::Confirmed));

        assert_eq!(first, Some(PollerExit::Transitioned(TransactionStatus::Confirmed)));
        assert_eq!(second, Some(PollerExit::Transitioned(TransactionStatus::Confirmed)));
        let navigations: Vec<_> = events::drain(&mut stream)
            .into_iter()
            .filter(|e| matches!(e, UiEvent::Navigate(_)))
            .collect();
        assert_eq!(navigations, vec![UiEvent::Navigate(Route::Accepted(TransactionId::new("9")))]);
    }

    #[tokio::test]
    async fn identical_snapshots_render_once() {
        let (source, _requests) = create_mock_source(4);
        let (sink, mut stream) = events::channel();
        let (mut poller, handle) = StatusPoller::new("9", source, sink, PollerConfig::default());

        assert_eq!(poller.apply(transaction_with_status("9", TransactionStatus::Pending)), None);
        assert_eq!(poller.apply(transaction_with_status("9", TransactionStatus::Pending)), None);
        assert_eq!(poller.apply(transaction_with_status("9", TransactionStatus::Paid)), None);

        let renders = events::drain(&mut stream);
        assert_eq!(renders.len(), 2);
        assert_eq!(handle.current().map(|t| t.status), Some(TransactionStatus::Paid));
    }

    #[tokio::test]
    async fn out_of_range_intervals_are_clamped() {
        for (requested, expected) in [
            (Duration::ZERO, MIN_POLL_INTERVAL),
            (Duration::MAX, MAX_POLL_INTERVAL),
            (Duration::from_secs(3), Duration::from_secs(3)),
        ] {
            let (source, _requests) = create_mock_source(1);
            let (sink, _stream) = events::channel();
            let (poller, _handle) = StatusPoller::new("9", source, sink, PollerConfig { interval: requested });
            assert_eq!(poller.interval, expected);
        }
    }
}
