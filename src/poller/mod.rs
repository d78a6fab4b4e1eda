//! Keeps one transaction's status fresh and fires its transition once.
//!
//! Split the way every actor in this crate is: [`StatusPoller`] owns the
//! state and runs in its own task, [`PollerHandle`] is what the screen holds.

pub mod actor;
pub mod handle;

pub use actor::*;
pub use handle::*;

use std::time::Duration;

use crate::domain::TransactionStatus;

/// Default period between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
/// Intervals are clamped into `MIN_POLL_INTERVAL..=MAX_POLL_INTERVAL`.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerConfig {
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Why a poller stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollerExit {
    /// A fetch reported a status outside the awaiting set.
    Transitioned(TransactionStatus),
    /// The handle was unmounted or dropped.
    Unmounted,
    /// The session was rejected; the user has been sent to login.
    Unauthorized,
    /// The first fetch failed; the user has been sent home.
    InitialLoadFailed,
    /// The poller task crashed or could not schedule its timer.
    Failed(String),
}
