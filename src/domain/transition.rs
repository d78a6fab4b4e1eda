use super::route::{Notice, Route};
use super::status::TransactionStatus;
use super::transaction::TransactionId;

/// What the waiting screen does after a fetch reports `status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusAction {
    /// Still awaiting payment or acceptance; keep the timer running.
    KeepPolling,
    Navigate(Route),
    Notify(Notice),
    NotifyThenNavigate(Notice, Route),
    /// Terminal, but nothing specific to do (statuses this client does not know).
    Stop,
}

impl StatusAction {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::KeepPolling)
    }
}

/// The status table of the waiting screen. Exhaustive over
/// [`TransactionStatus`], so a new variant cannot go unhandled.
pub fn action_for(id: &TransactionId, status: &TransactionStatus) -> StatusAction {
    match status {
        TransactionStatus::Pending | TransactionStatus::Paid => StatusAction::KeepPolling,
        TransactionStatus::Confirmed | TransactionStatus::Processing => {
            StatusAction::Navigate(Route::Accepted(id.clone()))
        }
        TransactionStatus::Shipped => StatusAction::Notify(Notice::shipped()),
        TransactionStatus::Delivered => StatusAction::Notify(Notice::delivered()),
        TransactionStatus::Cancelled => StatusAction::NotifyThenNavigate(Notice::cancelled(), Route::Home),
        TransactionStatus::Unknown(_) => StatusAction::Stop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(raw: &str) -> StatusAction {
        action_for(&TransactionId::new("7"), &TransactionStatus::parse(raw))
    }

    #[test]
    fn awaiting_statuses_keep_polling() {
        assert_eq!(action("pending"), StatusAction::KeepPolling);
        assert_eq!(action("paid"), StatusAction::KeepPolling);
        assert!(!action("paid").is_terminal());
    }

    #[test]
    fn accepted_statuses_navigate_to_accepted_view() {
        let expected = StatusAction::Navigate(Route::Accepted(TransactionId::new("7")));
        assert_eq!(action("confirmed"), expected);
        assert_eq!(action("processing"), expected);
    }

    #[test]
    fn fulfillment_statuses_notify() {
        assert_eq!(action("shipped"), StatusAction::Notify(Notice::shipped()));
        assert_eq!(action("delivered"), StatusAction::Notify(Notice::delivered()));
        assert_eq!(
            action("cancelled"),
            StatusAction::NotifyThenNavigate(Notice::cancelled(), Route::Home)
        );
    }

    #[test]
    fn unknown_status_is_terminal_without_side_effects() {
        assert_eq!(action("archived"), StatusAction::Stop);
        assert!(action("archived").is_terminal());
    }
}
