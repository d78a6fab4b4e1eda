//! # Mock Framework
//!
//! Utilities for testing the poller without a backend.
//!
//! Use [`create_mock_source`] to get a source and a receiver.
//! Then use [`expect_fetch`] or [`respond_next`] to drive each fetch.

use tokio::sync::{mpsc, oneshot};

use crate::api::{ApiError, TransactionSource};
use crate::domain::{Transaction, TransactionId, TransactionStatus};

/// A fetch the code under test issued, waiting for the test to answer it.
#[derive(Debug)]
pub struct FetchRequest {
    pub id: TransactionId,
    pub respond_to: oneshot::Sender<Result<Transaction, ApiError>>,
}

/// `TransactionSource` that forwards every fetch to a channel the test owns.
///
/// # Testing Strategy
/// Each fetch becomes a [`FetchRequest`] on the receiver. The test decides
/// what each one returns (a snapshot, a transient error, a 401) and when, and
/// can count how many fetches were made. Once the code under test drops the
/// source the receiver yields `None`, which is how "no further fetches" is
/// asserted.
#[derive(Clone)]
pub struct MockTransactionSource {
    sender: mpsc::Sender<FetchRequest>,
}

impl TransactionSource for MockTransactionSource {
    async fn fetch_transaction(&self, id: &TransactionId) -> Result<Transaction, ApiError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FetchRequest { id: id.clone(), respond_to })
            .await
            .map_err(|_| ApiError::Rejected("mock source closed".to_string()))?;
        response
            .await
            .map_err(|_| ApiError::Rejected("mock responder dropped".to_string()))?
    }
}

/// Creates a mock source and a receiver for asserting fetches.
pub fn create_mock_source(buffer_size: usize) -> (MockTransactionSource, mpsc::Receiver<FetchRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MockTransactionSource { sender }, receiver)
}

/// Helper to wait for the next fetch.
pub async fn expect_fetch(receiver: &mut mpsc::Receiver<FetchRequest>) -> Option<FetchRequest> {
    receiver.recv().await
}

/// Answers the next fetch with `result` and returns the id it asked for.
pub async fn respond_next(
    receiver: &mut mpsc::Receiver<FetchRequest>,
    result: Result<Transaction, ApiError>,
) -> TransactionId {
    let request = expect_fetch(receiver).await.expect("Expected a fetch");
    let _ = request.respond_to.send(result);
    request.id
}

pub fn transaction_with_status(id: &str, status: TransactionStatus) -> Transaction {
    Transaction::new(id, status, 250_000.0)
}

/// A 503 standing in for any transient network or server failure.
pub fn transient_failure() -> ApiError {
    ApiError::Status {
        status: 503,
        message: "upstream unavailable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source() {
        let (source, mut receiver) = create_mock_source(10);

        let fetch_task = tokio::spawn(async move { source.fetch_transaction(&TransactionId::new("tx_1")).await });

        let id = respond_next(&mut receiver, Ok(transaction_with_status("tx_1", TransactionStatus::Paid))).await;
        assert_eq!(id.as_str(), "tx_1");

        let result = fetch_task.await.unwrap().unwrap();
        assert_eq!(result.status, TransactionStatus::Paid);
        assert!(receiver.recv().await.is_none());
    }
}
