use std::future::Future;

use tracing::{debug, instrument};

use super::error::ApiError;
use super::http_client::ApiClient;
use crate::domain::{Transaction, TransactionId};

/// Anything the status poller can fetch a transaction from.
pub trait TransactionSource: Send + Sync + 'static {
    fn fetch_transaction(
        &self,
        id: &TransactionId,
    ) -> impl Future<Output = Result<Transaction, ApiError>> + Send;
}

/// Client for the `/transactions` endpoints.
#[derive(Clone)]
pub struct TransactionClient {
    api: ApiClient,
}

impl TransactionClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(skip(self), fields(transaction_id = %id))]
    pub async fn get_transaction(&self, id: &TransactionId) -> Result<Transaction, ApiError> {
        let transaction: Transaction = self.api.get(&["transactions", id.as_str()]).await?;
        debug!(status = %transaction.status, "Transaction fetched");
        Ok(transaction)
    }
}

impl TransactionSource for TransactionClient {
    async fn fetch_transaction(&self, id: &TransactionId) -> Result<Transaction, ApiError> {
        self.get_transaction(id).await
    }
}
