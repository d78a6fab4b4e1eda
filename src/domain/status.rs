use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fulfillment state of a transaction as reported by the backend.
///
/// Parsing never fails: anything outside the known set is kept verbatim in
/// [`TransactionStatus::Unknown`] so a status introduced by the backend later
/// still reaches the screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Pending,
    Paid,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Unknown(String),
}

impl TransactionStatus {
    /// Case-insensitive parse of a raw status string.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "paid" => Self::Paid,
            "confirmed" => Self::Confirmed,
            "processing" => Self::Processing,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Unknown(raw) => raw,
        }
    }

    /// True while the order is still waiting on payment or acceptance.
    /// Everything else is terminal from the waiting screen's point of view.
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Pending | Self::Paid)
    }
}

impl From<String> for TransactionStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for TransactionStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        match status {
            TransactionStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
