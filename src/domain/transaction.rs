use std::fmt;

use serde::{Deserialize, Serialize};

use super::status::TransactionStatus;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Declares an opaque backend identifier. The backend hands out both numeric
/// and string ids, so either JSON form is accepted and kept as text.
macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifier of an order record.
    TransactionId
);
opaque_id!(
    /// Identifier of a catalog product referenced by a line item.
    ProductId
);

/// One ordered product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(alias = "productId")]
    pub product_id: ProductId,
    #[serde(default, alias = "productName")]
    pub product_name: Option<String>,
    pub quantity: u32,
    #[serde(alias = "unitPrice", alias = "price")]
    pub unit_price: f64,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Read-only snapshot of a customer order as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub status: TransactionStatus,
    #[serde(alias = "totalAmount", alias = "total")]
    pub total_amount: f64,
    #[serde(default, alias = "customerName")]
    pub customer_name: Option<String>,
    #[serde(default, alias = "customerEmail")]
    pub customer_email: Option<String>,
    #[serde(default, alias = "customerPhone")]
    pub customer_phone: Option<String>,
    #[serde(default, alias = "orderItems")]
    pub items: Vec<LineItem>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl Transaction {
    /// Builds a bare transaction with no customer details or items.
    pub fn new(id: impl Into<TransactionId>, status: TransactionStatus, total_amount: f64) -> Self {
        Self {
            id: id.into(),
            status,
            total_amount,
            customer_name: None,
            customer_email: None,
            customer_phone: None,
            items: Vec::new(),
            created_at: None,
        }
    }

    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }
}
