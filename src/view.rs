//! Text rendering of the waiting screen.

use std::fmt;

use crate::domain::{StatusBadge, Transaction};

/// What the waiting screen shows for one snapshot.
pub struct TransactionView<'a> {
    transaction: &'a Transaction,
    badge: StatusBadge,
}

impl<'a> TransactionView<'a> {
    pub fn new(transaction: &'a Transaction) -> Self {
        Self {
            transaction,
            badge: transaction.status.badge(),
        }
    }

    pub fn badge(&self) -> &StatusBadge {
        &self.badge
    }
}

impl fmt::Display for TransactionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tx = self.transaction;
        writeln!(f, "Transaction #{}  [{}]", tx.id, self.badge.label)?;
        if tx.status.is_awaiting() {
            writeln!(f, "  Waiting for the workshop to confirm your order...")?;
        }
        if let Some(created_at) = &tx.created_at {
            writeln!(f, "  Placed: {created_at}")?;
        }

        let contact: Vec<&str> = [&tx.customer_name, &tx.customer_email, &tx.customer_phone]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .collect();
        if !contact.is_empty() {
            writeln!(f, "  Customer: {}", contact.join(", "))?;
        }

        for item in &tx.items {
            let name = item.product_name.as_deref().unwrap_or(item.product_id.as_str());
            writeln!(
                f,
                "  {:>3} x {:<30} {:>12.2} {:>12.2}",
                item.quantity,
                name,
                item.unit_price,
                item.subtotal()
            )?;
        }
        write!(f, "  Total: {:.2}", tx.total_amount)
    }
}
