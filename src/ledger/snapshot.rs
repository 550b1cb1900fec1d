use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::TransactionRecord;

/// Caller-supplied view of one account: its starting balance and every
/// transaction it owns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashflowSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub starting_balance: Decimal,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

impl CashflowSnapshot {
    pub fn new(starting_balance: Decimal) -> Self {
        Self {
            name: None,
            starting_balance,
            transactions: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn add_transaction(&mut self, transaction: TransactionRecord) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}
