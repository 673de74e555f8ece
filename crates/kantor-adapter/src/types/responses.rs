/*
[INPUT]:  Backend JSON schema and serde requirements
[OUTPUT]: Typed Rust response envelopes with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::Transaction;

/// Result of a successful login
#[derive(Debug, Clone, PartialEq)]
pub struct LoginResponse {
    /// Token found in the payload and saved to the credential store
    pub token: String,
    /// Payload as returned by the backend
    pub raw: Value,
}

/// Transaction history in any of the shapes the backend uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionPage {
    List(Vec<Transaction>),
    Items { items: Vec<Transaction> },
    Data { data: Vec<Transaction> },
}

impl TransactionPage {
    pub fn into_items(self) -> Vec<Transaction> {
        match self {
            TransactionPage::List(items)
            | TransactionPage::Items { items }
            | TransactionPage::Data { data: items } => items,
        }
    }
}
