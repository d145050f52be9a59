use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Represents a single buy or sell event on a product. `type` is
// conventionally "BUY" or "SELL" but any string is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub product: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub tx_type: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransaction {
    pub product: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTransaction {
    pub product: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub amount: f64,
}

// Query parameters for the filtered listing. An absent parameter falls
// back to a filter that matches everything up to 1,000,000.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionFilter {
    #[serde(default)]
    pub product: String,
    #[serde(rename = "type", default)]
    pub tx_type: String,
    #[serde(rename = "minAmount", default)]
    pub min_amount: f64,
    #[serde(rename = "maxAmount", default = "default_max_amount")]
    pub max_amount: f64,
}

fn default_max_amount() -> f64 {
    1_000_000.0
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            product: String::new(),
            tx_type: String::new(),
            min_amount: 0.0,
            max_amount: default_max_amount(),
        }
    }
}
