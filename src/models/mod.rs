mod transaction;

pub use transaction::{CreateTransaction, Transaction, TransactionFilter, UpdateTransaction};
