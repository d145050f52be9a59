use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::db::transaction_queries;
use crate::errors::AppError;
use crate::models::{CreateTransaction, Transaction, TransactionFilter, UpdateTransaction};

pub async fn fetch_filtered(
    pool: &PgPool,
    filter: &TransactionFilter,
) -> Result<Vec<Transaction>, AppError> {
    let transactions = transaction_queries::search(pool, filter).await?;
    Ok(transactions)
}

pub async fn fetch_one(pool: &PgPool, id: i64) -> Result<Transaction, AppError> {
    let transaction = transaction_queries::fetch_one(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))?;
    Ok(transaction)
}

pub async fn create(pool: &PgPool, data: CreateTransaction) -> Result<Transaction, AppError> {
    let transaction = transaction_queries::insert(pool, data).await?;
    Ok(transaction)
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: UpdateTransaction,
) -> Result<Transaction, AppError> {
    let transaction = transaction_queries::update(pool, id, data)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))?;
    Ok(transaction)
}

// Deleting an id that was never stored is a no-op, not an error.
pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, AppError> {
    let removed = transaction_queries::delete(pool, id).await?;
    Ok(removed)
}

pub async fn report_by_type(
    pool: &PgPool,
) -> Result<BTreeMap<String, Vec<Transaction>>, AppError> {
    let transactions = transaction_queries::fetch_all(pool).await?;
    Ok(group_by(transactions, |t| t.tx_type.clone()))
}

pub async fn report_by_product(
    pool: &PgPool,
) -> Result<BTreeMap<String, Vec<Transaction>>, AppError> {
    let transactions = transaction_queries::fetch_all(pool).await?;
    Ok(group_by(transactions, |t| t.product.clone()))
}

// Grouping is an exact match on the key, unlike the substring filter.
// Group lists keep the scan order of the input.
fn group_by<F>(transactions: Vec<Transaction>, key: F) -> BTreeMap<String, Vec<Transaction>>
where
    F: Fn(&Transaction) -> String,
{
    let mut groups: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();
    for transaction in transactions {
        groups.entry(key(&transaction)).or_default().push(transaction);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(id: i64, product: &str, tx_type: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            product: product.into(),
            tx_type: tx_type.into(),
            amount,
        }
    }

    #[test]
    fn grouping_partitions_every_record_exactly_once() {
        let transactions = vec![
            transaction(1, "Oil", "BUY", 500.0),
            transaction(2, "Gas", "SELL", 120.0),
            transaction(3, "Oil", "BUY", 75.5),
            transaction(4, "Coal", "SELL", 300.0),
        ];

        let groups = group_by(transactions.clone(), |t| t.tx_type.clone());

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, transactions.len());
        for (key, members) in &groups {
            for member in members {
                assert_eq!(&member.tx_type, key);
            }
        }
    }

    #[test]
    fn grouping_by_product_uses_the_product_as_the_key() {
        let transactions = vec![
            transaction(1, "Oil", "BUY", 500.0),
            transaction(2, "Gas", "SELL", 120.0),
            transaction(3, "Oil", "SELL", 75.5),
        ];

        let groups = group_by(transactions, |t| t.product.clone());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Oil"].len(), 2);
        assert_eq!(groups["Gas"].len(), 1);
    }

    #[test]
    fn grouping_preserves_scan_order_within_a_group() {
        let transactions = vec![
            transaction(1, "Oil", "BUY", 500.0),
            transaction(5, "Oil", "BUY", 10.0),
            transaction(3, "Oil", "BUY", 75.5),
        ];

        let groups = group_by(transactions, |t| t.tx_type.clone());

        let ids: Vec<i64> = groups["BUY"].iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 5, 3]);
    }

    #[test]
    fn grouping_keys_are_exact_matches_not_substrings() {
        let transactions = vec![
            transaction(1, "Oil", "BUY", 500.0),
            transaction(2, "Oil", "BUYBACK", 500.0),
        ];

        let groups = group_by(transactions, |t| t.tx_type.clone());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["BUY"].len(), 1);
        assert_eq!(groups["BUYBACK"].len(), 1);
    }

    #[test]
    fn grouping_an_empty_scan_yields_no_groups() {
        let groups = group_by(Vec::new(), |t: &Transaction| t.tx_type.clone());
        assert!(groups.is_empty());
    }
}
