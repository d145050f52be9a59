use sqlx::PgPool;

use crate::models::{CreateTransaction, Transaction, TransactionFilter, UpdateTransaction};

pub async fn insert(pool: &PgPool, data: CreateTransaction) -> Result<Transaction, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "INSERT INTO transactions (product, type, amount)
         VALUES ($1, $2, $3)
         RETURNING id, product, type, amount",
    )
    .bind(&data.product)
    .bind(&data.tx_type)
    .bind(data.amount)
    .fetch_one(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: i64) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT id, product, type, amount
         FROM transactions
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT id, product, type, amount
         FROM transactions
         ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

// STRPOS matches the filter text literally; an empty filter matches every
// row. The amount bounds are inclusive on both ends.
pub async fn search(
    pool: &PgPool,
    filter: &TransactionFilter,
) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT id, product, type, amount
         FROM transactions
         WHERE STRPOS(product, $1) > 0
           AND STRPOS(type, $2) > 0
           AND amount BETWEEN $3 AND $4
         ORDER BY id",
    )
    .bind(&filter.product)
    .bind(&filter.tx_type)
    .bind(filter.min_amount)
    .bind(filter.max_amount)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    data: UpdateTransaction,
) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "UPDATE transactions
         SET product = $1, type = $2, amount = $3
         WHERE id = $4
         RETURNING id, product, type, amount",
    )
    .bind(&data.product)
    .bind(&data.tx_type)
    .bind(data.amount)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
