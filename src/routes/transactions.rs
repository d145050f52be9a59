use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{CreateTransaction, Transaction, TransactionFilter, UpdateTransaction};
use crate::services::transaction_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_transaction).get(list_transactions))
        .route("/reports/type", get(report_by_type))
        .route("/reports/product", get(report_by_product))
        .route("/:id", get(get_transaction))
        .route("/:id", put(update_transaction))
        .route("/:id", delete(delete_transaction))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(filter): Query<TransactionFilter>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    info!("GET /transactions - Listing transactions");
    let transactions = transaction_service::fetch_filtered(&state.pool, &filter)
        .await
        .map_err(|e| {
            error!("Failed to list transactions: {}", e);
            e
        })?;
    Ok(Json(transactions))
}

pub async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, AppError> {
    info!("GET /transactions/{} - Fetching transaction", id);
    let transaction = transaction_service::fetch_one(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch transaction {}: {}", id, e);
            e
        })?;
    Ok(Json(transaction))
}

#[axum::debug_handler]
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(data): Json<CreateTransaction>,
) -> Result<Json<Transaction>, AppError> {
    info!("POST /transactions - Creating new transaction");
    let transaction = transaction_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create transaction: {}", e);
            e
        })?;
    Ok(Json(transaction))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateTransaction>,
) -> Result<Json<Transaction>, AppError> {
    info!("PUT /transactions/{} - Updating transaction", id);
    let transaction = transaction_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update transaction {}: {}", id, e);
            e
        })?;
    Ok(Json(transaction))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<()>, AppError> {
    info!("DELETE /transactions/{} - Deleting transaction", id);
    let removed = transaction_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete transaction {}: {}", id, e);
            e
        })?;
    if removed == 0 {
        info!("DELETE /transactions/{} - Nothing to delete", id);
    }
    Ok(Json(()))
}

pub async fn report_by_type(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<Transaction>>>, AppError> {
    info!("GET /transactions/reports/type - Grouping transactions by type");
    let report = transaction_service::report_by_type(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to build type report: {}", e);
            e
        })?;
    Ok(Json(report))
}

pub async fn report_by_product(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, Vec<Transaction>>>, AppError> {
    info!("GET /transactions/reports/product - Grouping transactions by product");
    let report = transaction_service::report_by_product(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to build product report: {}", e);
            e
        })?;
    Ok(Json(report))
}
