use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::AppResult,
    models::{NewStock, Stock, StockResponse},
    AppState,
};

/// Decodes a stock body whatever the request's `Content-Type` says.
fn decode_stock(body: Result<Bytes, BytesRejection>) -> AppResult<NewStock> {
    Ok(serde_json::from_slice(&body?)?)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_stock(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, Json<StockResponse>)> {
    let payload = decode_stock(body)?;
    let id = state.store.insert(&payload).await?;

    info!(id, name = %payload.name, "Created stock");

    Ok((StatusCode::OK, Json(StockResponse::created(id))))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

/// An id that matches nothing yields the empty stock with 200, not a 404.
pub async fn get_stock(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<Stock>)> {
    let Path(id) = id?;
    let stock = match state.store.fetch_one(id).await? {
        Some(stock) => {
            info!(id, "Fetched stock");
            stock
        }
        None => {
            info!(id, "No stock found, returning empty record");
            Stock::default()
        }
    };

    Ok((StatusCode::OK, Json(stock)))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_stocks(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Stock>>)> {
    let stocks = state.store.fetch_all().await?;

    info!(count = stocks.len(), "Listed stocks");

    Ok((StatusCode::OK, Json(stocks)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_stock(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, Json<StockResponse>)> {
    let Path(id) = id?;
    let payload = decode_stock(body)?;
    let rows_affected = state.store.update(id, &payload).await?;

    info!(id, rows_affected, "Updated stock");

    Ok((StatusCode::OK, Json(StockResponse::updated(id, rows_affected))))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_stock(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<StockResponse>)> {
    let Path(id) = id?;
    let rows_affected = state.store.delete(id).await?;

    info!(id, rows_affected, "Deleted stock");

    Ok((StatusCode::OK, Json(StockResponse::deleted(id, rows_affected))))
}
