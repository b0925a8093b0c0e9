use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::error::AppResult;
use crate::models::*;

#[cfg(test)]
pub mod memory;

/// CRUD access to the `stocks` table.
///
/// `fetch_one` reports a missing row as `None`; callers decide how to
/// present that.
#[async_trait]
pub trait StockStore: Send + Sync {
    async fn insert(&self, payload: &NewStock) -> AppResult<i64>;
    async fn fetch_one(&self, id: i64) -> AppResult<Option<Stock>>;
    async fn fetch_all(&self) -> AppResult<Vec<Stock>>;
    async fn update(&self, id: i64, payload: &NewStock) -> AppResult<u64>;
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// PostgreSQL-backed store. Each call borrows a connection from the shared
/// pool for the duration of one statement.
#[derive(Clone)]
pub struct PgStockStore {
    pool: PgPool,
}

impl PgStockStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn insert(&self, payload: &NewStock) -> AppResult<i64> {
        insert_stock(&self.pool, payload).await
    }

    async fn fetch_one(&self, id: i64) -> AppResult<Option<Stock>> {
        fetch_stock_by_id(&self.pool, id).await
    }

    async fn fetch_all(&self) -> AppResult<Vec<Stock>> {
        fetch_all_stocks(&self.pool).await
    }

    async fn update(&self, id: i64, payload: &NewStock) -> AppResult<u64> {
        update_stock(&self.pool, id, payload).await
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        delete_stock(&self.pool, id).await
    }
}

// ── Stocks ────────────────────────────────────────────────────────────────────

pub async fn insert_stock(pool: &PgPool, payload: &NewStock) -> AppResult<i64> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid",
    )
    .bind(&payload.name)
    .bind(payload.price)
    .bind(&payload.company)
    .fetch_one(pool)
    .await?;

    debug!(id, "Inserted stock row");
    Ok(id)
}

pub async fn fetch_stock_by_id(pool: &PgPool, id: i64) -> AppResult<Option<Stock>> {
    let stock = sqlx::query_as::<_, Stock>(
        "SELECT stockid, name, price, company FROM stocks WHERE stockid = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if stock.is_none() {
        debug!(id, "No stock row matched");
    }
    Ok(stock)
}

/// No ORDER BY: rows come back in whatever order the table yields them.
pub async fn fetch_all_stocks(pool: &PgPool) -> AppResult<Vec<Stock>> {
    let stocks = sqlx::query_as::<_, Stock>("SELECT stockid, name, price, company FROM stocks")
        .fetch_all(pool)
        .await?;
    Ok(stocks)
}

pub async fn update_stock(pool: &PgPool, id: i64, payload: &NewStock) -> AppResult<u64> {
    let result = sqlx::query(
        r#"
        UPDATE stocks
        SET name    = $2,
            price   = $3,
            company = $4
        WHERE stockid = $1
        "#,
    )
    .bind(id)
    .bind(&payload.name)
    .bind(payload.price)
    .bind(&payload.company)
    .execute(pool)
    .await?;

    debug!(id, rows_affected = result.rows_affected(), "Updated stock row");
    Ok(result.rows_affected())
}

pub async fn delete_stock(pool: &PgPool, id: i64) -> AppResult<u64> {
    let result = sqlx::query("DELETE FROM stocks WHERE stockid = $1")
        .bind(id)
        .execute(pool)
        .await?;

    debug!(id, rows_affected = result.rows_affected(), "Deleted stock row");
    Ok(result.rows_affected())
}
