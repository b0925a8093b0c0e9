//! In-process `StockStore` doubles for handler tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::StockStore;
use crate::error::{AppError, AppResult};
use crate::models::{NewStock, Stock};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Stock>,
}

/// Mimics a `BIGSERIAL` table: ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryStockStore {
    table: Mutex<Table>,
}

impl MemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StockStore for MemoryStockStore {
    async fn insert(&self, payload: &NewStock) -> AppResult<i64> {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let id = table.next_id;
        table.rows.insert(
            id,
            Stock {
                stock_id: id,
                name: payload.name.clone(),
                price: payload.price,
                company: payload.company.clone(),
            },
        );
        Ok(id)
    }

    async fn fetch_one(&self, id: i64) -> AppResult<Option<Stock>> {
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn fetch_all(&self) -> AppResult<Vec<Stock>> {
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, payload: &NewStock) -> AppResult<u64> {
        let mut table = self.table.lock().unwrap();
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.name = payload.name.clone();
                row.price = payload.price;
                row.company = payload.company.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        Ok(self.table.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }
}

/// Fails every call the way an unreachable database would.
pub struct FailingStockStore;

fn unreachable_db() -> AppError {
    AppError::Database(sqlx::Error::Protocol("connection refused".to_string()))
}

#[async_trait]
impl StockStore for FailingStockStore {
    async fn insert(&self, _payload: &NewStock) -> AppResult<i64> {
        Err(unreachable_db())
    }

    async fn fetch_one(&self, _id: i64) -> AppResult<Option<Stock>> {
        Err(unreachable_db())
    }

    async fn fetch_all(&self) -> AppResult<Vec<Stock>> {
        Err(unreachable_db())
    }

    async fn update(&self, _id: i64, _payload: &NewStock) -> AppResult<u64> {
        Err(unreachable_db())
    }

    async fn delete(&self, _id: i64) -> AppResult<u64> {
        Err(unreachable_db())
    }
}
