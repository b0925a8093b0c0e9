use serde::{Deserialize, Serialize};

/// A persisted stock row. `Default` is the empty stock returned for ids
/// that match nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, sqlx::FromRow)]
pub struct Stock {
    #[serde(rename = "stockid")]
    #[sqlx(rename = "stockid")]
    pub stock_id: i64,
    pub name: String,
    pub price: f64,
    pub company: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of create and update requests. Any `stockid` key in the body is
/// ignored; the id always comes from the store or the path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewStock {
    pub name: String,
    pub price: f64,
    pub company: String,
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockResponse {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}

impl StockResponse {
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "Stock Created Successfully".to_string(),
        }
    }

    pub fn updated(id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "Stock updated successfully. Total rows/record affected {}",
                rows_affected
            ),
        }
    }

    pub fn deleted(id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "Stock deleted successfully. Total rows/record affected {}",
                rows_affected
            ),
        }
    }
}
