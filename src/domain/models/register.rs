use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const STATUS_OPEN: &str = "open";
pub const STATUS_CLOSED: &str = "closed";

/// A bounded cash-register work shift (caja). Opened with a float, collects
/// payments and expenditures, and is reconciled at close. The storage layer
/// enforces that at most one row is `open` at a time via a partial unique
/// index, so a concurrent second open fails as a constraint violation.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct RegisterSession {
    pub id: String,
    pub operator_id: String,
    pub opening_float: i64,
    pub opened_at: DateTime<Utc>,
    pub status: String,
    pub closed_at: Option<DateTime<Utc>>,
    pub cash_total: Option<i64>,
    pub card_total: Option<i64>,
    pub transfer_total: Option<i64>,
    pub expected_cash: Option<i64>,
    pub counted_cash: Option<i64>,
    pub variance: Option<i64>,
    pub opening_notes: Option<String>,
    pub closing_notes: Option<String>,
}

impl RegisterSession {
    pub fn open(operator_id: String, opening_float: i64, opening_notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            operator_id,
            opening_float,
            opened_at: Utc::now(),
            status: STATUS_OPEN.to_string(),
            closed_at: None,
            cash_total: None,
            card_total: None,
            transfer_total: None,
            expected_cash: None,
            counted_cash: None,
            variance: None,
            opening_notes,
            closing_notes: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == STATUS_OPEN
    }
}
