use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A miscellaneous cash outflow recorded during an open register session.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Expenditure {
    pub id: String,
    pub register_id: String,
    pub category: String,
    pub description: String,
    pub amount: i64,
    pub spent_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Expenditure {
    pub fn new(
        register_id: String,
        category: String,
        description: String,
        amount: i64,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            register_id,
            category,
            description,
            amount,
            spent_at: Utc::now(),
            notes,
        }
    }
}
