use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const METHOD_CASH: &str = "cash";
pub const METHOD_CARD: &str = "card";
pub const METHOD_TRANSFER: &str = "transfer";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Payment {
    pub id: String,
    pub member_id: String,
    pub register_id: Option<String>,
    pub amount: i64,
    pub method: String,
    pub paid_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Payment {
    pub fn new(
        member_id: String,
        register_id: Option<String>,
        amount: i64,
        method: String,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            register_id,
            amount,
            method,
            paid_at: Utc::now(),
            notes,
        }
    }
}

pub fn is_valid_method(method: &str) -> bool {
    matches!(method, METHOD_CASH | METHOD_CARD | METHOD_TRANSFER)
}
