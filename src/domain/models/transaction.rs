use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const KIND_INCOME: &str = "income";
pub const KIND_EXPENSE: &str = "expense";

/// A general-ledger entry independent of the register/payment flow.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Transaction {
    pub id: String,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: i64,
    pub occurred_at: DateTime<Utc>,
    pub member_id: Option<String>,
}

impl Transaction {
    pub fn new(
        kind: String,
        category: String,
        description: String,
        amount: i64,
        occurred_at: DateTime<Utc>,
        member_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            category,
            description,
            amount,
            occurred_at,
            member_id,
        }
    }
}

pub fn is_valid_kind(kind: &str) -> bool {
    matches!(kind, KIND_INCOME | KIND_EXPENSE)
}
