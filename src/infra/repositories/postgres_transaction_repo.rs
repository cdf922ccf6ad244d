use crate::domain::{models::transaction::Transaction, ports::TransactionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const COLS: &str = "id, kind, category, description, amount, occurred_at, member_id";

pub struct PostgresTransactionRepo {
    pool: PgPool,
}

impl PostgresTransactionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepo {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError> {
        sqlx::query_as::<_, Transaction>(&format!(
            "INSERT INTO transactions ({COLS}) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLS}"
        ))
            .bind(&transaction.id)
            .bind(&transaction.kind)
            .bind(&transaction.category)
            .bind(&transaction.description)
            .bind(transaction.amount)
            .bind(transaction.occurred_at)
            .bind(&transaction.member_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Transaction>, AppError> {
        sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {COLS} FROM transactions ORDER BY occurred_at DESC"
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_kind(&self, kind: &str) -> Result<Vec<Transaction>, AppError> {
        sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {COLS} FROM transactions WHERE kind = $1 ORDER BY occurred_at DESC"
        ))
            .bind(kind)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn monthly_balance(&self, month: i32, year: i32) -> Result<(i64, i64), AppError> {
        let (income, expense): (i64, i64) = sqlx::query_as(
            "SELECT \
                COALESCE(SUM(CASE WHEN kind = 'income' THEN amount ELSE 0 END), 0)::BIGINT, \
                COALESCE(SUM(CASE WHEN kind = 'expense' THEN amount ELSE 0 END), 0)::BIGINT \
             FROM transactions \
             WHERE EXTRACT(MONTH FROM occurred_at) = $1 AND EXTRACT(YEAR FROM occurred_at) = $2",
        )
            .bind(month)
            .bind(year)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok((income, expense))
    }
}
