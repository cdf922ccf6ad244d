use crate::domain::{models::expenditure::Expenditure, ports::ExpenditureRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const COLS: &str = "id, register_id, category, description, amount, spent_at, notes";

pub struct SqliteExpenditureRepo {
    pool: SqlitePool,
}

impl SqliteExpenditureRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenditureRepository for SqliteExpenditureRepo {
    async fn create(&self, expenditure: &Expenditure) -> Result<Expenditure, AppError> {
        sqlx::query_as::<_, Expenditure>(&format!(
            "INSERT INTO expenditures ({COLS}) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {COLS}"
        ))
            .bind(&expenditure.id)
            .bind(&expenditure.register_id)
            .bind(&expenditure.category)
            .bind(&expenditure.description)
            .bind(expenditure.amount)
            .bind(expenditure.spent_at)
            .bind(&expenditure.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Expenditure>, AppError> {
        sqlx::query_as::<_, Expenditure>(&format!(
            "SELECT {COLS} FROM expenditures ORDER BY spent_at DESC"
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_register(&self, register_id: &str) -> Result<Vec<Expenditure>, AppError> {
        sqlx::query_as::<_, Expenditure>(&format!(
            "SELECT {COLS} FROM expenditures WHERE register_id = ? ORDER BY spent_at DESC"
        ))
            .bind(register_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn total_by_register(&self, register_id: &str) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0) FROM expenditures WHERE register_id = ?",
        )
            .bind(register_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(total)
    }
}
