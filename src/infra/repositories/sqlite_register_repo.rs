use crate::domain::{models::register::RegisterSession, ports::RegisterRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

const COLS: &str = "id, operator_id, opening_float, opened_at, status, closed_at, cash_total, \
                    card_total, transfer_total, expected_cash, counted_cash, variance, \
                    opening_notes, closing_notes";

pub struct SqliteRegisterRepo {
    pool: SqlitePool,
}

impl SqliteRegisterRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegisterRepository for SqliteRegisterRepo {
    async fn create(&self, session: &RegisterSession) -> Result<RegisterSession, AppError> {
        // The `idx_registers_single_open` partial index rejects a second
        // open row; the violation surfaces as a 409.
        sqlx::query_as::<_, RegisterSession>(&format!(
            "INSERT INTO registers (id, operator_id, opening_float, opened_at, status, opening_notes) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {COLS}"
        ))
            .bind(&session.id)
            .bind(&session.operator_id)
            .bind(session.opening_float)
            .bind(session.opened_at)
            .bind(&session.status)
            .bind(&session.opening_notes)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<RegisterSession>, AppError> {
        sqlx::query_as::<_, RegisterSession>(&format!(
            "SELECT {COLS} FROM registers WHERE id = ?"
        ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_open(&self) -> Result<Option<RegisterSession>, AppError> {
        sqlx::query_as::<_, RegisterSession>(&format!(
            "SELECT {COLS} FROM registers WHERE status = 'open' ORDER BY opened_at DESC LIMIT 1"
        ))
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<RegisterSession>, AppError> {
        sqlx::query_as::<_, RegisterSession>(&format!(
            "SELECT {COLS} FROM registers ORDER BY opened_at DESC"
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RegisterSession>, AppError> {
        sqlx::query_as::<_, RegisterSession>(&format!(
            "SELECT {COLS} FROM registers WHERE DATE(opened_at) BETWEEN DATE(?) AND DATE(?) ORDER BY opened_at DESC"
        ))
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn close(&self, session: &RegisterSession) -> Result<Option<RegisterSession>, AppError> {
        // The status guard makes racing closes lose instead of overwriting
        // the first snapshot.
        sqlx::query_as::<_, RegisterSession>(&format!(
            "UPDATE registers SET status = ?, closed_at = ?, cash_total = ?, card_total = ?, \
             transfer_total = ?, expected_cash = ?, counted_cash = ?, variance = ?, \
             closing_notes = ? WHERE id = ? AND status = 'open' RETURNING {COLS}"
        ))
            .bind(&session.status)
            .bind(session.closed_at)
            .bind(session.cash_total)
            .bind(session.card_total)
            .bind(session.transfer_total)
            .bind(session.expected_cash)
            .bind(session.counted_cash)
            .bind(session.variance)
            .bind(&session.closing_notes)
            .bind(&session.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
