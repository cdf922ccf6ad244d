use crate::domain::{models::reading::MeterReading, ports::ReadingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const COLS: &str = "id, member_id, previous_reading, current_reading, consumption, month, year, charge, reading_date, notes";

pub struct PostgresReadingRepo {
    pool: PgPool,
}

impl PostgresReadingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadingRepository for PostgresReadingRepo {
    async fn create(&self, reading: &MeterReading) -> Result<MeterReading, AppError> {
        sqlx::query_as::<_, MeterReading>(&format!(
            "INSERT INTO readings ({COLS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {COLS}"
        ))
            .bind(&reading.id)
            .bind(&reading.member_id)
            .bind(reading.previous_reading)
            .bind(reading.current_reading)
            .bind(reading.consumption)
            .bind(reading.month)
            .bind(reading.year)
            .bind(reading.charge)
            .bind(reading.reading_date)
            .bind(&reading.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<MeterReading>, AppError> {
        sqlx::query_as::<_, MeterReading>(&format!(
            "SELECT {COLS} FROM readings ORDER BY reading_date DESC"
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<MeterReading>, AppError> {
        sqlx::query_as::<_, MeterReading>(&format!(
            "SELECT {COLS} FROM readings WHERE member_id = $1 ORDER BY reading_date DESC"
        ))
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_period(
        &self,
        member_id: &str,
        month: i32,
        year: i32,
    ) -> Result<Option<MeterReading>, AppError> {
        sqlx::query_as::<_, MeterReading>(&format!(
            "SELECT {COLS} FROM readings WHERE member_id = $1 AND month = $2 AND year = $3"
        ))
            .bind(member_id)
            .bind(month)
            .bind(year)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
