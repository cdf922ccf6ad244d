use crate::domain::{models::payment::Payment, ports::PaymentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const COLS: &str = "id, member_id, register_id, amount, method, paid_at, notes";

pub struct PostgresPaymentRepo {
    pool: PgPool,
}

impl PostgresPaymentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepo {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError> {
        sqlx::query_as::<_, Payment>(&format!(
            "INSERT INTO payments ({COLS}) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COLS}"
        ))
            .bind(&payment.id)
            .bind(&payment.member_id)
            .bind(&payment.register_id)
            .bind(payment.amount)
            .bind(&payment.method)
            .bind(payment.paid_at)
            .bind(&payment.notes)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(&format!(
            "SELECT {COLS} FROM payments ORDER BY paid_at DESC"
        ))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(&format!(
            "SELECT {COLS} FROM payments WHERE member_id = $1 ORDER BY paid_at DESC"
        ))
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_register(&self, register_id: &str) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(&format!(
            "SELECT {COLS} FROM payments WHERE register_id = $1 ORDER BY paid_at DESC"
        ))
            .bind(register_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
