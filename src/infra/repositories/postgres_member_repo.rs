use crate::domain::{models::member::Member, ports::MemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const COLS: &str = "id, rut, name, email, phone, address, client_number, password_hash, role, status, registered_at";

pub struct PostgresMemberRepo {
    pool: PgPool,
}

impl PostgresMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepo {
    async fn create(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(&format!(
            "INSERT INTO members ({COLS}) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING {COLS}"
        ))
            .bind(&member.id)
            .bind(&member.rut)
            .bind(&member.name)
            .bind(&member.email)
            .bind(&member.phone)
            .bind(&member.address)
            .bind(&member.client_number)
            .bind(&member.password_hash)
            .bind(&member.role)
            .bind(&member.status)
            .bind(member.registered_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>(&format!("SELECT {COLS} FROM members WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_rut(&self, rut: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>(&format!("SELECT {COLS} FROM members WHERE rut = $1"))
            .bind(rut)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Member>, AppError> {
        sqlx::query_as::<_, Member>(&format!("SELECT {COLS} FROM members ORDER BY name ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(&format!(
            "UPDATE members SET status = $1 WHERE id = $2 RETURNING {COLS}"
        ))
            .bind(status)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
