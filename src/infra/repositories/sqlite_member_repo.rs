use crate::domain::{models::member::Member, ports::MemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const COLS: &str = "id, rut, name, email, phone, address, client_number, password_hash, role, status, registered_at";

pub struct SqliteMemberRepo {
    pool: SqlitePool,
}

impl SqliteMemberRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepo {
    async fn create(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(&format!(
            "INSERT INTO members ({COLS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLS}"
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
        sqlx::query_as::<_, Member>(&format!("SELECT {COLS} FROM members WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_rut(&self, rut: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>(&format!("SELECT {COLS} FROM members WHERE rut = ?"))
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
            "UPDATE members SET status = ? WHERE id = ? RETURNING {COLS}"
        ))
            .bind(status)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
