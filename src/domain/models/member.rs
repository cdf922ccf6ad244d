use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_DELINQUENT: &str = "delinquent";
pub const STATUS_SUSPENDED: &str = "suspended";

/// A cooperative member (socio). Members are never hard-deleted; the
/// `status` flag tracks suspension and delinquency instead.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct Member {
    pub id: String,
    pub rut: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub client_number: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub registered_at: DateTime<Utc>,
}

impl Member {
    pub fn new(rut: String, name: String, password_hash: String, role: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            rut,
            name,
            email: None,
            phone: None,
            address: None,
            client_number: None,
            password_hash,
            role,
            status: STATUS_ACTIVE.to_string(),
            registered_at: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

pub fn is_valid_status(status: &str) -> bool {
    matches!(status, STATUS_ACTIVE | STATUS_DELINQUENT | STATUS_SUSPENDED)
}
