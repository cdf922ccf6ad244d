use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub rut: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub member: MemberProfile,
}

#[derive(Serialize)]
pub struct MemberProfile {
    pub id: String,
    pub rut: String,
    pub name: String,
    pub role: String,
    pub status: String,
    pub client_number: Option<String>,
}
