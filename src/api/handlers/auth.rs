use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::LoginRequest;
use crate::api::extractors::auth::AuthMember;
use crate::domain::models::auth::{AuthResponse, MemberProfile};
use crate::domain::services::auth_service::AuthService;
use crate::error::AppError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.rut.is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation("RUT and password are required".into()));
    }

    let member = state
        .member_repo
        .find_by_rut(&payload.rut)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !AuthService::verify_password(&member.password_hash, &payload.password) {
        return Err(AppError::Unauthorized);
    }

    let token = state.auth_service.issue_token(&member)?;

    info!("Member logged in: {}", member.id);

    Ok(Json(AuthResponse {
        token,
        member: MemberProfile {
            id: member.id,
            rut: member.rut,
            name: member.name,
            role: member.role,
            status: member.status,
            client_number: member.client_number,
        },
    }))
}

pub async fn verify(
    State(state): State<Arc<AppState>>,
    AuthMember(claims): AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let member = state
        .member_repo
        .find_by_id(&claims.sub)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(MemberProfile {
        id: member.id,
        rut: member.rut,
        name: member.name,
        role: member.role,
        status: member.status,
        client_number: member.client_number,
    }))
}
