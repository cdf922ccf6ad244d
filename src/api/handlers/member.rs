use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateMemberRequest, UpdateMemberStatusRequest};
use crate::api::extractors::auth::{AdminMember, AuthMember};
use crate::domain::models::member::{is_valid_status, Member, ROLE_ADMIN, ROLE_MEMBER};
use crate::domain::services::auth_service::AuthService;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    _admin: AdminMember,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.rut.is_empty() || payload.name.is_empty() || payload.password.is_empty() {
        return Err(AppError::Validation(
            "rut, name and password are required".into(),
        ));
    }

    let role = payload.role.unwrap_or_else(|| ROLE_MEMBER.to_string());
    if role != ROLE_ADMIN && role != ROLE_MEMBER {
        return Err(AppError::Validation(format!("Unknown role: {}", role)));
    }

    if state.member_repo.find_by_rut(&payload.rut).await?.is_some() {
        return Err(AppError::Conflict("RUT already registered".into()));
    }

    let password_hash = AuthService::hash_password(&payload.password)?;

    let mut member = Member::new(payload.rut, payload.name, password_hash, role);
    member.email = payload.email;
    member.phone = payload.phone;
    member.address = payload.address;
    member.client_number = payload.client_number;

    let created = state.member_repo.create(&member).await?;

    info!("Created member: {}", created.id);

    Ok(Json(created))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let members = state.member_repo.list().await?;
    Ok(Json(members))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let member = state
        .member_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;
    Ok(Json(member))
}

/// Suspend / reinstate / flag-delinquent. Members are never deleted;
/// this is the only mutation the admin UI performs on them.
pub async fn update_member_status(
    State(state): State<Arc<AppState>>,
    _admin: AdminMember,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMemberStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_status(&payload.status) {
        return Err(AppError::Validation(format!(
            "Unknown status: {}",
            payload.status
        )));
    }

    state
        .member_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let updated = state.member_repo.update_status(&id, &payload.status).await?;

    info!("Member {} status set to {}", id, payload.status);

    Ok(Json(updated))
}
