use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateExpenditureRequest;
use crate::api::dtos::responses::ExpenditureTotalResponse;
use crate::api::extractors::auth::{AdminMember, AuthMember};
use crate::domain::models::expenditure::Expenditure;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_expenditures(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let expenditures = state.expenditure_repo.list().await?;
    Ok(Json(expenditures))
}

pub async fn create_expenditure(
    State(state): State<Arc<AppState>>,
    _admin: AdminMember,
    Json(payload): Json<CreateExpenditureRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.amount <= 0 {
        return Err(AppError::Validation("amount must be positive".into()));
    }
    if payload.category.is_empty() || payload.description.is_empty() {
        return Err(AppError::Validation(
            "category and description are required".into(),
        ));
    }

    let register = state
        .register_repo
        .find_by_id(&payload.register_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Register session not found".into()))?;
    if !register.is_open() {
        return Err(AppError::Conflict(
            "Register session is already closed".into(),
        ));
    }

    let expenditure = Expenditure::new(
        payload.register_id,
        payload.category,
        payload.description,
        payload.amount,
        payload.notes,
    );

    let created = state.expenditure_repo.create(&expenditure).await?;

    info!(
        "Expenditure {} of {} on register {}",
        created.id, created.amount, created.register_id
    );

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_register_expenditures(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Path(register_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .register_repo
        .find_by_id(&register_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Register session not found".into()))?;

    let expenditures = state.expenditure_repo.list_by_register(&register_id).await?;
    Ok(Json(expenditures))
}

pub async fn get_register_expenditure_total(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Path(register_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .register_repo
        .find_by_id(&register_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Register session not found".into()))?;

    let total = state
        .expenditure_repo
        .total_by_register(&register_id)
        .await?;
    Ok(Json(ExpenditureTotalResponse { total }))
}
