use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreatePaymentRequest;
use crate::api::extractors::auth::{AdminMember, AuthMember};
use crate::domain::models::payment::{is_valid_method, Payment};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_payments(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let payments = state.payment_repo.list().await?;
    Ok(Json(payments))
}

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    _admin: AdminMember,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.amount <= 0 {
        return Err(AppError::Validation("amount must be positive".into()));
    }
    if !is_valid_method(&payload.method) {
        return Err(AppError::Validation(format!(
            "Unknown payment method: {}",
            payload.method
        )));
    }

    state
        .member_repo
        .find_by_id(&payload.member_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    if let Some(register_id) = &payload.register_id {
        let register = state
            .register_repo
            .find_by_id(register_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Register session not found".into()))?;
        if !register.is_open() {
            return Err(AppError::Conflict(
                "Register session is already closed".into(),
            ));
        }
    }

    let payment = Payment::new(
        payload.member_id,
        payload.register_id,
        payload.amount,
        payload.method,
        payload.notes,
    );

    let created = state.payment_repo.create(&payment).await?;

    info!(
        "Payment {} of {} ({}) for member {}",
        created.id, created.amount, created.method, created.member_id
    );

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_register_payments(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Path(register_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .register_repo
        .find_by_id(&register_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Register session not found".into()))?;

    let payments = state.payment_repo.list_by_register(&register_id).await?;
    Ok(Json(payments))
}
