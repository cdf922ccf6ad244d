use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{BalanceQuery, CreateTransactionRequest};
use crate::api::dtos::responses::MonthlyBalanceResponse;
use crate::api::extractors::auth::{AdminMember, AuthMember};
use crate::domain::models::transaction::{is_valid_kind, Transaction};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let transactions = state.transaction_repo.list().await?;
    Ok(Json(transactions))
}

pub async fn list_transactions_by_kind(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_valid_kind(&kind) {
        return Err(AppError::Validation(format!("Unknown kind: {}", kind)));
    }
    let transactions = state.transaction_repo.list_by_kind(&kind).await?;
    Ok(Json(transactions))
}

/// Income/expense totals for a month; defaults to the current month.
pub async fn get_monthly_balance(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Query(query): Query<BalanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let month = query.month.unwrap_or(now.month() as i32);
    let year = query.year.unwrap_or(now.year());

    if !(1..=12).contains(&month) {
        return Err(AppError::Validation("month must be 1..=12".into()));
    }

    let (total_income, total_expense) = state.transaction_repo.monthly_balance(month, year).await?;

    Ok(Json(MonthlyBalanceResponse {
        month,
        year,
        total_income,
        total_expense,
        net: total_income - total_expense,
    }))
}

pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    _admin: AdminMember,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.amount <= 0 {
        return Err(AppError::Validation("amount must be positive".into()));
    }
    if !is_valid_kind(&payload.kind) {
        return Err(AppError::Validation(format!(
            "Unknown kind: {}",
            payload.kind
        )));
    }
    if payload.category.is_empty() || payload.description.is_empty() {
        return Err(AppError::Validation(
            "category and description are required".into(),
        ));
    }

    if let Some(member_id) = &payload.member_id {
        state
            .member_repo
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".into()))?;
    }

    let transaction = Transaction::new(
        payload.kind,
        payload.category,
        payload.description,
        payload.amount,
        payload.occurred_at.unwrap_or_else(Utc::now),
        payload.member_id,
    );

    let created = state.transaction_repo.create(&transaction).await?;

    info!("Transaction {} recorded ({})", created.id, created.kind);

    Ok((StatusCode::CREATED, Json(created)))
}
