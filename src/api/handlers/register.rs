use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::{CloseRegisterRequest, OpenRegisterRequest, RegisterDateRangeQuery};
use crate::api::dtos::responses::{RegisterClosedResponse, RegisterSummaryResponse};
use crate::api::extractors::auth::{AdminMember, AuthMember};
use crate::domain::models::register::{RegisterSession, STATUS_CLOSED};
use crate::domain::services::reconciliation::{reconcile, summarize};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_registers(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let registers = state.register_repo.list().await?;
    Ok(Json(registers))
}

pub async fn list_registers_by_date(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Query(range): Query<RegisterDateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    if range.from > range.to {
        return Err(AppError::Validation("from must not be after to".into()));
    }
    let registers = state
        .register_repo
        .list_by_date_range(range.from, range.to)
        .await?;
    Ok(Json(registers))
}

/// The currently open session, or JSON null when none is open.
pub async fn get_open_register(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let open = state.register_repo.find_open().await?;
    Ok(Json(open))
}

pub async fn open_register(
    State(state): State<Arc<AppState>>,
    AdminMember(claims): AdminMember,
    Json(payload): Json<OpenRegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.opening_float < 0 {
        return Err(AppError::Validation(
            "opening_float must be non-negative".into(),
        ));
    }

    let session = RegisterSession::open(claims.sub, payload.opening_float, payload.notes);

    // No check-then-insert here: the partial unique index on `status = open`
    // is the arbiter, so two concurrent opens cannot both succeed.
    let created = state.register_repo.create(&session).await.map_err(|e| {
        if matches!(&e, AppError::Database(db) if db.as_database_error()
            .map(|d| {
                let code = d.code().unwrap_or_default();
                code == "23505" || code == "2067"
            })
            .unwrap_or(false))
        {
            warn!("Rejected register open: another session is already open");
            AppError::Conflict("A register session is already open".into())
        } else {
            e
        }
    })?;

    info!(
        "Register {} opened by {} with float {}",
        created.id, created.operator_id, created.opening_float
    );

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_register_summary(
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
    let expenditure_total = state
        .expenditure_repo
        .total_by_register(&register_id)
        .await?;

    Ok(Json(RegisterSummaryResponse {
        summary: summarize(&payments, expenditure_total),
    }))
}

pub async fn close_register(
    State(state): State<Arc<AppState>>,
    _admin: AdminMember,
    Path(register_id): Path<String>,
    Json(payload): Json<CloseRegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state
        .register_repo
        .find_by_id(&register_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Register session not found".into()))?;

    if !session.is_open() {
        return Err(AppError::Conflict(
            "Register session is already closed".into(),
        ));
    }

    // Totals come from the payment rows themselves, never from the caller.
    let payments = state.payment_repo.list_by_register(&register_id).await?;
    let expenditure_total = state
        .expenditure_repo
        .total_by_register(&register_id)
        .await?;
    let summary = summarize(&payments, expenditure_total);

    let reconciliation = reconcile(
        session.opening_float,
        summary.cash_total,
        payload.counted_cash,
    );

    session.status = STATUS_CLOSED.to_string();
    session.closed_at = Some(Utc::now());
    session.cash_total = Some(summary.cash_total);
    session.card_total = Some(summary.card_total);
    session.transfer_total = Some(summary.transfer_total);
    session.expected_cash = Some(reconciliation.expected_cash);
    session.counted_cash = Some(reconciliation.counted_cash);
    session.variance = Some(reconciliation.variance);
    session.closing_notes = payload.notes;

    // The update only touches an open row, so a close that lost a race
    // comes back empty rather than clobbering the first snapshot.
    let closed = state
        .register_repo
        .close(&session)
        .await?
        .ok_or_else(|| AppError::Conflict("Register session is already closed".into()))?;

    info!(
        "Register {} closed: expected {}, counted {}, variance {}",
        closed.id,
        reconciliation.expected_cash,
        reconciliation.counted_cash,
        reconciliation.variance
    );

    Ok(Json(RegisterClosedResponse {
        id: closed.id,
        cash_total: summary.cash_total,
        card_total: summary.card_total,
        transfer_total: summary.transfer_total,
        expected_cash: reconciliation.expected_cash,
        counted_cash: reconciliation.counted_cash,
        variance: reconciliation.variance,
        outcome: reconciliation.outcome,
    }))
}
