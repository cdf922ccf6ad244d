use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::api::extractors::auth::AuthMember;
use crate::domain::services::{delinquency, ledger};
use crate::error::AppError;
use crate::state::AppState;

/// Full account statement for one member: billed/paid totals, clamped
/// balance, prior pending balance, and months in arrears.
pub async fn get_member_statement(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .member_repo
        .find_by_id(&member_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let readings = state.reading_repo.list_by_member(&member_id).await?;
    let payments = state.payment_repo.list_by_member(&member_id).await?;

    let statement = ledger::statement(&readings, &payments, state.config.arrears_mode);
    Ok(Json(statement))
}

pub async fn get_delinquency_report(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let members = state.member_repo.list().await?;
    let readings = state.reading_repo.list().await?;

    let report = delinquency::classify(&members, &readings);
    Ok(Json(report))
}
