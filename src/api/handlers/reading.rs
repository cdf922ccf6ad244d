use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateReadingRequest;
use crate::api::extractors::auth::{AdminMember, AuthMember};
use crate::domain::models::reading::MeterReading;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_readings(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
) -> Result<impl IntoResponse, AppError> {
    let readings = state.reading_repo.list().await?;
    Ok(Json(readings))
}

pub async fn list_member_readings(
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
    Ok(Json(readings))
}

/// Records one billing-period reading. The charge is priced server-side
/// from the tariff schedule. Only this period's consumption is stored;
/// outstanding prior debt is folded in at invoice time, never here, so the
/// ledger sums do not double-count it.
pub async fn create_reading(
    State(state): State<Arc<AppState>>,
    _admin: AdminMember,
    Json(payload): Json<CreateReadingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.current_reading < payload.previous_reading {
        return Err(AppError::Validation(
            "current_reading must be >= previous_reading".into(),
        ));
    }
    if payload.previous_reading < 0 {
        return Err(AppError::Validation("readings must be non-negative".into()));
    }
    if !(1..=12).contains(&payload.month) {
        return Err(AppError::Validation("month must be 1..=12".into()));
    }
    if payload.subsidy.unwrap_or(0) < 0 || payload.penalty.unwrap_or(0) < 0 {
        return Err(AppError::Validation(
            "subsidy and penalty must be non-negative".into(),
        ));
    }

    state
        .member_repo
        .find_by_id(&payload.member_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    if state
        .reading_repo
        .find_period(&payload.member_id, payload.month, payload.year)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(
            "A reading already exists for this member and period".into(),
        ));
    }

    let breakdown = state.config.tariff.compute(
        payload.previous_reading,
        payload.current_reading,
        0,
        payload.subsidy.unwrap_or(0),
        payload.penalty.unwrap_or(0),
    );

    let reading = MeterReading::new(
        payload.member_id,
        payload.previous_reading,
        payload.current_reading,
        payload.month,
        payload.year,
        breakdown.total,
        payload.notes,
    );

    let created = state.reading_repo.create(&reading).await?;

    info!(
        "Recorded reading {} for member {} ({} m3, charge {})",
        created.id, created.member_id, created.consumption, created.charge
    );

    Ok((StatusCode::CREATED, Json(created)))
}
