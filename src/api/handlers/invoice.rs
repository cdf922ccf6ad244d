use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::extractors::auth::AuthMember;
use crate::domain::services::{invoice, ledger};
use crate::error::AppError;
use crate::state::AppState;

async fn assemble_invoice(
    state: &AppState,
    member_id: &str,
) -> Result<invoice::InvoiceData, AppError> {
    let member = state
        .member_repo
        .find_by_id(member_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let readings = state.reading_repo.list_by_member(member_id).await?;
    let payments = state.payment_repo.list_by_member(member_id).await?;
    let statement = ledger::statement(&readings, &payments, state.config.arrears_mode);

    invoice::assemble(
        &member,
        &readings,
        statement.total_billed - statement.total_paid,
        &state.config.tariff,
        &state.config.payment_portal_url,
    )
}

/// The assembled invoice as JSON, without touching the renderer. Used by
/// the admin UI to preview the bill before printing.
pub async fn preview_invoice(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = assemble_invoice(&state, &member_id).await?;
    Ok(Json(data))
}

pub async fn download_invoice(
    State(state): State<Arc<AppState>>,
    _auth: AuthMember,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = assemble_invoice(&state, &member_id).await?;
    let pdf = state.renderer.render_invoice(&data).await?;

    info!("Rendered invoice {} ({} bytes)", data.number, pdf.len());

    let disposition = format!("attachment; filename=boleta_{}.pdf", data.client_number);
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    ))
}
