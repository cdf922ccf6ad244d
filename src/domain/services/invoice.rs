use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;

use crate::domain::models::{member::Member, reading::MeterReading};
use crate::domain::services::tariff::{ChargeBreakdown, TariffSchedule};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionBar {
    pub month: i32,
    pub year: i32,
    pub consumption: i64,
}

/// Everything the external document renderer needs to lay out one billing
/// invoice: itemized charges, the payment QR payload, and the short
/// consumption history for the bar chart.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceData {
    pub number: String,
    pub member_name: String,
    pub rut: String,
    pub client_number: String,
    pub previous_reading: i64,
    pub current_reading: i64,
    pub issued_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub breakdown: ChargeBreakdown,
    pub qr_payload: String,
    pub history: Vec<ConsumptionBar>,
    pub account_status: String,
}

/// Assembles the invoice for a member's most recent reading. `readings`
/// must be the member's history ordered newest-first; `total_debt` is the
/// unclamped billed-minus-paid figure so prior periods fold into the bill.
pub fn assemble(
    member: &Member,
    readings: &[MeterReading],
    total_debt: i64,
    tariff: &TariffSchedule,
    portal_url: &str,
) -> Result<InvoiceData, AppError> {
    let latest = readings
        .first()
        .ok_or_else(|| AppError::NotFound("No readings on file for this member".into()))?;

    let pending = (total_debt - latest.charge).max(0);
    let breakdown = tariff.compute(
        latest.previous_reading,
        latest.current_reading,
        pending,
        0,
        0,
    );

    let client_number = member
        .client_number
        .clone()
        .unwrap_or_else(|| member.id.chars().take(8).collect());

    let issued_at = Utc::now();
    let number = format!(
        "{}-{}{:02}",
        client_number,
        issued_at.year(),
        issued_at.month()
    );

    let qr_payload = format!("{}?boleta={}&monto={}", portal_url, number, breakdown.total);

    let mut history: Vec<ConsumptionBar> = readings
        .iter()
        .take(3)
        .map(|r| ConsumptionBar {
            month: r.month,
            year: r.year,
            consumption: r.consumption,
        })
        .collect();
    history.reverse(); // chronological for the chart

    let account_status = if member.status == crate::domain::models::member::STATUS_DELINQUENT {
        "PENDIENTE".to_string()
    } else {
        "AL DIA".to_string()
    };

    Ok(InvoiceData {
        number,
        member_name: member.name.clone(),
        rut: member.rut.clone(),
        client_number,
        previous_reading: latest.previous_reading,
        current_reading: latest.current_reading,
        issued_at,
        due_at: issued_at + Duration::days(15),
        breakdown,
        qr_payload,
        history,
        account_status,
    })
}
