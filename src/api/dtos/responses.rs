use serde::Serialize;

use crate::domain::services::reconciliation::{CashOutcome, SessionSummary};

#[derive(Serialize)]
pub struct RegisterSummaryResponse {
    #[serde(flatten)]
    pub summary: SessionSummary,
}

#[derive(Serialize)]
pub struct RegisterClosedResponse {
    pub id: String,
    pub cash_total: i64,
    pub card_total: i64,
    pub transfer_total: i64,
    pub expected_cash: i64,
    pub counted_cash: i64,
    pub variance: i64,
    pub outcome: CashOutcome,
}

#[derive(Serialize)]
pub struct MonthlyBalanceResponse {
    pub month: i32,
    pub year: i32,
    pub total_income: i64,
    pub total_expense: i64,
    pub net: i64,
}

#[derive(Serialize)]
pub struct ExpenditureTotalResponse {
    pub total: i64,
}
