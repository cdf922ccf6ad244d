use serde::Serialize;

use crate::domain::models::payment::{Payment, METHOD_CARD, METHOD_CASH, METHOD_TRANSFER};

/// Per-method payment totals for one register session, plus the
/// expenditure total. Methods with no payments report zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub cash_total: i64,
    pub card_total: i64,
    pub transfer_total: i64,
    pub expenditure_total: i64,
}

pub fn summarize(payments: &[Payment], expenditure_total: i64) -> SessionSummary {
    let mut summary = SessionSummary {
        expenditure_total,
        ..Default::default()
    };
    for payment in payments {
        match payment.method.as_str() {
            METHOD_CASH => summary.cash_total += payment.amount,
            METHOD_CARD => summary.card_total += payment.amount,
            METHOD_TRANSFER => summary.transfer_total += payment.amount,
            _ => {}
        }
    }
    summary
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CashOutcome {
    Balanced,
    Surplus,
    Shortage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub expected_cash: i64,
    pub counted_cash: i64,
    pub variance: i64,
    pub outcome: CashOutcome,
}

/// `expected = opening float + cash collected`; the variance is signed
/// against the physically counted cash.
pub fn reconcile(opening_float: i64, cash_total: i64, counted_cash: i64) -> Reconciliation {
    let expected_cash = opening_float + cash_total;
    let variance = counted_cash - expected_cash;
    let outcome = match variance {
        0 => CashOutcome::Balanced,
        v if v > 0 => CashOutcome::Surplus,
        _ => CashOutcome::Shortage,
    };
    Reconciliation {
        expected_cash,
        counted_cash,
        variance,
        outcome,
    }
}
