use serde::Serialize;

use crate::domain::models::{payment::Payment, reading::MeterReading};

/// How "months in arrears" is counted. The historical system never
/// allocated a payment to a specific reading, so one large payment can
/// satisfy the arrears check of several readings at once (`Naive`).
/// `Allocated` applies payments oldest-reading-first instead. Selected via
/// the `ARREARS_MODE` env var; the cooperative picks which one it trusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrearsMode {
    Naive,
    Allocated,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountStatement {
    pub total_billed: i64,
    pub total_paid: i64,
    /// Outstanding balance, clamped to zero for display.
    pub balance: i64,
    /// Debt carried from before the most recent reading, clamped to zero.
    /// This is the figure folded into the next invoice as "saldo pendiente".
    pub prior_pending: i64,
    pub months_in_arrears: usize,
}

/// Folds a member's full reading and payment history into a statement.
/// Read-only; the caller supplies the history.
pub fn statement(
    readings: &[MeterReading],
    payments: &[Payment],
    mode: ArrearsMode,
) -> AccountStatement {
    let total_billed: i64 = readings.iter().map(|r| r.charge).sum();
    let total_paid: i64 = payments.iter().map(|p| p.amount).sum();
    let debt = total_billed - total_paid;
    let balance = debt.max(0);

    let latest_charge = readings
        .iter()
        .max_by_key(|r| r.reading_date)
        .map(|r| r.charge)
        .unwrap_or(0);
    let prior_pending = (debt - latest_charge).max(0);

    let months_in_arrears = match mode {
        ArrearsMode::Naive => arrears_naive(readings, payments),
        ArrearsMode::Allocated => arrears_allocated(readings, payments),
    };

    AccountStatement {
        total_billed,
        total_paid,
        balance,
        prior_pending,
        months_in_arrears,
    }
}

/// A reading is in arrears when the payments dated on or after its reading
/// date do not add up to its charge. Payments are not claimed by a single
/// reading, so the same payment can cover several readings in this count.
pub fn arrears_naive(readings: &[MeterReading], payments: &[Payment]) -> usize {
    readings
        .iter()
        .filter(|reading| {
            let paid_since: i64 = payments
                .iter()
                .filter(|p| p.paid_at >= reading.reading_date)
                .map(|p| p.amount)
                .sum();
            paid_since < reading.charge
        })
        .count()
}

/// Applies the payment pool to readings oldest-first; a reading is in
/// arrears while its allocation falls short of its charge.
pub fn arrears_allocated(readings: &[MeterReading], payments: &[Payment]) -> usize {
    let mut ordered: Vec<&MeterReading> = readings.iter().collect();
    ordered.sort_by_key(|r| r.reading_date);

    let mut pool: i64 = payments.iter().map(|p| p.amount).sum();
    let mut in_arrears = 0;
    for reading in ordered {
        let applied = pool.min(reading.charge);
        pool -= applied;
        if applied < reading.charge {
            in_arrears += 1;
        }
    }
    in_arrears
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn reading(charge: i64, days_ago: i64) -> MeterReading {
        let mut r = MeterReading::new("m1".into(), 0, 10, 1, 2026, charge, None);
        r.reading_date = Utc::now() - Duration::days(days_ago);
        r
    }

    fn payment(amount: i64, days_ago: i64) -> Payment {
        let mut p = Payment::new("m1".into(), None, amount, "cash".into(), None);
        p.paid_at = Utc::now() - Duration::days(days_ago);
        p
    }

    #[test]
    fn balance_is_billed_minus_paid() {
        let s = statement(
            &[reading(8000, 60), reading(9000, 30)],
            &[payment(5000, 10)],
            ArrearsMode::Naive,
        );
        assert_eq!(s.total_billed, 17000);
        assert_eq!(s.total_paid, 5000);
        assert_eq!(s.balance, 12000);
    }

    #[test]
    fn balance_never_reported_negative() {
        let s = statement(&[reading(4000, 30)], &[payment(9000, 5)], ArrearsMode::Naive);
        assert_eq!(s.balance, 0);
    }

    #[test]
    fn prior_pending_excludes_latest_charge() {
        // 8000 + 9000 billed, 3000 paid: debt 14000, latest charge 9000.
        let s = statement(
            &[reading(8000, 60), reading(9000, 30)],
            &[payment(3000, 40)],
            ArrearsMode::Naive,
        );
        assert_eq!(s.prior_pending, 5000);
    }

    #[test]
    fn prior_pending_clamped_when_fully_paid() {
        let s = statement(&[reading(8000, 30)], &[payment(8000, 5)], ArrearsMode::Naive);
        assert_eq!(s.prior_pending, 0);
    }

    #[test]
    fn empty_history_is_a_zero_statement() {
        let s = statement(&[], &[], ArrearsMode::Naive);
        assert_eq!(s.balance, 0);
        assert_eq!(s.prior_pending, 0);
        assert_eq!(s.months_in_arrears, 0);
    }

    #[test]
    fn naive_lets_one_payment_cover_several_readings() {
        // One 5000 payment after both 5000 readings satisfies the naive
        // check for each of them, while allocation leaves one short.
        let readings = [reading(5000, 60), reading(5000, 30)];
        let payments = [payment(5000, 5)];

        assert_eq!(arrears_naive(&readings, &payments), 0);
        assert_eq!(arrears_allocated(&readings, &payments), 1);
    }

    #[test]
    fn naive_ignores_payments_made_before_the_reading() {
        let readings = [reading(5000, 10)];
        let payments = [payment(5000, 20)];
        assert_eq!(arrears_naive(&readings, &payments), 1);
        // Allocation does not care about payment dates.
        assert_eq!(arrears_allocated(&readings, &payments), 0);
    }

    #[test]
    fn allocated_applies_oldest_first() {
        let readings = [reading(4000, 90), reading(6000, 60), reading(5000, 30)];
        let payments = [payment(9000, 5)];
        // 4000 covered, 5000 of the 6000 covered, last untouched.
        assert_eq!(arrears_allocated(&readings, &payments), 2);
    }
}
