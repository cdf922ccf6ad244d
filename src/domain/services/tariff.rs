use serde::{Deserialize, Serialize};

/// Tiered tariff schedule, in integer pesos per cubic meter. Defaults come
/// from the cooperative's published rates and can be overridden via env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffSchedule {
    pub fixed_charge: i64,
    pub tier1_rate: i64,
    pub tier2_rate: i64,
    pub tier3_rate: i64,
    pub tax_rate: f64,
    pub apply_tax: bool,
}

impl Default for TariffSchedule {
    fn default() -> Self {
        Self {
            fixed_charge: 3000,
            tier1_rate: 700,
            tier2_rate: 900,
            tier3_rate: 1200,
            tax_rate: 0.19,
            apply_tax: false,
        }
    }
}

/// Itemized bill for one reading. Every line is kept separate so the
/// rendered invoice and the reports can show them individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    pub consumption: i64,
    pub fixed_charge: i64,
    pub base_amount: i64,
    pub excess_tier1: i64,
    pub excess_tier2: i64,
    pub penalty: i64,
    pub pending_balance: i64,
    pub subsidy: i64,
    pub tax: i64,
    pub total: i64,
}

const TIER1_LIMIT: i64 = 15;
const TIER2_LIMIT: i64 = 30;

impl TariffSchedule {
    /// Prices a meter-reading delta. The caller guarantees
    /// `current >= previous`; handlers reject non-monotonic readings
    /// before getting here.
    pub fn compute(
        &self,
        previous: i64,
        current: i64,
        pending_balance: i64,
        subsidy: i64,
        penalty: i64,
    ) -> ChargeBreakdown {
        let consumption = current - previous;

        let (base_amount, excess_tier1, excess_tier2) = if consumption <= TIER1_LIMIT {
            (consumption * self.tier1_rate, 0, 0)
        } else if consumption <= TIER2_LIMIT {
            (
                TIER1_LIMIT * self.tier1_rate,
                (consumption - TIER1_LIMIT) * self.tier2_rate,
                0,
            )
        } else {
            (
                TIER1_LIMIT * self.tier1_rate,
                (TIER2_LIMIT - TIER1_LIMIT) * self.tier2_rate,
                (consumption - TIER2_LIMIT) * self.tier3_rate,
            )
        };

        let subtotal =
            self.fixed_charge + base_amount + excess_tier1 + excess_tier2 + penalty + pending_balance;
        let tax = if self.apply_tax {
            (subtotal as f64 * self.tax_rate).round() as i64
        } else {
            0
        };
        let total = subtotal + tax - subsidy;

        ChargeBreakdown {
            consumption,
            fixed_charge: self.fixed_charge,
            base_amount,
            excess_tier1,
            excess_tier2,
            penalty,
            pending_balance,
            subsidy,
            tax,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> TariffSchedule {
        TariffSchedule::default()
    }

    #[test]
    fn low_consumption_uses_only_tier_one() {
        let b = schedule().compute(0, 10, 0, 0, 0);
        assert_eq!(b.consumption, 10);
        assert_eq!(b.base_amount, 7000);
        assert_eq!(b.excess_tier1, 0);
        assert_eq!(b.excess_tier2, 0);
        assert_eq!(b.total, 10000);
    }

    #[test]
    fn mid_consumption_spills_into_tier_two() {
        let b = schedule().compute(0, 20, 0, 0, 0);
        assert_eq!(b.base_amount, 15 * 700);
        assert_eq!(b.excess_tier1, 5 * 900);
        assert_eq!(b.excess_tier2, 0);
        assert_eq!(b.total, 3000 + 10500 + 4500);
    }

    #[test]
    fn high_consumption_caps_tier_two_at_fifteen_units() {
        let b = schedule().compute(0, 35, 0, 0, 0);
        assert_eq!(b.base_amount, 10500);
        assert_eq!(b.excess_tier1, 15 * 900);
        assert_eq!(b.excess_tier2, 5 * 1200);
        assert_eq!(b.total, 33000 + 3000);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        let at15 = schedule().compute(0, 15, 0, 0, 0);
        assert_eq!(at15.base_amount, 15 * 700);
        assert_eq!(at15.excess_tier1, 0);

        let at16 = schedule().compute(0, 16, 0, 0, 0);
        assert_eq!(at16.excess_tier1, 900);

        let at30 = schedule().compute(0, 30, 0, 0, 0);
        assert_eq!(at30.excess_tier1, 15 * 900);
        assert_eq!(at30.excess_tier2, 0);
    }

    #[test]
    fn zero_consumption_still_bills_the_fixed_charge() {
        let b = schedule().compute(120, 120, 0, 0, 0);
        assert_eq!(b.consumption, 0);
        assert_eq!(b.base_amount, 0);
        assert_eq!(b.total, 3000);
    }

    #[test]
    fn penalty_and_pending_balance_enter_the_subtotal() {
        let b = schedule().compute(0, 10, 2500, 0, 1000);
        assert_eq!(b.total, 3000 + 7000 + 1000 + 2500);
    }

    #[test]
    fn subsidy_is_deducted_after_tax() {
        let mut s = schedule();
        s.apply_tax = true;
        let b = s.compute(0, 10, 0, 4000, 0);
        let subtotal = 3000 + 7000;
        let tax = (subtotal as f64 * 0.19).round() as i64;
        assert_eq!(b.tax, tax);
        assert_eq!(b.total, subtotal + tax - 4000);
    }

    #[test]
    fn tax_off_by_default() {
        let b = schedule().compute(0, 40, 0, 0, 0);
        assert_eq!(b.tax, 0);
    }

    #[test]
    fn total_identity_holds_across_inputs() {
        let s = schedule();
        for consumption in [0, 1, 14, 15, 16, 29, 30, 31, 80] {
            for pending in [0, 3500] {
                for penalty in [0, 1200] {
                    let b = s.compute(100, 100 + consumption, pending, 500, penalty);
                    assert_eq!(
                        b.total,
                        b.fixed_charge
                            + b.base_amount
                            + b.excess_tier1
                            + b.excess_tier2
                            + b.penalty
                            + b.pending_balance
                            + b.tax
                            - b.subsidy
                    );
                }
            }
        }
    }
}
