use rust_decimal::Decimal;

use crate::config::CashWithdrawalTerms;
use crate::decimal::Money;

/// one-time cash withdrawal fee and how it is spread over the schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashWithdrawalFee {
    pub total: Money,
    pub amortized: bool,
    /// share charged each month when amortized
    pub installment: Money,
}

impl CashWithdrawalFee {
    pub fn new(amount: Money, terms: &CashWithdrawalTerms, amortized: bool, term_months: u32) -> Self {
        let total = amount.apply_rate(terms.fee_rate).round_cents();
        let installment = if term_months == 0 {
            total
        } else {
            (total / Decimal::from(term_months)).round_cents()
        };

        Self {
            total,
            amortized,
            installment,
        }
    }

    /// fee folded into the given schedule month
    pub fn charge_for_month(&self, month: u32) -> Money {
        if !self.total.is_positive() {
            Money::ZERO
        } else if self.amortized {
            self.installment
        } else if month == 1 {
            self.total
        } else {
            Money::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;

    fn terms(percent: Decimal) -> CashWithdrawalTerms {
        CashWithdrawalTerms {
            fee_rate: Rate::from_percent(percent),
        }
    }

    #[test]
    fn test_lump_sum_fee_in_first_month_only() {
        let fee = CashWithdrawalFee::new(Money::from_major(3_000), &terms(dec!(3.99)), false, 3);

        assert_eq!(fee.total, Money::from_decimal(dec!(119.70)));
        assert_eq!(fee.charge_for_month(1), fee.total);
        assert_eq!(fee.charge_for_month(2), Money::ZERO);
        assert_eq!(fee.charge_for_month(3), Money::ZERO);
    }

    #[test]
    fn test_amortized_fee_spread_evenly() {
        let fee = CashWithdrawalFee::new(Money::from_major(3_000), &terms(dec!(4)), true, 7);

        assert_eq!(fee.total, Money::from_major(120));
        // 120 / 7 = 17.142857 -> 17.14 each month
        for month in 1..=7 {
            assert_eq!(fee.charge_for_month(month), Money::from_decimal(dec!(17.14)));
        }
    }

    #[test]
    fn test_zero_fee_charges_nothing() {
        let fee = CashWithdrawalFee::new(Money::from_major(3_000), &terms(dec!(0)), false, 3);
        assert_eq!(fee.charge_for_month(1), Money::ZERO);
    }
}
