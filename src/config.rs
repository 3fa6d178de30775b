use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::interest::PenaltyRule;
use crate::types::{AmortizationModel, DateRule, ProductId};

/// product configuration, the single source of truth for every product parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub product: ProductId,
    pub model: AmortizationModel,
    pub rate_rule: RateRule,
    pub date_rule: DateRule,
    pub cash_withdrawal: Option<CashWithdrawalTerms>,
    pub grace_penalty: Option<PenaltyRule>,
}

/// nominal monthly rate a product quotes for a given term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RateRule {
    Fixed(Rate),
    /// `long_term` applies once the term reaches `threshold_months`
    TieredByTerm {
        threshold_months: u32,
        short_term: Rate,
        long_term: Rate,
    },
}

impl RateRule {
    pub fn rate_for(&self, months: u32) -> Rate {
        match *self {
            RateRule::Fixed(rate) => rate,
            RateRule::TieredByTerm { threshold_months, short_term, long_term } => {
                if months >= threshold_months {
                    long_term
                } else {
                    short_term
                }
            }
        }
    }
}

/// one-time fee for cash withdrawals and transfers made with a card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashWithdrawalTerms {
    /// fee as a fraction of the withdrawn amount
    pub fee_rate: Rate,
}

impl ProductConfig {
    /// look up the preset for a product
    pub fn for_product(product: ProductId) -> Self {
        match product {
            ProductId::TieredInstallment => Self::tiered_installment(),
            ProductId::FixedDueCreditCard => Self::fixed_due_credit_card(),
            ProductId::FixedRateInstallment => Self::fixed_rate_installment(),
            ProductId::StandardDueCreditCard => Self::standard_due_credit_card(),
        }
    }

    /// installment plan: 1.99% commission below a year, 2.99% from 12 months
    pub fn tiered_installment() -> Self {
        Self {
            product: ProductId::TieredInstallment,
            model: AmortizationModel::FlatCommission,
            rate_rule: RateRule::TieredByTerm {
                threshold_months: 12,
                short_term: Rate::from_percent(dec!(1.99)),
                long_term: Rate::from_percent(dec!(2.99)),
            },
            date_rule: DateRule::Standard,
            cash_withdrawal: None,
            grace_penalty: None,
        }
    }

    /// credit card at 2.99% per month on balance, statement due on the 30th
    pub fn fixed_due_credit_card() -> Self {
        Self {
            product: ProductId::FixedDueCreditCard,
            model: AmortizationModel::RevolvingBalance,
            rate_rule: RateRule::Fixed(Rate::from_percent(dec!(2.99))),
            date_rule: DateRule::FixedDay { day: 30 },
            cash_withdrawal: Some(CashWithdrawalTerms {
                fee_rate: Rate::from_percent(dec!(3.99)),
            }),
            grace_penalty: Some(PenaltyRule::ActualDays {
                days_in_month: 30,
                charge_month: 1,
            }),
        }
    }

    /// installment on card at a fixed 1.90% monthly commission
    pub fn fixed_rate_installment() -> Self {
        Self {
            product: ProductId::FixedRateInstallment,
            model: AmortizationModel::FlatCommission,
            rate_rule: RateRule::Fixed(Rate::from_percent(dec!(1.90))),
            date_rule: DateRule::Standard,
            cash_withdrawal: None,
            grace_penalty: None,
        }
    }

    /// credit card at 3.10% per month on balance, grace window of about 62 days
    pub fn standard_due_credit_card() -> Self {
        Self {
            product: ProductId::StandardDueCreditCard,
            model: AmortizationModel::RevolvingBalance,
            rate_rule: RateRule::Fixed(Rate::from_percent(dec!(3.10))),
            date_rule: DateRule::Standard,
            cash_withdrawal: Some(CashWithdrawalTerms {
                fee_rate: Rate::from_percent(dec!(4)),
            }),
            grace_penalty: Some(PenaltyRule::WholeMonths {
                months: 2,
                charge_month: 2,
            }),
        }
    }

    /// nominal monthly rate quoted for this term
    pub fn nominal_rate(&self, months: u32) -> Rate {
        self.rate_rule.rate_for(months)
    }

    /// whether grace-violation and cash-withdrawal options apply to this product
    pub fn supports_card_options(&self) -> bool {
        self.model == AmortizationModel::RevolvingBalance
    }
}
