use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// how a product charges interest once the interest-free window is missed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyRule {
    /// monthly rate spread over `days_in_month`, charged for every actual day
    /// between purchase and the first due date
    ActualDays { days_in_month: u32, charge_month: u32 },
    /// a whole number of months of interest on the full amount
    WholeMonths { months: u32, charge_month: u32 },
}

impl PenaltyRule {
    /// schedule row carrying the penalty, pulled in for terms shorter than the rule
    pub fn charge_month(&self, term_months: u32) -> u32 {
        let month = match *self {
            PenaltyRule::ActualDays { charge_month, .. } => charge_month,
            PenaltyRule::WholeMonths { charge_month, .. } => charge_month,
        };
        month.min(term_months).max(1)
    }
}

/// engine for grace-period violation penalties
pub struct PenaltyEngine {
    pub rule: PenaltyRule,
}

impl PenaltyEngine {
    pub fn new(rule: PenaltyRule) -> Self {
        Self { rule }
    }

    /// penalty on the full purchase amount, computed once before the schedule runs
    pub fn calculate_penalty(
        &self,
        amount: Money,
        monthly_rate: Rate,
        purchase_date: NaiveDate,
        first_due_date: NaiveDate,
        term_months: u32,
    ) -> PenaltyCalculation {
        let charge_month = self.rule.charge_month(term_months);

        match self.rule {
            PenaltyRule::ActualDays { days_in_month, .. } => {
                let days = (first_due_date - purchase_date).num_days().unsigned_abs() as u32;
                let daily_rate = monthly_rate.per_day(days_in_month);
                PenaltyCalculation {
                    penalty_amount: amount.apply_rate(daily_rate.times(days)).round_cents(),
                    charge_month,
                    days_charged: Some(days),
                }
            }
            PenaltyRule::WholeMonths { months, .. } => PenaltyCalculation {
                penalty_amount: amount.apply_rate(monthly_rate.times(months)).round_cents(),
                charge_month,
                days_charged: None,
            },
        }
    }
}

/// penalty calculation result
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyCalculation {
    pub penalty_amount: Money,
    pub charge_month: u32,
    /// actual days charged, for day-count rules
    pub days_charged: Option<u32>,
}

impl PenaltyCalculation {
    /// whether the penalty lands on the given schedule month
    pub fn applies_to(&self, month: u32) -> bool {
        month == self.charge_month && self.penalty_amount.is_positive()
    }
}
