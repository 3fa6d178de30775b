pub mod amortization;
pub mod dates;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::events::ScheduleEvent;

pub use amortization::AmortizationCalculator;
pub use dates::DateScheduler;

/// one installment of a payment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based installment number
    pub month: u32,
    pub payment_date: NaiveDate,
    pub payment: Money,
    /// interest, commission, fees and penalties charged in this installment
    pub interest: Money,
    pub principal: Money,
    /// principal still owed after this installment
    pub balance: Money,
    #[serde(default)]
    pub is_penalty_month: bool,
}

/// schedule and totals for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// base installment before penalties and fees
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub schedule: Vec<AmortizationRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<ScheduleEvent>,
}

impl LoanResult {
    /// result for input that describes no loan at all
    pub fn zero() -> Self {
        Self {
            monthly_payment: Money::ZERO,
            total_payment: Money::ZERO,
            total_interest: Money::ZERO,
            schedule: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    /// payment due in the first month, which carries lump fees and early penalties
    pub fn first_payment(&self) -> Money {
        self.schedule.first().map(|row| row.payment).unwrap_or(Money::ZERO)
    }

    /// largest single installment
    pub fn peak_payment(&self) -> Money {
        self.schedule
            .iter()
            .map(|row| row.payment)
            .max()
            .unwrap_or(Money::ZERO)
    }

    pub fn penalty_row(&self) -> Option<&AmortizationRow> {
        self.schedule.iter().find(|row| row.is_penalty_month)
    }

    pub fn total_principal(&self) -> Money {
        self.schedule.iter().map(|row| row.principal).sum()
    }

    pub fn get_row(&self, month: u32) -> Option<&AmortizationRow> {
        if month == 0 {
            return None;
        }
        self.schedule.get((month - 1) as usize)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
