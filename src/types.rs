use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalculatorError;

/// credit products offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductId {
    /// installment plan, commission tiered by term
    #[serde(rename = "pumb_installment")]
    TieredInstallment,
    /// credit card whose statement is always due on the 30th
    #[serde(rename = "pumb_credit_card")]
    FixedDueCreditCard,
    /// installment on card at a fixed commission
    #[serde(rename = "monobank_installment")]
    FixedRateInstallment,
    /// credit card due one calendar month after each statement
    #[serde(rename = "monobank_black")]
    StandardDueCreditCard,
}

impl ProductId {
    pub const ALL: [ProductId; 4] = [
        ProductId::TieredInstallment,
        ProductId::FixedDueCreditCard,
        ProductId::FixedRateInstallment,
        ProductId::StandardDueCreditCard,
    ];

    /// stable string id used by consumers
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductId::TieredInstallment => "pumb_installment",
            ProductId::FixedDueCreditCard => "pumb_credit_card",
            ProductId::FixedRateInstallment => "monobank_installment",
            ProductId::StandardDueCreditCard => "monobank_black",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductId::TieredInstallment => "PUMB installment plan",
            ProductId::FixedDueCreditCard => "PUMB credit card (vseMOZHU)",
            ProductId::FixedRateInstallment => "Monobank installment on card",
            ProductId::StandardDueCreditCard => "Monobank Black card",
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductId {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductId::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| CalculatorError::UnknownProduct { id: s.to_string() })
    }
}

/// how a product charges for credit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationModel {
    /// interest on the outstanding balance, level annuity payment
    RevolvingBalance,
    /// commission on the original principal every month
    FlatCommission,
}

/// rule placing each installment on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateRule {
    /// same day of month as the start date, i months later
    Standard,
    /// fixed day of the following months, clamped to short months
    FixedDay { day: u32 },
}
