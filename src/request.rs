use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ProductConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::ProductId;

/// special conditions a card purchase can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoanFlags {
    /// the interest-free window was missed
    pub grace_period_violation: bool,
    /// the amount was withdrawn as cash or transferred
    pub cash_withdrawal: bool,
    /// spread the cash withdrawal fee over the whole term
    pub fee_amortized: bool,
}

impl LoanFlags {
    pub fn set_grace_period_violation(&mut self, on: bool) {
        self.grace_period_violation = on;
    }

    /// turning cash withdrawal off also clears fee amortization
    pub fn set_cash_withdrawal(&mut self, on: bool) {
        self.cash_withdrawal = on;
        if !on {
            self.fee_amortized = false;
        }
    }

    /// fee amortization only sticks while cash withdrawal is on
    pub fn set_fee_amortized(&mut self, on: bool) {
        self.fee_amortized = on && self.cash_withdrawal;
    }

    /// drop options the product does not offer
    pub fn for_product(self, config: &ProductConfig) -> Self {
        if config.supports_card_options() {
            self
        } else {
            LoanFlags::default()
        }
    }
}

/// inputs for one schedule calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub amount: Money,
    /// monthly interest or commission rate as a fraction (0.0199 for 1.99%)
    pub monthly_rate: Rate,
    pub months: u32,
    pub product: ProductId,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub flags: LoanFlags,
}

impl LoanRequest {
    /// builder for creating requests
    pub fn builder<'a>() -> LoanRequestBuilder<'a> {
        LoanRequestBuilder::new()
    }

    /// product parameters for this request
    pub fn config(&self) -> ProductConfig {
        ProductConfig::for_product(self.product)
    }

    /// whether the request describes a loan the engine will schedule
    pub fn is_degenerate(&self) -> bool {
        !self.amount.is_positive() || self.months == 0
    }

    /// optional boundary check; the engine itself accepts any input
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_positive() {
            return Err(CalculatorError::InvalidAmount { amount: self.amount });
        }

        if self.months == 0 {
            return Err(CalculatorError::InvalidTerm { months: self.months });
        }

        if self.monthly_rate.is_negative() {
            return Err(CalculatorError::InvalidInterestRate { rate: self.monthly_rate });
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// parse an ISO `YYYY-MM-DD` start date
pub fn parse_start_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| CalculatorError::InvalidDate {
        message: format!("{s:?}: {e}"),
    })
}

pub struct LoanRequestBuilder<'a> {
    amount: Option<Money>,
    monthly_rate: Option<Rate>,
    months: Option<u32>,
    product: Option<ProductId>,
    start_date: Option<NaiveDate>,
    grace_period_violation: bool,
    cash_withdrawal: bool,
    fee_amortized: bool,
    time_provider: Option<&'a SafeTimeProvider>,
}

impl<'a> LoanRequestBuilder<'a> {
    pub fn new() -> Self {
        Self {
            amount: None,
            monthly_rate: None,
            months: None,
            product: None,
            start_date: None,
            grace_period_violation: false,
            cash_withdrawal: false,
            fee_amortized: false,
            time_provider: None,
        }
    }

    pub fn set_time(mut self, time: &'a SafeTimeProvider) -> Self {
        self.time_provider = Some(time);
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn monthly_rate(mut self, rate: Rate) -> Self {
        self.monthly_rate = Some(rate);
        self
    }

    /// monthly rate in percentage points (1.99 for 1.99%)
    pub fn monthly_rate_percent(mut self, percent: Decimal) -> Self {
        self.monthly_rate = Some(Rate::from_percent(percent));
        self
    }

    pub fn months(mut self, months: u32) -> Self {
        self.months = Some(months);
        self
    }

    pub fn product(mut self, product: ProductId) -> Self {
        self.product = Some(product);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn grace_period_violation(mut self, on: bool) -> Self {
        self.grace_period_violation = on;
        self
    }

    pub fn cash_withdrawal(mut self, on: bool) -> Self {
        self.cash_withdrawal = on;
        self
    }

    pub fn fee_amortized(mut self, on: bool) -> Self {
        self.fee_amortized = on;
        self
    }

    /// Build with stored time or system time if not set
    pub fn build(self) -> Result<LoanRequest> {
        if let Some(time) = self.time_provider {
            self.build_with_time(time)
        } else {
            let time = SafeTimeProvider::new(TimeSource::System);
            self.build_with_time(&time)
        }
    }

    /// Build with explicit time provider, used only when no start date was given
    pub fn build_with_time(self, time_provider: &SafeTimeProvider) -> Result<LoanRequest> {
        let product = self.product.ok_or(CalculatorError::InvalidConfiguration {
            message: "Product required".to_string(),
        })?;

        let amount = self.amount.ok_or(CalculatorError::InvalidConfiguration {
            message: "Amount required".to_string(),
        })?;

        let months = self.months.ok_or(CalculatorError::InvalidConfiguration {
            message: "Term required".to_string(),
        })?;

        let config = ProductConfig::for_product(product);
        let monthly_rate = self.monthly_rate.unwrap_or_else(|| config.nominal_rate(months));
        let start_date = self.start_date.unwrap_or_else(|| time_provider.now().date_naive());

        let mut flags = LoanFlags::default();
        flags.set_grace_period_violation(self.grace_period_violation);
        flags.set_cash_withdrawal(self.cash_withdrawal);
        flags.set_fee_amortized(self.fee_amortized);

        Ok(LoanRequest {
            amount,
            monthly_rate,
            months,
            product,
            start_date,
            flags: flags.for_product(&config),
        })
    }
}

impl<'a> Default for LoanRequestBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2025, 11, 20, 9, 30, 0).unwrap()
        ))
    }

    #[test]
    fn test_builder_defaults_rate_and_date() {
        let time = test_time();

        let request = LoanRequest::builder()
            .product(ProductId::TieredInstallment)
            .amount(Money::from_major(3_000))
            .months(12)
            .set_time(&time)
            .build()
            .unwrap();

        assert_eq!(request.monthly_rate, Rate::from_percent(dec!(2.99)));
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2025, 11, 20).unwrap());
        assert_eq!(request.flags, LoanFlags::default());
    }

    #[test]
    fn test_builder_explicit_values_win() {
        let time = test_time();
        let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let request = LoanRequest::builder()
            .product(ProductId::StandardDueCreditCard)
            .amount(Money::from_major(10_000))
            .monthly_rate_percent(dec!(2.5))
            .months(6)
            .start_date(start)
            .set_time(&time)
            .build()
            .unwrap();

        assert_eq!(request.monthly_rate.as_decimal(), dec!(0.025));
        assert_eq!(request.start_date, start);
    }

    #[test]
    fn test_builder_requires_fields() {
        let time = test_time();

        let missing_amount = LoanRequest::builder()
            .product(ProductId::FixedRateInstallment)
            .months(3)
            .build_with_time(&time);
        assert!(matches!(missing_amount, Err(CalculatorError::InvalidConfiguration { .. })));

        let missing_product = LoanRequest::builder()
            .amount(Money::from_major(3_000))
            .months(3)
            .build_with_time(&time);
        assert!(matches!(missing_product, Err(CalculatorError::InvalidConfiguration { .. })));

        let missing_term = LoanRequest::builder()
            .product(ProductId::FixedRateInstallment)
            .amount(Money::from_major(3_000))
            .build_with_time(&time);
        assert!(matches!(missing_term, Err(CalculatorError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_builder_drops_card_flags_for_installments() {
        let time = test_time();

        let request = LoanRequest::builder()
            .product(ProductId::FixedRateInstallment)
            .amount(Money::from_major(3_000))
            .months(3)
            .grace_period_violation(true)
            .cash_withdrawal(true)
            .fee_amortized(true)
            .set_time(&time)
            .build()
            .unwrap();

        assert_eq!(request.flags, LoanFlags::default());
    }

    #[test]
    fn test_fee_amortized_requires_cash_withdrawal() {
        let time = test_time();

        let request = LoanRequest::builder()
            .product(ProductId::FixedDueCreditCard)
            .amount(Money::from_major(3_000))
            .months(3)
            .fee_amortized(true)
            .set_time(&time)
            .build()
            .unwrap();
        assert!(!request.flags.fee_amortized);

        let mut flags = LoanFlags::default();
        flags.set_cash_withdrawal(true);
        flags.set_fee_amortized(true);
        assert!(flags.fee_amortized);

        flags.set_cash_withdrawal(false);
        assert!(!flags.fee_amortized);

        // switching cash withdrawal back on does not restore amortization
        flags.set_cash_withdrawal(true);
        assert!(!flags.fee_amortized);
    }

    #[test]
    fn test_validate() {
        let time = test_time();
        let base = LoanRequest::builder()
            .product(ProductId::StandardDueCreditCard)
            .amount(Money::from_major(3_000))
            .months(3)
            .set_time(&time)
            .build()
            .unwrap();
        assert!(base.validate().is_ok());

        let zero_amount = LoanRequest { amount: Money::ZERO, ..base.clone() };
        assert!(matches!(zero_amount.validate(), Err(CalculatorError::InvalidAmount { .. })));

        let zero_term = LoanRequest { months: 0, ..base.clone() };
        assert!(matches!(zero_term.validate(), Err(CalculatorError::InvalidTerm { months: 0 })));

        let negative_rate = LoanRequest {
            monthly_rate: Rate::from_percent(dec!(-1)),
            ..base
        };
        assert!(matches!(
            negative_rate.validate(),
            Err(CalculatorError::InvalidInterestRate { .. })
        ));
    }

    #[test]
    fn test_parse_start_date() {
        assert_eq!(
            parse_start_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(matches!(
            parse_start_date("2025-02-30"),
            Err(CalculatorError::InvalidDate { .. })
        ));
        assert!(parse_start_date("28.02.2025").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{
            "amount": "3000",
            "monthly_rate": "0.031",
            "months": 3,
            "product": "monobank_black",
            "start_date": "2025-01-15",
            "flags": { "grace_period_violation": true, "cash_withdrawal": false, "fee_amortized": false }
        }"#;

        let request = LoanRequest::from_json(json).unwrap();
        assert_eq!(request.product, ProductId::StandardDueCreditCard);
        assert_eq!(request.amount, Money::from_major(3_000));
        assert!(request.flags.grace_period_violation);

        let again = LoanRequest::from_json(&request.to_json_pretty().unwrap()).unwrap();
        assert_eq!(again, request);
    }

    #[test]
    fn test_json_flags_default_when_missing() {
        let json = r#"{
            "amount": "3000",
            "monthly_rate": "0.0199",
            "months": 3,
            "product": "pumb_installment",
            "start_date": "2025-01-15"
        }"#;

        let request = LoanRequest::from_json(json).unwrap();
        assert_eq!(request.flags, LoanFlags::default());
        assert!(matches!(
            LoanRequest::from_json("{}"),
            Err(CalculatorError::Serialization(_))
        ));
    }
}
