pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod events;
pub mod interest;
pub mod payments;
pub mod request;
pub mod types;

// re-export key types
pub use config::{CashWithdrawalTerms, ProductConfig, RateRule};
pub use decimal::{Money, Rate};
pub use engine::AmortizationEngine;
pub use errors::{CalculatorError, Result};
pub use events::{EventStore, ScheduleEvent};
pub use interest::{annuity_payment, CashWithdrawalFee, PenaltyCalculation, PenaltyEngine, PenaltyRule};
pub use payments::{AmortizationCalculator, AmortizationRow, DateScheduler, LoanResult};
pub use request::{parse_start_date, LoanFlags, LoanRequest, LoanRequestBuilder};
pub use types::{AmortizationModel, DateRule, ProductId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;

/// payment schedule for a request under its product's preset terms
pub fn calculate(request: &LoanRequest) -> LoanResult {
    AmortizationEngine::new().compute(request)
}
