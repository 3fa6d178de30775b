use log::debug;

use crate::config::ProductConfig;
use crate::events::EventStore;
use crate::payments::{AmortizationCalculator, LoanResult};
use crate::request::LoanRequest;

/// entry point for schedule calculations
///
/// The engine never fails. A request with no positive amount or no term yields
/// [`LoanResult::zero`]; callers wanting to reject such input use
/// [`LoanRequest::validate`] first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationEngine;

impl AmortizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// schedule for the request's product preset
    pub fn compute(&self, request: &LoanRequest) -> LoanResult {
        self.compute_with_config(request, &request.config())
    }

    /// schedule under explicit product parameters
    pub fn compute_with_config(&self, request: &LoanRequest, config: &ProductConfig) -> LoanResult {
        if request.is_degenerate() {
            debug!(
                "{}: nothing to schedule for amount {} over {} months",
                request.product, request.amount, request.months
            );
            return LoanResult::zero();
        }

        debug!(
            "{}: scheduling {} at {} over {} months from {}",
            request.product, request.amount, request.monthly_rate, request.months, request.start_date
        );

        let mut events = EventStore::new();
        let calculator = AmortizationCalculator::new(config.clone());
        let mut result = calculator.calculate(request, &mut events);
        result.events = events.take_events();

        debug!(
            "{}: monthly {} total {} interest {}",
            request.product, result.monthly_payment, result.total_payment, result.total_interest
        );

        result
    }
}
