use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// notable charges and adjustments made while building a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScheduleEvent {
    PenaltyInterestApplied {
        month: u32,
        amount: Money,
        /// actual days charged, for day-count penalties
        days_charged: Option<u32>,
    },
    CashWithdrawalFeeCharged {
        month: u32,
        amount: Money,
        amortized: bool,
    },
    /// charges exceeded the installment, so only interest was paid that month
    NegativeAmortizationClamped {
        month: u32,
        interest: Money,
        scheduled_payment: Money,
    },
    LoanClosed {
        month: u32,
        final_payment: Money,
        payment_date: NaiveDate,
    },
}

impl ScheduleEvent {
    pub fn month(&self) -> u32 {
        match self {
            ScheduleEvent::PenaltyInterestApplied { month, .. }
            | ScheduleEvent::CashWithdrawalFeeCharged { month, .. }
            | ScheduleEvent::NegativeAmortizationClamped { month, .. }
            | ScheduleEvent::LoanClosed { month, .. } => *month,
        }
    }
}

/// event store for collecting events during a calculation
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<ScheduleEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: ScheduleEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<ScheduleEvent> {
        std::mem::take(&mut self.events)
    }
}
