use log::{trace, warn};
use rust_decimal::Decimal;

use crate::config::ProductConfig;
use crate::decimal::Money;
use crate::events::{EventStore, ScheduleEvent};
use crate::interest::{annuity_payment, CashWithdrawalFee, PenaltyCalculation, PenaltyEngine};
use crate::payments::dates::DateScheduler;
use crate::payments::{AmortizationRow, LoanResult};
use crate::request::LoanRequest;
use crate::types::{AmortizationModel, DateRule};

/// principal and payment settled for one installment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Installment {
    pub principal: Money,
    pub payment: Money,
    /// charges exceeded the payment and only interest was collected
    pub clamped: bool,
}

/// split a payment into principal, closing the loan on the final month
///
/// When interest plus penalties and fees exceed the payment the borrower pays
/// interest only and the balance does not move. This is a flat policy, not a
/// model of collections or capitalisation.
pub fn settle_installment(balance: Money, interest: Money, payment: Money, is_final: bool) -> Installment {
    let (principal, payment) = if is_final {
        (balance, balance + interest)
    } else {
        (payment - interest, payment)
    };

    if principal.is_negative() {
        Installment {
            principal: Money::ZERO,
            payment: interest,
            clamped: true,
        }
    } else {
        Installment {
            principal,
            payment,
            clamped: false,
        }
    }
}

/// remaining balance below a cent is treated as repaid
fn close_dust(balance: Money) -> Money {
    if balance < Money::CENT {
        Money::ZERO
    } else {
        balance
    }
}

/// builds a payment schedule for one product
pub struct AmortizationCalculator {
    config: ProductConfig,
    scheduler: DateScheduler,
}

impl AmortizationCalculator {
    pub fn new(config: ProductConfig) -> Self {
        let scheduler = DateScheduler::new(config.date_rule);
        Self { config, scheduler }
    }

    /// calculate the full schedule; `request` must not be degenerate
    pub fn calculate(&self, request: &LoanRequest, events: &mut EventStore) -> LoanResult {
        match self.config.model {
            AmortizationModel::RevolvingBalance => self.calculate_revolving_balance(request, events),
            AmortizationModel::FlatCommission => self.calculate_flat_commission(request, events),
        }
    }

    /// annuity on the outstanding balance with penalty and fee injection
    fn calculate_revolving_balance(&self, request: &LoanRequest, events: &mut EventStore) -> LoanResult {
        let amount = request.amount;
        let rate = request.monthly_rate;
        let months = request.months;
        let flags = request.flags;

        let base_payment = annuity_payment(amount, rate, months).round_cents();

        let fee = match (flags.cash_withdrawal, self.config.cash_withdrawal) {
            (true, Some(terms)) => Some(CashWithdrawalFee::new(amount, &terms, flags.fee_amortized, months)),
            _ => None,
        };

        let penalty: Option<PenaltyCalculation> = match (flags.grace_period_violation, self.config.grace_penalty) {
            (true, Some(rule)) => {
                let first_due = self.scheduler.first_payment_date(request.start_date);
                Some(PenaltyEngine::new(rule).calculate_penalty(
                    amount,
                    rate,
                    request.start_date,
                    first_due,
                    months,
                ))
            }
            _ => None,
        };

        let mut schedule = Vec::with_capacity(months as usize);
        let mut balance = amount;
        let mut total_interest = Money::ZERO;

        for month in 1..=months {
            let mut interest = balance.apply_rate(rate).round_cents();
            let mut payment = base_payment;
            let mut is_penalty_month = false;

            if let Some(penalty) = penalty.as_ref().filter(|p| p.applies_to(month)) {
                interest += penalty.penalty_amount;
                payment += penalty.penalty_amount;
                is_penalty_month = true;
                events.emit(ScheduleEvent::PenaltyInterestApplied {
                    month,
                    amount: penalty.penalty_amount,
                    days_charged: penalty.days_charged,
                });
            }

            if let Some(fee) = fee.as_ref() {
                let charge = fee.charge_for_month(month);
                if charge.is_positive() {
                    interest += charge;
                    payment += charge;
                    events.emit(ScheduleEvent::CashWithdrawalFeeCharged {
                        month,
                        amount: charge,
                        amortized: fee.amortized,
                    });
                }
            }

            let installment = settle_installment(balance, interest, payment, month == months);
            if installment.clamped {
                warn!(
                    "{}: charges of {} exceed payment {} in month {}, collecting interest only",
                    self.config.product, interest, payment, month
                );
                events.emit(ScheduleEvent::NegativeAmortizationClamped {
                    month,
                    interest,
                    scheduled_payment: payment,
                });
            }

            balance = close_dust(balance - installment.principal);
            total_interest += interest;

            let row = AmortizationRow {
                month,
                payment_date: self.scheduler.row_date(request.start_date, month),
                payment: installment.payment.round_cents(),
                interest: interest.round_cents(),
                principal: installment.principal.round_cents(),
                balance: balance.round_cents(),
                is_penalty_month,
            };
            trace!("{}: {:?}", self.config.product, row);
            schedule.push(row);
        }

        let total_interest = total_interest.round_cents();
        self.emit_closed(&schedule, events);

        LoanResult {
            monthly_payment: base_payment,
            total_payment: amount + total_interest,
            total_interest,
            schedule,
            events: Vec::new(),
        }
    }

    /// commission on the original principal, level installments
    fn calculate_flat_commission(&self, request: &LoanRequest, events: &mut EventStore) -> LoanResult {
        let amount = request.amount;
        let months = request.months;
        let term = Decimal::from(months);

        let total_commission = amount.apply_rate(request.monthly_rate.times(months)).round_cents();
        let total_payment = amount + total_commission;
        let monthly_payment = (total_payment / term).round_cents();
        let commission_share = total_commission / term;

        // installments always follow the calendar month, whatever the product's card rule
        let scheduler = DateScheduler::new(DateRule::Standard);

        let mut schedule = Vec::with_capacity(months as usize);
        let mut balance = amount;
        let mut accumulated_principal = Money::ZERO;

        for month in 1..=months {
            let (principal, commission) = if month == months {
                let principal = amount - accumulated_principal;
                (principal, monthly_payment - principal)
            } else {
                (monthly_payment - commission_share, commission_share)
            };

            accumulated_principal += principal;
            balance = close_dust(balance - principal);

            let row = AmortizationRow {
                month,
                payment_date: scheduler.row_date(request.start_date, month),
                payment: monthly_payment,
                interest: commission.round_cents(),
                principal: principal.round_cents(),
                balance: balance.round_cents(),
                is_penalty_month: false,
            };
            trace!("{}: {:?}", self.config.product, row);
            schedule.push(row);
        }

        self.emit_closed(&schedule, events);

        LoanResult {
            monthly_payment,
            total_payment,
            total_interest: total_commission,
            schedule,
            events: Vec::new(),
        }
    }

    fn emit_closed(&self, schedule: &[AmortizationRow], events: &mut EventStore) {
        if let Some(last) = schedule.last() {
            events.emit(ScheduleEvent::LoanClosed {
                month: last.month,
                final_payment: last.payment,
                payment_date: last.payment_date,
            });
        }
    }
}
