pub mod fees;
pub mod penalty;

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

pub use fees::CashWithdrawalFee;
pub use penalty::{PenaltyCalculation, PenaltyEngine, PenaltyRule};

/// level payment that amortizes `principal` over `months` at a monthly rate
///
/// `P * r * (1 + r)^n / ((1 + r)^n - 1)`, unrounded. A zero rate (or any rate
/// that makes the denominator vanish) falls back to straight-line `P / n`, and a
/// growth factor too large for `Decimal` falls back to the interest-only limit
/// `P * r` the formula converges to, itself saturating at `Decimal::MAX`.
pub fn annuity_payment(principal: Money, monthly_rate: Rate, months: u32) -> Money {
    if months == 0 {
        return principal;
    }

    let r = monthly_rate.as_decimal();
    let straight_line = principal / Decimal::from(months);

    if r.is_zero() {
        return straight_line;
    }

    let Some(compound) = growth_factor(r, months) else {
        return principal.apply_rate(monthly_rate);
    };

    let Some(denominator) = compound.checked_sub(Decimal::ONE) else {
        return principal.apply_rate(monthly_rate);
    };
    if denominator.is_zero() {
        return straight_line;
    }

    match principal
        .as_decimal()
        .checked_mul(r)
        .and_then(|x| x.checked_mul(compound))
        .and_then(|x| x.checked_div(denominator))
    {
        Some(payment) => Money::from_decimal(payment),
        None => principal.apply_rate(monthly_rate),
    }
}

/// (1 + r)^n by repeated multiplication, `None` on overflow
fn growth_factor(r: Decimal, periods: u32) -> Option<Decimal> {
    let base = Decimal::ONE.checked_add(r)?;
    let mut compound = Decimal::ONE;
    for _ in 0..periods {
        compound = compound.checked_mul(base)?;
    }
    Some(compound)
}
