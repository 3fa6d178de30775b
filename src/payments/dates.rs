use chrono::{Datelike, Days, Months, NaiveDate};

use crate::types::DateRule;

/// places schedule rows on the calendar according to a product's date rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateScheduler {
    rule: DateRule,
}

impl DateScheduler {
    pub fn new(rule: DateRule) -> Self {
        Self { rule }
    }

    /// due date of the first installment
    pub fn first_payment_date(&self, start: NaiveDate) -> NaiveDate {
        self.row_date(start, 1)
    }

    /// due date of the installment `month` (1-based) after `start`
    pub fn row_date(&self, start: NaiveDate, month: u32) -> NaiveDate {
        match self.rule {
            DateRule::Standard => add_months(start, month),
            DateRule::FixedDay { day } => {
                let target = add_months(first_of_month(start), month);
                clamp_to_day(target, day)
            }
        }
    }
}

/// add calendar months keeping the day of month; days the target month lacks
/// roll into the next one (Jan 31 + 1 = Mar 3, or Mar 2 in a leap year)
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(months))
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day() - 1))))
        .unwrap_or(NaiveDate::MAX)
}

/// `day` of the month containing `date`, or the month's last day if shorter
pub fn clamp_to_day(date: NaiveDate, day: u32) -> NaiveDate {
    let last = days_in_month(date.year(), date.month());
    date.with_day(day.clamp(1, last)).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
