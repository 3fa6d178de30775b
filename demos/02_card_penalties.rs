/// card penalties - grace period violations and cash withdrawal fees
use consumer_credit_rs::{calculate, LoanRequest, LoanResult, Money, ProductId, ScheduleEvent};
use consumer_credit_rs::chrono::NaiveDate;

fn print_schedule(title: &str, result: &LoanResult) {
    println!("{}", title);
    println!("{:>5} {:>12} {:>10} {:>10} {:>10} {:>10}", "month", "date", "payment", "interest", "principal", "balance");
    for row in &result.schedule {
        println!(
            "{:>5} {:>12} {:>10} {:>10} {:>10} {:>10}{}",
            row.month,
            row.payment_date,
            row.payment,
            row.interest,
            row.principal,
            row.balance,
            if row.is_penalty_month { "  *" } else { "" },
        );
    }
    println!("total interest: {}\n", result.total_interest);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== card penalties ===\n");

    let start = NaiveDate::from_ymd_opt(2025, 1, 15).ok_or("bad date")?;

    for product in [ProductId::FixedDueCreditCard, ProductId::StandardDueCreditCard] {
        let base = LoanRequest::builder()
            .product(product)
            .amount(Money::from_major(3_000))
            .months(6)
            .start_date(start);

        let plain = calculate(&base.build()?);
        print_schedule(&format!("{} - paid on time", product.display_name()), &plain);

        let late = LoanRequest::builder()
            .product(product)
            .amount(Money::from_major(3_000))
            .months(6)
            .start_date(start)
            .grace_period_violation(true)
            .build()?;
        let late = calculate(&late);
        print_schedule(&format!("{} - grace period missed", product.display_name()), &late);

        for event in &late.events {
            if let ScheduleEvent::PenaltyInterestApplied { month, amount, days_charged } = event {
                match days_charged {
                    Some(days) => println!("penalty {} for {} days in month {}", amount, days, month),
                    None => println!("penalty {} in month {}", amount, month),
                }
            }
        }

        let cash = LoanRequest::builder()
            .product(product)
            .amount(Money::from_major(3_000))
            .months(6)
            .start_date(start)
            .cash_withdrawal(true)
            .fee_amortized(true)
            .build()?;
        let cash = calculate(&cash);
        print_schedule(&format!("{} - cash withdrawal, fee spread", product.display_name()), &cash);
    }

    Ok(())
}
