/// quick start - minimal example to get started
use consumer_credit_rs::{calculate, LoanRequest, Money, ProductId};
use consumer_credit_rs::chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 3,000 spread over three months on a card
    let request = LoanRequest::builder()
        .product(ProductId::StandardDueCreditCard)
        .amount("3000.00".parse::<Money>()?)
        .months(3)
        .start_date(NaiveDate::from_ymd_opt(2025, 1, 15).ok_or("bad date")?)
        .build()?;

    let result = calculate(&request);

    println!("monthly payment: {}", result.monthly_payment);
    println!("total payment:   {}", result.total_payment);
    println!("total interest:  {}", result.total_interest);

    Ok(())
}
