/// product comparison - same purchase across every product
use consumer_credit_rs::{AmortizationEngine, LoanRequest, Money, ProductConfig, ProductId};
use consumer_credit_rs::{SafeTimeProvider, TimeSource};
use chrono::{TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== product comparison ===\n");

    // fixed clock so the start date is reproducible
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    ));

    let engine = AmortizationEngine::new();
    let amount = Money::from_major(10_000);

    for months in [6, 12, 24] {
        println!("--- {} months ---", months);

        for product in ProductId::ALL {
            let config = ProductConfig::for_product(product);
            let request = LoanRequest::builder()
                .product(product)
                .amount(amount)
                .months(months)
                .set_time(&time)
                .build()?;

            let result = engine.compute(&request);
            println!(
                "{:<28} rate {:>6}  monthly {:>10}  interest {:>10}",
                product.display_name(),
                config.nominal_rate(months).to_string(),
                result.monthly_payment,
                result.total_interest,
            );
        }
        println!();
    }

    Ok(())
}
