/// json exchange - read a request and write the schedule as json
use consumer_credit_rs::{calculate, LoanRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== json exchange ===\n");

    let input = r#"{
        "amount": "10000",
        "monthly_rate": "0.0199",
        "months": 7,
        "product": "pumb_installment",
        "start_date": "2025-05-31"
    }"#;

    let request = LoanRequest::from_json(input)?;
    request.validate()?;

    println!("request:");
    println!("{}", request.to_json_pretty()?);

    let result = calculate(&request);
    println!("\nresult:");
    println!("{}", result.to_json_pretty()?);

    Ok(())
}
