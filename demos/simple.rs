//! Scalar values across the bridge in both directions.
//!
//! Run with: cargo run --example simple

use asmarshal::{boolean, date, number, Number};
use chrono::NaiveDate;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Booleans cross with an initial capital.
    println!("true encodes as: {}", boolean::encode(true));
    println!("\"YES\" decodes as: {}", boolean::decode("YES"));
    println!("\"maybe\" decodes as: {}", boolean::decode("maybe"));

    // Numbers come back tagged with the kind that parsed.
    let int = number::decode("42")?;
    let float = number::decode("3.14")?;
    println!("42 decodes as: {:?}", int);
    println!("3.14 decodes as: {:?}", float);
    assert_eq!(int, Number::Integer(42));
    assert_eq!(float, Number::Float(3.14));

    // Dates use the long textual form the runtime prints.
    let launch = NaiveDate::from_ymd_opt(1999, 3, 24)
        .ok_or("bad date")?
        .and_hms_opt(18, 30, 0)
        .ok_or("bad time")?;
    let wire = date::encode(&launch);
    println!("date encodes as: {}", wire);
    assert_eq!(date::decode(&wire)?, launch);
    println!("✓ Round-trip successful");

    Ok(())
}
