//! Two-pass decoding of nested sequences.
//!
//! Run with: cargo run --example nested_sequences

use asmarshal::sequence;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A matrix goes out as a sequence of encoded rows.
    let rows = vec![
        sequence::encode(&[1, 2, 3]),
        sequence::encode(&[4, 5, 6]),
        sequence::encode(&[7, 8, 9]),
    ];
    let wire = sequence::encode(&rows);
    println!("matrix on the wire: {}", wire);

    // First pass splits at depth one only; rows stay intact.
    let outer = sequence::decode(&wire);
    println!("first pass: {:?}", outer);

    // Second pass decodes each row.
    let matrix: Vec<Vec<String>> = outer.iter().map(|row| sequence::decode(row)).collect();
    println!("second pass: {:?}", matrix);
    assert_eq!(matrix[1], vec!["4", "5", "6"]);

    // Malformed input degrades instead of failing...
    println!("stray text decodes as: {:?}", sequence::decode("no braces"));

    // ...unless you opt into the strict scanner.
    match sequence::decode_strict("{a|b") {
        Ok(items) => println!("unexpected: {:?}", items),
        Err(err) => println!("strict decode rejects it: {}", err),
    }

    println!("✓ Round-trip successful");
    Ok(())
}
