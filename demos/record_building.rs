//! Building records and round-tripping them through the wire form.
//!
//! Run with: cargo run --example record_building

use asmarshal::{boolean, mapping, number, record, sequence, Record, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // The record! macro converts values through Value::from.
    let request = record! {
        "name" => "hal",
        "awake" => true,
        "port" => 2600,
        "memories" => vec!["pod bay", "doors"],
    };

    let wire = mapping::encode(&request);
    println!("record on the wire: {}", wire);

    // Decoding returns raw text per key, in pair order.
    let entries = mapping::decode(&wire)?;
    for (key, value) in &entries {
        println!("  {} = {}", key, value);
    }

    // Each value gets the decoder its kind calls for.
    assert!(boolean::decode(&entries["awake"]));
    assert_eq!(number::decode(&entries["port"])?.as_i64(), Some(2600));
    assert_eq!(sequence::decode(&entries["memories"]).len(), 2);

    // Records can also be built incrementally; order is preserved.
    let mut reply = Record::new();
    reply.insert("status".to_string(), Value::from("ok"));
    reply.insert("codes".to_string(), Value::from(vec!["200", "204"]));
    println!("reply on the wire: {}", mapping::encode(&reply));

    println!("✓ Round-trip successful");
    Ok(())
}
