//! Property-based tests - pragmatic approach testing codec guarantees
//! across generated inputs.
//!
//! Item and key strategies stay away from the structural characters
//! (`|{}<>=`), which the format cannot escape; the grammar tests pin what
//! happens when they do appear.

use asmarshal::{boolean, mapping, number, record, sequence, Number, Record, Value};
use proptest::prelude::*;

fn safe_item() -> impl Strategy<Value = String> {
    "[a-z0-9 .,]{1,12}"
}

fn safe_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

proptest! {
    #[test]
    fn prop_boolean_round_trip(flag in any::<bool>()) {
        prop_assert_eq!(boolean::decode(boolean::encode(flag)), flag);
        prop_assert_eq!(boolean::decode_strict(boolean::encode(flag)), Ok(flag));
    }

    #[test]
    fn prop_boolean_decode_never_panics(text in ".*") {
        let _ = boolean::decode(&text);
        let _ = boolean::decode_strict(&text);
    }

    #[test]
    fn prop_integer_round_trip(n in any::<i64>()) {
        let back = number::decode(&number::encode(&Number::Integer(n)));
        prop_assert_eq!(back, Ok(Number::Integer(n)));
    }

    #[test]
    fn prop_float_value_preserved(f in -1.0e15f64..1.0e15f64) {
        // An integral float prints without a dot and comes back as an
        // integer, so compare the numeric value, not the variant.
        let back = number::decode(&number::encode(&Number::Float(f)));
        prop_assert_eq!(back.map(|n| n.as_f64()), Ok(f));
    }

    #[test]
    fn prop_number_decode_never_panics(text in ".*") {
        let _ = number::decode(&text);
    }

    #[test]
    fn prop_sequence_round_trip(items in prop::collection::vec(safe_item(), 0..8)) {
        let wire = sequence::encode(&items);
        prop_assert_eq!(sequence::decode(&wire), items.clone());
        prop_assert_eq!(sequence::decode_strict(&wire), Ok(items));
    }

    #[test]
    fn prop_sequence_decode_never_panics(text in ".*") {
        let _ = sequence::decode(&text);
        let _ = sequence::decode_strict(&text);
    }

    #[test]
    fn prop_nested_sequence_two_pass(
        rows in prop::collection::vec(prop::collection::vec(safe_item(), 1..5), 1..5)
    ) {
        let encoded_rows: Vec<String> = rows.iter().map(|row| sequence::encode(row)).collect();
        let wire = sequence::encode(&encoded_rows);

        let outer = sequence::decode(&wire);
        prop_assert_eq!(&outer, &encoded_rows);

        for (decoded, original) in outer.iter().map(|row| sequence::decode(row)).zip(&rows) {
            prop_assert_eq!(&decoded, original);
        }
    }

    #[test]
    fn prop_mapping_round_trip(
        pairs in prop::collection::vec((safe_key(), safe_item()), 1..8)
    ) {
        let mut expected = indexmap::IndexMap::new();
        let mut rec = Record::new();
        for (key, value) in &pairs {
            expected.insert(key.clone(), value.clone());
            rec.insert(key.clone(), Value::from(value.clone()));
        }

        let decoded = mapping::decode(&mapping::encode(&rec)).unwrap();
        prop_assert_eq!(decoded, expected);
    }

    #[test]
    fn prop_mapping_decode_never_panics(text in ".*") {
        let _ = mapping::decode(&text);
    }

    #[test]
    fn prop_record_macro_matches_manual_build(
        key in safe_key(),
        value in safe_item()
    ) {
        let via_macro = record! { key.clone() => value.clone() };
        let mut manual = Record::new();
        manual.insert(key, Value::from(value));
        prop_assert_eq!(via_macro, manual);
    }
}
