//! End-to-end scenarios: values out across the bridge and back, decoded
//! kind by kind the way a caller drives the runtime.

use asmarshal::{boolean, date, mapping, number, record, sequence, Number, Record, Value};
use chrono::NaiveDate;

#[test]
fn test_scalar_round_trips() {
    for flag in [true, false] {
        assert_eq!(boolean::decode(boolean::encode(flag)), flag);
    }

    for literal in ["0", "-7", "42", "3.5", "-0.25"] {
        let n = number::decode(literal).unwrap();
        assert_eq!(number::encode(&n), literal);
    }

    let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(23, 1, 2)
        .unwrap();
    assert_eq!(date::decode(&date::encode(&dt)), Ok(dt));
}

#[test]
fn test_request_reply_exchange() {
    // What a caller sends to the runtime...
    let request = record! {
        "app" => "Finder",
        "count" => 3,
        "recurse" => false,
    };
    let outgoing = mapping::encode(&request);
    assert_eq!(outgoing, "<app=Finder><count=3><recurse=False>");

    // ...and what a reply looks like on the way back in.
    let incoming = "<status=ok><matches={Notes|Mail|Music}><elapsed=0.42>";
    let entries = mapping::decode(incoming).unwrap();

    assert_eq!(entries["status"], "ok");
    assert_eq!(
        sequence::decode(&entries["matches"]),
        vec!["Notes", "Mail", "Music"]
    );
    assert_eq!(
        number::decode(&entries["elapsed"]),
        Ok(Number::Float(0.42))
    );
}

#[test]
fn test_record_with_every_value_kind() {
    let moment = NaiveDate::from_ymd_opt(1984, 1, 24)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let record = record! {
        "label" => "backup",
        "enabled" => true,
        "retries" => 5,
        "timeout" => 1.5,
        "started" => moment,
        "volumes" => vec!["Macintosh HD", "Time Machine"],
    };

    let entries = mapping::decode(&mapping::encode(&record)).unwrap();

    assert_eq!(entries["label"], "backup");
    assert!(boolean::decode(&entries["enabled"]));
    assert_eq!(number::decode(&entries["retries"]).unwrap().as_i64(), Some(5));
    assert_eq!(number::decode(&entries["timeout"]).unwrap().as_f64(), 1.5);
    assert_eq!(date::decode(&entries["started"]), Ok(moment));
    assert_eq!(
        sequence::decode(&entries["volumes"]),
        vec!["Macintosh HD", "Time Machine"]
    );
}

#[test]
fn test_matrix_through_two_passes() {
    let rows: Vec<String> = (0..4)
        .map(|r| sequence::encode(&[r * 3, r * 3 + 1, r * 3 + 2]))
        .collect();
    let wire = sequence::encode(&rows);

    let back: Vec<Vec<String>> = sequence::decode(&wire)
        .iter()
        .map(|row| sequence::decode(row))
        .collect();

    assert_eq!(back.len(), 4);
    assert_eq!(back[0], vec!["0", "1", "2"]);
    assert_eq!(back[3], vec!["9", "10", "11"]);
}

#[test]
fn test_sequence_of_records() {
    let users = vec![
        record! { "name" => "ada", "id" => 1 },
        record! { "name" => "grace", "id" => 2 },
    ];
    let items: Vec<String> = users.iter().map(mapping::encode).collect();
    let wire = sequence::encode(&items);
    assert_eq!(wire, "{<name=ada><id=1>|<name=grace><id=2>}");

    let decoded: Vec<_> = sequence::decode(&wire)
        .iter()
        .map(|item| mapping::decode(item).unwrap())
        .collect();
    assert_eq!(decoded[0]["name"], "ada");
    assert_eq!(decoded[1]["id"], "2");
}

#[test]
fn test_record_mutation_then_encode() {
    let mut record = Record::new();
    record.insert("a".to_string(), Value::from("1"));
    record.insert("b".to_string(), Value::from("2"));
    record.insert("a".to_string(), Value::from("3"));
    record.remove("b");
    record.insert("c".to_string(), Value::from(vec!["x", "y"]));

    assert_eq!(mapping::encode(&record), "<a=3><c={x|y}>");
}

#[test]
fn test_strict_decoders_accept_encoder_output() {
    let wire = sequence::encode(&["alpha", "beta"]);
    assert_eq!(
        sequence::decode_strict(&wire).unwrap(),
        vec!["alpha", "beta"]
    );

    assert_eq!(boolean::decode_strict(boolean::encode(false)), Ok(false));
    assert_eq!(boolean::decode_strict(boolean::encode(true)), Ok(true));
}

#[test]
fn test_empty_record_does_not_round_trip() {
    // Zero pairs have no wire form; the decoder refuses the empty string.
    let wire = mapping::encode(&Record::new());
    assert_eq!(wire, "");
    assert!(mapping::decode(&wire).is_err());
}
