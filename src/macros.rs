/// Builds a [`Record`](crate::Record) from `key => value` entries.
///
/// Keys are anything with a `to_string`; values are anything
/// [`Value`](crate::Value) has a `From` implementation for, so scalars,
/// strings, dates, and string vectors all work directly. Entries keep
/// their written order. A trailing comma is allowed.
///
/// # Examples
///
/// ```rust
/// use asmarshal::{mapping, record};
///
/// let record = record! {
///     "name" => "hal",
///     "awake" => true,
///     "tags" => vec!["red", "blue"],
/// };
///
/// assert_eq!(mapping::encode(&record), "<name=hal><awake=True><tags={red|blue}>");
/// ```
#[macro_export]
macro_rules! record {
    // Handle empty record
    () => {
        $crate::Record::new()
    };

    // Handle one or more entries
    ( $($key:expr => $value:expr),+ $(,)? ) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($key.to_string(), $crate::Value::from($value));
        )+
        record
    }};
}

#[cfg(test)]
mod tests {
    use crate::{mapping, Record, Value};

    #[test]
    fn test_record_macro_empty() {
        assert_eq!(record! {}, Record::new());
    }

    #[test]
    fn test_record_macro_entries() {
        let record = record! {
            "a" => 1,
            "b" => "text",
            "c" => false,
        };
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("a"), Some(&Value::from(1)));
        assert_eq!(record.get("b"), Some(&Value::from("text")));
        assert_eq!(record.get("c"), Some(&Value::from(false)));
    }

    #[test]
    fn test_record_macro_sequence_values() {
        let record = record! { "xs" => vec!["1", "2"] };
        assert_eq!(mapping::encode(&record), "<xs={1|2}>");
    }

    #[test]
    fn test_record_macro_duplicate_key_keeps_position() {
        let record = record! { "a" => 1, "b" => 2, "a" => 3 };
        assert_eq!(mapping::encode(&record), "<a=3><b=2>");
    }

    #[test]
    fn test_record_macro_computed_keys() {
        let prefix = "item";
        let record = record! { format!("{prefix}_1") => "x" };
        assert!(record.contains_key("item_1"));
    }
}
