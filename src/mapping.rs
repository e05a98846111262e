//! Associative-array conversions across the string bridge.
//!
//! A mapping travels as a run of angle-bracketed pairs, `<key=value><key=value>`,
//! with no separator between pairs. Keys and values are plain text on the
//! wire; a value that is itself a sequence or number is simply its encoded
//! form, decoded in a second pass by the caller.
//!
//! Encoding starts from a [`Record`], an insertion-ordered map of
//! [`Value`]s, so the pair order on the wire is the order entries were
//! added. Decoding returns the raw key/value text in the same order, with
//! a duplicated key keeping its first position and final value.
//!
//! ## Examples
//!
//! ```rust
//! use asmarshal::{mapping, record};
//!
//! let record = record! {
//!     "name" => "hal",
//!     "tags" => vec!["red", "blue"],
//! };
//!
//! let wire = mapping::encode(&record);
//! assert_eq!(wire, "<name=hal><tags={red|blue}>");
//!
//! let entries = mapping::decode(&wire).unwrap();
//! assert_eq!(entries["name"], "hal");
//! assert_eq!(entries["tags"], "{red|blue}");
//! ```

use crate::error::{Error, Result};
use crate::number::Number;
use crate::{boolean, date, number, sequence};
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// A value that can sit on the right-hand side of a mapping pair.
///
/// The wire has only two shapes a pair value can take without a further
/// decoding pass: flat text and a brace-wrapped sequence. Everything else
/// (booleans, numbers, dates) is converted to its text form on the way in
/// via the [`From`] implementations below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Text(String),
    Sequence(Vec<String>),
}

impl Value {
    /// Returns `true` if this is a text value.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if this is a sequence value.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns the text if this is a text value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmarshal::Value;
    ///
    /// assert_eq!(Value::from("hal").as_text(), Some("hal"));
    /// assert_eq!(Value::from(vec!["a"]).as_text(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Sequence(_) => None,
        }
    }

    /// Returns the items if this is a sequence value.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Value::Text(_) => None,
            Value::Sequence(items) => Some(items),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value exactly as it appears on the wire: text as-is,
    /// sequences in their braced form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Sequence(items) => f.write_str(&sequence::encode(items)),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Text(boolean::encode(value).to_string())
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Text(number::encode(&value))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Text(date::encode(&value))
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::Sequence(items.into_iter().map(ToString::to_string).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Value::Sequence(items.iter().map(ToString::to_string).collect())
    }
}

macro_rules! value_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::from(Number::from(value))
                }
            }
        )+
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64);

/// An insertion-ordered record of named values.
///
/// Entries keep the order they were inserted in, which is the order their
/// pairs are written to the wire. Re-inserting an existing key replaces
/// its value but keeps its original position.
///
/// # Examples
///
/// ```rust
/// use asmarshal::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("name".to_string(), Value::from("hal"));
/// record.insert("age".to_string(), Value::from(9000));
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get("name"), Some(&Value::from("hal")));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Creates an empty record.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty record with space for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts an entry, returning the previous value for the key if any.
    ///
    /// An existing key keeps its position; a new key goes last.
    #[inline]
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns the value for `key`, if present.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Removes the entry for `key`, preserving the order of the rest.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the record contains `key`.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over keys in insertion order.
    #[inline]
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Iterates over values in insertion order.
    #[inline]
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Iterates over entries in insertion order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<IndexMap<String, Value>> for Record {
    fn from(map: IndexMap<String, Value>) -> Self {
        Record(map)
    }
}

impl From<Record> for IndexMap<String, Value> {
    fn from(record: Record) -> Self {
        record.0
    }
}

impl From<HashMap<String, Value>> for Record {
    /// Entry order follows the hash map's iteration order, which is
    /// arbitrary. Build through [`Record::insert`] when wire order matters.
    fn from(map: HashMap<String, Value>) -> Self {
        Record(map.into_iter().collect())
    }
}

impl From<Record> for HashMap<String, Value> {
    fn from(record: Record) -> Self {
        record.0.into_iter().collect()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Record(iter.into_iter().collect())
    }
}

impl Extend<(String, Value)> for Record {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Encodes a record into its wire form.
///
/// Each entry becomes `<key=value>` with the value rendered by its
/// `Display` implementation, pairs concatenated in insertion order. An
/// empty record encodes as the empty string, which [`decode`] does not
/// accept back; callers round-tripping records should treat "no pairs" as
/// a separate case.
///
/// Keys containing `=`, `<`, or `>` are written as-is and will not survive
/// a decode pass intact.
///
/// # Examples
///
/// ```rust
/// use asmarshal::{mapping, record};
///
/// let wire = mapping::encode(&record! { "a" => 1, "b" => true });
/// assert_eq!(wire, "<a=1><b=True>");
/// ```
#[must_use]
pub fn encode(record: &Record) -> String {
    let mut out = String::new();
    for (key, value) in record.iter() {
        out.push('<');
        out.push_str(key);
        out.push('=');
        out.push_str(&value.to_string());
        out.push('>');
    }
    out
}

/// Decodes a bridge associative-array string into raw key/value text.
///
/// The text must be at least three characters and contain a `<` and a
/// `>`. The first and last characters are then stripped unchecked,
/// assumed to be the outer frame; the body splits on the `><` seam
/// between pairs, and each pair splits on exactly one `=`. The returned
/// map preserves pair order; a duplicated key keeps its first position
/// and takes the last value seen.
///
/// Values come back as raw text. Sequence or number values need their own
/// decode pass, which keeps nested material like `{a|b}` out of this
/// function's way.
///
/// # Errors
///
/// Returns [`Error::InvalidArray`] when the bracket frame is missing and
/// [`Error::MalformedPair`] when a pair does not contain exactly one `=`.
///
/// # Examples
///
/// ```rust
/// use asmarshal::mapping;
///
/// let entries = mapping::decode("<a=1><b=2>").unwrap();
/// assert_eq!(entries["a"], "1");
/// assert_eq!(entries["b"], "2");
///
/// assert!(mapping::decode("a=1").is_err());
/// assert!(mapping::decode("<a>").is_err());
/// ```
pub fn decode(text: &str) -> Result<IndexMap<String, String>> {
    if text.len() < 3 || !text.contains('<') || !text.contains('>') {
        return Err(Error::invalid_array(text));
    }
    // The frame check is presence-only; the ends are stripped as-is even
    // when they are not the brackets.
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    let body = chars.as_str();
    let mut entries = IndexMap::new();
    for pair in body.split("><") {
        let mut parts = pair.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                entries.insert(key.to_string(), value.to_string());
            }
            _ => return Err(Error::malformed_pair(pair)),
        }
    }
    Ok(entries)
}
