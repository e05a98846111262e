//! Sequence conversions across the string bridge.
//!
//! A sequence travels as `{item1|item2|item3}`: the whole list wrapped in
//! one brace pair, items separated by `|`. Nested sequences stay intact as
//! single items because the scanner tracks brace depth and only splits at
//! depth one, so `{a|{b|c}|d}` decodes to three items with `{b|c}` kept
//! whole for a second pass.
//!
//! [`decode`] is deliberately permissive: input that is not a well-formed
//! sequence yields whatever items the scan happens to produce (often an
//! empty list) rather than an error, which keeps stray script output from
//! turning into hard failures. [`decode_strict`] is the opt-in variant
//! that rejects malformed input instead.
//!
//! ## Examples
//!
//! ```rust
//! use asmarshal::sequence;
//!
//! let wire = sequence::encode(&["a", "b", "c"]);
//! assert_eq!(wire, "{a|b|c}");
//! assert_eq!(sequence::decode(&wire), vec!["a", "b", "c"]);
//!
//! assert_eq!(
//!     sequence::decode("{a|{b|c}|d}"),
//!     vec!["a".to_string(), "{b|c}".to_string(), "d".to_string()],
//! );
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// Encodes a list of items into its wire form.
///
/// Each item is rendered with its `Display` implementation and the results
/// are joined with `|` inside one brace pair. An empty slice encodes as
/// `{}`. Items containing `|`, `{`, or `}` are written as-is; an item equal
/// to the empty string is indistinguishable from an absent item on the
/// wire, so callers that need it preserved must escape at a higher layer.
///
/// # Examples
///
/// ```rust
/// use asmarshal::sequence;
///
/// assert_eq!(sequence::encode(&[1, 2, 3]), "{1|2|3}");
/// assert_eq!(sequence::encode::<&str>(&[]), "{}");
///
/// let nested = sequence::encode(&[sequence::encode(&["b", "c"]), "d".to_string()]);
/// assert_eq!(nested, "{{b|c}|d}");
/// ```
#[must_use]
pub fn encode<T: fmt::Display>(items: &[T]) -> String {
    let body = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|");
    format!("{{{body}}}")
}

/// Decodes a bridge sequence string into its top-level items.
///
/// The scanner walks the text once, tracking brace depth. `{` and `}`
/// adjust the depth; a `|` seen at depth one ends the current item, and so
/// does the final character of the input (which itself is never part of an
/// item). Nested material passes through untouched.
///
/// This never fails. Malformed input degrades instead: text outside any
/// brace pair is skipped, an item still open when depth returns to zero
/// mid-input is lost, an unterminated sequence loses whatever followed the
/// last separator, and input that never reaches depth one produces an
/// empty list.
///
/// # Examples
///
/// ```rust
/// use asmarshal::sequence;
///
/// assert_eq!(sequence::decode("{a|b}"), vec!["a", "b"]);
/// assert_eq!(sequence::decode("{}"), Vec::<String>::new());
/// assert_eq!(sequence::decode("no braces"), Vec::<String>::new());
/// assert_eq!(sequence::decode("{a|}"), vec!["a", ""]);
/// ```
#[must_use]
pub fn decode(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0usize;
    for (idx, ch) in text.char_indices() {
        let at_end = idx + ch.len_utf8() == text.len();
        if depth == 1 && (ch == '|' || at_end) {
            // A bare `{}` is the empty sequence, not a sequence of one
            // empty item.
            let empty_body = at_end && ch == '}' && items.is_empty() && idx == start;
            if !empty_body {
                items.push(text[start..idx].to_string());
            }
            start = idx + ch.len_utf8();
        } else if ch == '{' {
            depth += 1;
            if depth == 1 {
                start = idx + 1;
            }
        } else if ch == '}' {
            depth -= 1;
        }
    }
    items
}

/// Decodes a bridge sequence string, rejecting malformed input.
///
/// The text must start with `{`, every brace must balance, and nothing may
/// follow the brace that closes the sequence. Accepted input decodes
/// exactly as [`decode`] would.
///
/// # Errors
///
/// Returns [`Error::MalformedSequence`] with the byte offset of the first
/// violation.
///
/// # Examples
///
/// ```rust
/// use asmarshal::sequence;
///
/// assert_eq!(sequence::decode_strict("{a|b}").unwrap(), vec!["a", "b"]);
/// assert!(sequence::decode_strict("{a|b").is_err());
/// assert!(sequence::decode_strict("{a}trailing").is_err());
/// ```
pub fn decode_strict(text: &str) -> Result<Vec<String>> {
    if !text.starts_with('{') {
        return Err(Error::malformed_sequence(0, "expected opening '{'"));
    }
    let mut depth: i32 = 0;
    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return Err(Error::malformed_sequence(idx, "unmatched '}'"));
                }
                if depth == 0 && idx + 1 != text.len() {
                    return Err(Error::malformed_sequence(
                        idx + 1,
                        "content after closing '}'",
                    ));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(Error::malformed_sequence(
            text.len(),
            "unterminated sequence",
        ));
    }
    Ok(decode(text))
}
