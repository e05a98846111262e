//! Boolean conversions across the string bridge.
//!
//! The AppleScript side renders booleans as the words `True`/`False` and is
//! liberal about what it accepts back. [`encode`] produces the canonical
//! capitalized form; [`decode`] keeps the bridge's permissive reading: a
//! closed set of truthy tokens, everything else false, no failure mode.
//!
//! Callers that would rather surface garbage input than coerce it to `false`
//! can use [`decode_strict`], which recognizes an explicit falsy set and
//! reports anything outside both sets as an error.
//!
//! ## Examples
//!
//! ```rust
//! use asmarshal::boolean;
//!
//! assert_eq!(boolean::encode(true), "True");
//! assert!(boolean::decode("YES"));
//! assert!(!boolean::decode("affirmative"));
//! assert!(boolean::decode_strict("affirmative").is_err());
//! ```

use crate::error::{Error, Result};

/// Truthy tokens accepted on decode, compared case-insensitively.
const TRUTHY: [&str; 3] = ["true", "yes", "1"];

/// Falsy tokens recognized by [`decode_strict`], compared case-insensitively.
const FALSY: [&str; 3] = ["false", "no", "0"];

/// Encodes a boolean into its wire form.
///
/// # Examples
///
/// ```rust
/// use asmarshal::boolean;
///
/// assert_eq!(boolean::encode(true), "True");
/// assert_eq!(boolean::encode(false), "False");
/// ```
#[inline]
#[must_use]
pub fn encode(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Decodes a bridge boolean string permissively.
///
/// Returns `true` exactly when the input case-insensitively equals one of
/// `"true"`, `"yes"`, or `"1"`. Every other input, including misspellings and
/// empty strings, decodes to `false`. The bridge has always coerced this way,
/// so the function is deliberately infallible; use [`decode_strict`] when
/// unrecognized tokens should be reported instead.
///
/// # Examples
///
/// ```rust
/// use asmarshal::boolean;
///
/// assert!(boolean::decode("true"));
/// assert!(boolean::decode("Yes"));
/// assert!(boolean::decode("1"));
/// assert!(!boolean::decode("0"));
/// assert!(!boolean::decode("untrue"));
/// ```
#[must_use]
pub fn decode(text: &str) -> bool {
    TRUTHY.iter().any(|token| text.eq_ignore_ascii_case(token))
}

/// Decodes a bridge boolean string, rejecting unrecognized tokens.
///
/// Accepts the same truthy set as [`decode`] plus the falsy set
/// `"false"`/`"no"`/`"0"` (case-insensitive). Anything else fails with
/// [`Error::UnknownBoolean`].
///
/// # Errors
///
/// Returns [`Error::UnknownBoolean`] if the input is in neither set.
///
/// # Examples
///
/// ```rust
/// use asmarshal::boolean;
///
/// assert_eq!(boolean::decode_strict("no"), Ok(false));
/// assert!(boolean::decode_strict("").is_err());
/// ```
pub fn decode_strict(text: &str) -> Result<bool> {
    if decode(text) {
        Ok(true)
    } else if FALSY.iter().any(|token| text.eq_ignore_ascii_case(token)) {
        Ok(false)
    } else {
        Err(Error::unknown_boolean(text))
    }
}
