//! Error types for bridge marshaling.
//!
//! Every fallible decode in this crate reports one of the variants below.
//! Encoding never fails: all native values have a textual wire form.
//!
//! ## Error Categories
//!
//! - **Parse errors**: a number or date string does not match the expected
//!   literal grammar ([`Error::ParseNumber`], [`Error::ParseDate`])
//! - **Structural errors**: an associative-array string fails validation
//!   ([`Error::InvalidArray`], [`Error::MalformedPair`])
//! - **Strict-mode errors**: reported only by the `decode_strict` variants,
//!   which reject input the permissive decoders would silently tolerate
//!   ([`Error::MalformedSequence`], [`Error::UnknownBoolean`])
//!
//! ## Examples
//!
//! ```rust
//! use asmarshal::{number, Error};
//!
//! let err = number::decode("abc").unwrap_err();
//! assert_eq!(err, Error::parse_number("abc"));
//! assert!(err.to_string().contains("abc"));
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while decoding bridge strings.
///
/// The enum is `Clone + PartialEq` so tests and callers can match on exact
/// failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Number decode input parsed neither as an integer nor as a float.
    #[error("cannot parse {literal:?} as an integer or float")]
    ParseNumber { literal: String },

    /// Date decode input did not match the bridge date layout.
    ///
    /// Carries the underlying [`chrono::ParseError`] describing which field
    /// of the layout failed.
    #[error("cannot parse {literal:?} as a date: {source}")]
    ParseDate {
        literal: String,
        source: chrono::ParseError,
    },

    /// Associative-array decode input failed the minimum-length or
    /// bracket-presence checks.
    #[error("'{literal}' is not a valid associative array")]
    InvalidArray { literal: String },

    /// A `key=value` pair inside an associative array contained zero or more
    /// than one `=`, making the split ambiguous.
    #[error("malformed pair {pair:?}: expected exactly one '='")]
    MalformedPair { pair: String },

    /// Strict sequence decode found unbalanced or misplaced braces.
    ///
    /// `offset` is the byte position of the offending character (input length
    /// for truncated input). The permissive [`sequence::decode`] never reports
    /// this; see the module docs for the difference.
    ///
    /// [`sequence::decode`]: crate::sequence::decode
    #[error("malformed sequence at byte {offset}: {msg}")]
    MalformedSequence { offset: usize, msg: String },

    /// Strict boolean decode saw a token outside the recognized truthy and
    /// falsy sets.
    #[error("unrecognized boolean token {token:?}")]
    UnknownBoolean { token: String },
}

impl Error {
    /// Creates an [`Error::ParseNumber`] for the given input literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmarshal::Error;
    ///
    /// let err = Error::parse_number("forty-two");
    /// assert!(err.to_string().contains("forty-two"));
    /// ```
    pub fn parse_number(literal: &str) -> Self {
        Error::ParseNumber {
            literal: literal.to_string(),
        }
    }

    /// Creates an [`Error::InvalidArray`] for the given input string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asmarshal::Error;
    ///
    /// let err = Error::invalid_array("<broken");
    /// assert!(err.to_string().contains("not a valid associative array"));
    /// ```
    pub fn invalid_array(literal: &str) -> Self {
        Error::InvalidArray {
            literal: literal.to_string(),
        }
    }

    /// Creates an [`Error::MalformedPair`] for a pair that failed the `=` split.
    pub fn malformed_pair(pair: &str) -> Self {
        Error::MalformedPair {
            pair: pair.to_string(),
        }
    }

    /// Creates an [`Error::MalformedSequence`] at the given byte offset.
    pub fn malformed_sequence(offset: usize, msg: &str) -> Self {
        Error::MalformedSequence {
            offset,
            msg: msg.to_string(),
        }
    }

    /// Creates an [`Error::UnknownBoolean`] for an unrecognized token.
    pub fn unknown_boolean(token: &str) -> Self {
        Error::UnknownBoolean {
            token: token.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
