//! Date conversions across the string bridge.
//!
//! Dates travel in the long textual form AppleScript prints for a date
//! value, for example `Thursday, January 1, 1970 12:00:00 AM`.
//! Both directions use the single pattern in [`DATE_FORMAT`]: encoding
//! renders a [`NaiveDateTime`] into that form, decoding parses it back. The
//! representation has no time zone and one-second resolution, so encoding
//! drops any sub-second precision the value carried.
//!
//! ## Examples
//!
//! ```rust
//! use asmarshal::date;
//! use chrono::NaiveDate;
//!
//! let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//!
//! let text = date::encode(&epoch);
//! assert_eq!(text, "Thursday, January 1, 1970 12:00:00 AM");
//! assert_eq!(date::decode(&text).unwrap(), epoch);
//! ```

use crate::error::{Error, Result};
use chrono::NaiveDateTime;

/// The long date pattern used on the wire.
///
/// Weekday and month names are written in full, day-of-month and hour are
/// unpadded, and the clock is twelve-hour with an `AM`/`PM` marker. Parsing
/// accepts zero-padded day and hour fields as well, so `January 01` decodes
/// the same as `January 1`.
pub const DATE_FORMAT: &str = "%A, %B %-d, %Y %-I:%M:%S %p";

/// Encodes a date-time into its wire form.
///
/// # Examples
///
/// ```rust
/// use asmarshal::date;
/// use chrono::NaiveDate;
///
/// let dt = NaiveDate::from_ymd_opt(2003, 7, 16)
///     .unwrap()
///     .and_hms_opt(15, 5, 9)
///     .unwrap();
/// assert_eq!(date::encode(&dt), "Wednesday, July 16, 2003 3:05:09 PM");
/// ```
#[must_use]
pub fn encode(value: &NaiveDateTime) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Decodes a bridge date string.
///
/// The named weekday must agree with the calendar date; a mismatch is
/// rejected rather than silently recomputed.
///
/// # Errors
///
/// Returns [`Error::ParseDate`] when the text does not match
/// [`DATE_FORMAT`] or names an impossible date.
///
/// # Examples
///
/// ```rust
/// use asmarshal::date;
///
/// let dt = date::decode("Thursday, January 1, 1970 12:00:00 AM").unwrap();
/// assert_eq!(dt.to_string(), "1970-01-01 00:00:00");
///
/// assert!(date::decode("next Tuesday").is_err());
/// ```
pub fn decode(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATE_FORMAT).map_err(|source| Error::ParseDate {
        literal: text.to_string(),
        source,
    })
}
