//! Bridge Wire Format Reference
//!
//! This module documents the textual forms used to pass values to and from
//! the AppleScript automation runtime, as implemented by this library.
//!
//! # Overview
//!
//! The bridge has no binary channel: every value crosses as a single line
//! of text, and each side re-derives structure from that text. The forms
//! below were chosen to match what AppleScript itself prints for its
//! values, so text produced over there decodes here without a translation
//! layer in between.
//!
//! There is no quoting or escaping anywhere in the format. The delimiter
//! characters (`|`, `{`, `}`, `<`, `>`, `=`) are structural wherever the
//! decoder is looking for them, and content containing them must be kept
//! out of positions where they would be misread.
//!
//! # Booleans
//!
//! Encoded with an initial capital, the way AppleScript prints them:
//!
//! ```text
//! True
//! False
//! ```
//!
//! Decoding is case-insensitive and accepts the spellings `true`, `yes`,
//! and `1` as true. **Everything else decodes as false** rather than
//! failing, including the empty string and arbitrary text. The strict
//! variant instead recognizes `false`, `no`, and `0` as false and rejects
//! anything outside both sets.
//!
//! # Numbers
//!
//! Plain decimal literals with no wrapping:
//!
//! ```text
//! 42
//! -3.14
//! 1e3
//! ```
//!
//! Decoding tries the integer form first and the float form second, and
//! tags the result with whichever succeeded. Surrounding whitespace is
//! ignored. An integer literal too large for the integer type falls
//! through to the float attempt. Text matching neither form is an error.
//!
//! # Dates
//!
//! The long textual form, full weekday and month names, twelve-hour clock:
//!
//! ```text
//! Thursday, January 1, 1970 12:00:00 AM
//! ```
//!
//! Day-of-month and hour are written unpadded but parse padded as well.
//! The named weekday must agree with the calendar date. There is no time
//! zone and no sub-second component; encoding truncates to whole seconds.
//!
//! # Sequences
//!
//! One brace pair around the whole list, items separated by `|`:
//!
//! ```text
//! {a|b|c}
//! {}
//! {a|{b|c}|d}
//! ```
//!
//! Items are split only at nesting depth one, so a nested sequence rides
//! along as a single item (`{b|c}` above) and is decoded in a second pass.
//! The empty sequence is `{}`.
//!
//! Decoding never fails. Malformed input degrades:
//!
//! | Input | Result | Note |
//! |-------|--------|------|
//! | `plain text` | *(empty)* | never enters a brace pair |
//! | `{a}x` | *(empty)* | close brace is not the final character |
//! | `{a\|b}x` | `a` | the open item at the early close is lost |
//! | `{a\|b` | `a`, *(empty)* | unterminated; final character is consumed as a terminator |
//! | `{a\|}` | `a`, *(empty)* | trailing separator yields an empty item |
//!
//! A strict variant is available that rejects these shapes instead.
//!
//! # Associative Arrays
//!
//! A run of angle-bracketed `key=value` pairs with nothing between them:
//!
//! ```text
//! <name=hal><awake=True><tags={red|blue}>
//! ```
//!
//! Decoding requires the text to be at least three characters and to
//! contain a `<` and a `>` somewhere; the first and last characters are
//! then stripped unchecked as the frame, the body splits on the `><`
//! seam, and each pair splits on exactly one `=`. Pair order is
//! preserved; a duplicated key keeps its first position and takes the
//! last value seen.
//!
//! Values come back as raw text. A value that is itself a sequence, a
//! number, a boolean, or a date needs the matching decoder applied in a
//! second pass.
//!
//! An empty mapping has no wire form: zero pairs encode as the empty
//! string, which the decoder rejects.
//!
//! # Limitations
//!
//! - **No escaping**: delimiter characters inside content corrupt the
//!   enclosing structure.
//! - **No type tags**: the wire does not distinguish the text `"True"`
//!   from the boolean, or `"{a}"` from a sequence; the receiver decides
//!   which decoder to apply.
//! - **Empty-item ambiguity**: a sequence of one empty string encodes as
//!   `{}`, identical to the empty sequence.
//! - **Single line**: the forms carry no newlines of their own and are
//!   exchanged as one line per value.

// This module contains only documentation; no implementation code
