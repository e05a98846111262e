//! # asmarshal
//!
//! Marshalling for the textual bridge between a host program and the
//! AppleScript automation runtime.
//!
//! ## Why a text bridge?
//!
//! Driving the scripting runtime from another process happens over plain
//! strings: arguments go in as text, results come back as text. Each value
//! kind has one textual form on that bridge, chosen to match what the
//! runtime itself prints, so values cross in either direction without a
//! translation table on the far side. This crate is the near side of that
//! contract: encoders that produce the runtime's forms and decoders that
//! read them back.
//!
//! ## Key Features
//!
//! - **Per-kind codecs**: booleans, numbers, dates, sequences, and
//!   associative arrays each get a small `encode`/`decode` pair
//! - **Nesting without escaping**: the sequence scanner tracks brace depth,
//!   so nested sequences ride along as single items for a second pass
//! - **Permissive where the runtime is**: stray text decodes to a false
//!   boolean or an empty sequence instead of failing, with strict variants
//!   for callers that want errors
//! - **Ordered records**: mapping entries keep insertion order on the wire
//!   and through a decode
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Wire Forms
//!
//! | Kind | Form | Example |
//! |------|------|---------|
//! | Boolean | capitalized word | `True` |
//! | Number | plain literal | `42`, `3.14` |
//! | Date | long textual form | `Thursday, January 1, 1970 12:00:00 AM` |
//! | Sequence | braced, pipe-separated | `{a\|b\|c}` |
//! | Associative array | bracketed pairs | `<name=hal><port=23>` |
//!
//! The full grammar, including how malformed input degrades, is documented
//! in the [`format`] module.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! asmarshal = "0.1"
//! ```
//!
//! ### Encoding a record and decoding the reply
//!
//! ```rust
//! use asmarshal::{boolean, mapping, record, sequence};
//!
//! let request = record! {
//!     "name" => "hal",
//!     "awake" => true,
//!     "memories" => vec!["pod bay", "doors"],
//! };
//!
//! let wire = mapping::encode(&request);
//! assert_eq!(wire, "<name=hal><awake=True><memories={pod bay|doors}>");
//!
//! // The reply comes back in the same shape: raw text per key, decoded
//! // kind by kind in a second pass.
//! let entries = mapping::decode(&wire).unwrap();
//! assert!(boolean::decode(&entries["awake"]));
//! assert_eq!(sequence::decode(&entries["memories"]), vec!["pod bay", "doors"]);
//! ```
//!
//! ### Scalars on their own
//!
//! ```rust
//! use asmarshal::{boolean, date, number, Number};
//! use chrono::NaiveDate;
//!
//! assert_eq!(boolean::encode(true), "True");
//! assert!(boolean::decode("YES"));
//!
//! assert_eq!(number::decode("42"), Ok(Number::Integer(42)));
//! assert_eq!(number::decode("2.5"), Ok(Number::Float(2.5)));
//!
//! let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! assert_eq!(date::encode(&epoch), "Thursday, January 1, 1970 12:00:00 AM");
//! ```
//!
//! ## Decoding Philosophy
//!
//! The bridge predates this crate, and its decoders are shaped by what the
//! runtime actually sends rather than by what a clean grammar would
//! permit. The permissive defaults ([`boolean::decode`],
//! [`sequence::decode`]) reproduce that behavior exactly, including its
//! silent degradation on malformed input. Strict variants
//! ([`boolean::decode_strict`], [`sequence::decode_strict`]) are offered
//! alongside for validation at the edges of a system. Numbers, dates, and
//! associative arrays always report errors, matching the runtime's own
//! refusal to coerce those.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API
//! - Proper error propagation with `Result` types
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - Scalar encode/decode in both directions
//! - **`nested_sequences.rs`** - Two-pass decoding of nested sequences
//! - **`record_building.rs`** - Building and round-tripping records
//!
//! Run any example with: `cargo run --example <name>`

pub mod boolean;
pub mod date;
pub mod error;
pub mod format;
pub mod macros;
pub mod mapping;
pub mod number;
pub mod sequence;

pub use error::{Error, Result};
pub use mapping::{Record, Value};
pub use number::Number;
